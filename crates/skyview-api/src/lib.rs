//! Client for the dashboard server's `/api` routes.

pub mod backend;
pub mod client;
pub mod error;
pub mod types;

pub use backend::DashboardBackend;
pub use client::DashboardClient;
pub use error::{ApiError, ApiResult};
pub use types::*;
