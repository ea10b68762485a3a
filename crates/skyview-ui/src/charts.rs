//! Chart configurations for the dashboard surfaces.
//!
//! The configuration types serialize to the JSON object a Chart.js-style
//! engine takes. Drawing itself sits behind [`ChartEngine`].

use std::convert::Infallible;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use skyview_core::ElementIds;
use skyview_weather::{CityForecast, WeeklySeries};

use crate::view::ViewPort;

const ACCENT: &str = "#7b67ff";
const WHITE: &str = "#fff";
const GRID: &str = "rgba(255, 255, 255, 0.1)";
const DEGREES: &str = "°C";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub border_color: String,
    pub background_color: String,
    pub border_width: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_hover_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_border_width: Option<u32>,
}

impl Dataset {
    fn bars(label: &str, data: &[f64], rgb: &str) -> Self {
        Self {
            label: label.to_string(),
            data: data.to_vec(),
            border_color: format!("rgba({rgb}, 1)"),
            background_color: format!("rgba({rgb}, 0.7)"),
            border_width: 2,
            tension: None,
            fill: None,
            point_radius: None,
            point_hover_radius: None,
            point_background_color: None,
            point_border_color: None,
            point_border_width: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub plugins: Plugins,
    pub scales: Scales,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plugins {
    pub legend: Legend,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<Tooltip>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    pub display: bool,
    pub labels: LegendLabels,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendLabels {
    pub color: String,
    pub font: Font,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tooltip {
    pub background_color: String,
    pub title_color: String,
    pub body_color: String,
    pub border_color: String,
    pub border_width: u32,
    pub padding: u32,
    pub display_colors: bool,
    /// Appended to every value shown in the tooltip body
    pub value_suffix: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scales {
    pub y: Axis,
    pub x: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin_at_zero: Option<bool>,
    pub ticks: Ticks,
    pub grid: Grid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticks {
    pub color: String,
    /// Appended to every tick label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    pub color: String,
}

fn legend() -> Legend {
    Legend {
        display: true,
        labels: LegendLabels {
            color: WHITE.to_string(),
            font: Font { size: 14 },
        },
    }
}

fn scales(begin_at_zero: Option<bool>) -> Scales {
    let grid = Grid {
        color: GRID.to_string(),
    };
    Scales {
        y: Axis {
            begin_at_zero,
            ticks: Ticks {
                color: WHITE.to_string(),
                suffix: Some(DEGREES.to_string()),
            },
            grid: grid.clone(),
        },
        x: Axis {
            begin_at_zero: None,
            ticks: Ticks {
                color: WHITE.to_string(),
                suffix: None,
            },
            grid,
        },
    }
}

/// Line chart of hourly temperatures.
///
/// Labels and values are passed through as given; a length mismatch is the
/// engine's business.
pub fn temperature_chart(labels: &[String], values: &[f64]) -> ChartConfig {
    ChartConfig {
        kind: ChartKind::Line,
        data: ChartData {
            labels: labels.to_vec(),
            datasets: vec![Dataset {
                label: "Temperatura (°C)".to_string(),
                data: values.to_vec(),
                border_color: ACCENT.to_string(),
                background_color: "rgba(123, 103, 255, 0.1)".to_string(),
                border_width: 3,
                tension: Some(0.4),
                fill: Some(true),
                point_radius: Some(5),
                point_hover_radius: Some(7),
                point_background_color: Some(ACCENT.to_string()),
                point_border_color: Some(WHITE.to_string()),
                point_border_width: Some(2),
            }],
        },
        options: ChartOptions {
            responsive: true,
            maintain_aspect_ratio: false,
            plugins: Plugins {
                legend: legend(),
                tooltip: Some(Tooltip {
                    background_color: "rgba(0, 0, 0, 0.8)".to_string(),
                    title_color: WHITE.to_string(),
                    body_color: WHITE.to_string(),
                    border_color: ACCENT.to_string(),
                    border_width: 1,
                    padding: 12,
                    display_colors: false,
                    value_suffix: DEGREES.to_string(),
                }),
            },
            scales: scales(Some(false)),
        },
    }
}

/// Grouped bar chart of daily maxima and minima.
pub fn weekly_chart(series: &WeeklySeries) -> ChartConfig {
    ChartConfig {
        kind: ChartKind::Bar,
        data: ChartData {
            labels: series.labels.clone(),
            datasets: vec![
                Dataset::bars("Temp. Máxima (°C)", &series.max_temps, "255, 99, 132"),
                Dataset::bars("Temp. Mínima (°C)", &series.min_temps, "54, 162, 235"),
            ],
        },
        options: ChartOptions {
            responsive: true,
            maintain_aspect_ratio: false,
            plugins: Plugins {
                legend: legend(),
                tooltip: None,
            },
            scales: scales(None),
        },
    }
}

/// Something that can draw a chart onto a page surface.
pub trait ChartEngine {
    type Error;

    fn draw(&self, surface_id: &str, config: &ChartConfig) -> Result<(), Self::Error>;
}

/// Engine that keeps every drawn chart, for tests and headless output.
#[derive(Debug, Default)]
pub struct RecordingEngine {
    drawn: Mutex<Vec<(String, ChartConfig)>>,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Charts drawn so far as `(surface id, config)`.
    pub fn drawn(&self) -> Vec<(String, ChartConfig)> {
        self.drawn.lock().clone()
    }
}

impl ChartEngine for RecordingEngine {
    type Error = Infallible;

    fn draw(&self, surface_id: &str, config: &ChartConfig) -> Result<(), Infallible> {
        self.drawn
            .lock()
            .push((surface_id.to_string(), config.clone()));
        Ok(())
    }
}

/// Ids of the two chart surfaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSurfaces {
    pub temperature: String,
    pub weekly: String,
}

impl Default for ChartSurfaces {
    fn default() -> Self {
        Self::from(&ElementIds::default())
    }
}

impl From<&ElementIds> for ChartSurfaces {
    fn from(ids: &ElementIds) -> Self {
        Self {
            temperature: ids.temperature_chart.clone(),
            weekly: ids.weekly_chart.clone(),
        }
    }
}

pub struct ChartRenderer<V, E> {
    view: Arc<V>,
    engine: E,
    surfaces: ChartSurfaces,
}

impl<V: ViewPort, E: ChartEngine> ChartRenderer<V, E> {
    pub fn new(view: Arc<V>, engine: E, surfaces: ChartSurfaces) -> Self {
        Self {
            view,
            engine,
            surfaces,
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Draw the hourly line chart. Does nothing when the page has no
    /// temperature surface.
    ///
    /// # Errors
    /// Engine failures are passed through untouched.
    pub fn render_temperature_series(&self, labels: &[String], values: &[f64]) -> Result<(), E::Error> {
        if !self.view.has_element(&self.surfaces.temperature) {
            tracing::debug!("No '{}' surface, skipping temperature chart", self.surfaces.temperature);
            return Ok(());
        }
        self.engine
            .draw(&self.surfaces.temperature, &temperature_chart(labels, values))
    }

    /// Draw the weekly bar chart. Does nothing when the page has no weekly
    /// surface.
    ///
    /// # Errors
    /// Engine failures are passed through untouched.
    pub fn render_weekly_forecast(&self, series: &WeeklySeries) -> Result<(), E::Error> {
        if !self.view.has_element(&self.surfaces.weekly) {
            tracing::debug!("No '{}' surface, skipping weekly chart", self.surfaces.weekly);
            return Ok(());
        }
        self.engine.draw(&self.surfaces.weekly, &weekly_chart(series))
    }

    /// Draw the charts for a fetched forecast. The line chart is left out
    /// when the forecast has no hourly temperatures.
    pub fn render_forecast(&self, forecast: &CityForecast) -> Result<(), E::Error> {
        if forecast.hourly.is_empty() {
            tracing::debug!("No hourly temperatures, skipping temperature chart");
        } else {
            self.render_temperature_series(&forecast.hourly.labels(), &forecast.hourly.values())?;
        }
        self.render_weekly_forecast(&forecast.weekly)
    }
}
