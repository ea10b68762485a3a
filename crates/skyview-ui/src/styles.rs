//! Inline styling for notifications and the shared slide animations.

use std::time::Duration;

use crate::notify::Severity;

/// Keyframes injected once into the document head.
pub const ANIMATION_KEYFRAMES: &str = "
    @keyframes slideIn {
        from { transform: translateX(400px); opacity: 0; }
        to { transform: translateX(0); opacity: 1; }
    }
    @keyframes slideOut {
        from { transform: translateX(0); opacity: 1; }
        to { transform: translateX(400px); opacity: 0; }
    }
";

/// Background color of a notification.
pub fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "#4effb0",
        Severity::Error => "#ff4e70",
        Severity::Info => "#7b67ff",
    }
}

pub fn slide_in(duration: Duration) -> String {
    format!("slideIn {}s ease", duration.as_secs_f64())
}

pub fn slide_out(duration: Duration) -> String {
    format!("slideOut {}s ease", duration.as_secs_f64())
}

/// Inline style of a notification pinned to the top-right corner.
pub fn notification_style(severity: Severity, animation: &str) -> String {
    format!(
        "position: fixed; top: 20px; right: 20px; padding: 15px 25px; \
         background: {}; color: #000; border-radius: 8px; font-weight: 600; \
         z-index: 10000; animation: {};",
        severity_color(severity),
        animation
    )
}

/// Value of the `animation` property in an inline style, if any.
pub fn animation_of(style: &str) -> Option<&str> {
    style
        .split(';')
        .filter_map(|decl| decl.split_once(':'))
        .find(|(prop, _)| prop.trim() == "animation")
        .map(|(_, value)| value.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_colors() {
        assert_eq!(severity_color(Severity::Success), "#4effb0");
        assert_eq!(severity_color(Severity::Error), "#ff4e70");
        assert_eq!(severity_color(Severity::Info), "#7b67ff");
    }

    #[test]
    fn test_slide_animations() {
        assert_eq!(slide_in(Duration::from_millis(300)), "slideIn 0.3s ease");
        assert_eq!(slide_out(Duration::from_millis(300)), "slideOut 0.3s ease");
        assert_eq!(slide_out(Duration::from_secs(1)), "slideOut 1s ease");
    }

    #[test]
    fn test_notification_style_carries_color_and_animation() {
        let style = notification_style(Severity::Error, "slideIn 0.3s ease");
        assert!(style.contains("background: #ff4e70;"));
        assert!(style.contains("position: fixed;"));
        assert_eq!(animation_of(&style), Some("slideIn 0.3s ease"));
    }

    #[test]
    fn test_animation_of_without_animation() {
        assert_eq!(animation_of("color: red; top: 0"), None);
    }

    #[test]
    fn test_keyframes_define_both_animations() {
        assert!(ANIMATION_KEYFRAMES.contains("@keyframes slideIn"));
        assert!(ANIMATION_KEYFRAMES.contains("@keyframes slideOut"));
    }
}
