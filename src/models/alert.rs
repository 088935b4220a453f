use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Success,
    Info,
    Warning,
    Danger,
}

impl AlertSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertSeverity::Success => "success",
            AlertSeverity::Info => "info",
            AlertSeverity::Warning => "warning",
            AlertSeverity::Danger => "danger",
        }
    }

    pub fn color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            AlertSeverity::Success => Color::Green,
            AlertSeverity::Info => Color::Blue,
            AlertSeverity::Warning => Color::Yellow,
            AlertSeverity::Danger => Color::Red,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            AlertSeverity::Success => "✓",
            AlertSeverity::Info => "ℹ",
            AlertSeverity::Warning => "⚠",
            AlertSeverity::Danger => "!",
        }
    }
}

impl std::fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    /// Identifier of the rule that raised it
    pub id: String,
    pub severity: AlertSeverity,
    pub message: String,
}

impl Alert {
    pub fn new(
        id: impl Into<String>,
        severity: AlertSeverity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            severity,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Alert {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}",
            self.severity.as_str().to_uppercase(),
            self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_serializes_lowercase() {
        let json = serde_json::to_string(&AlertSeverity::Danger).unwrap();
        assert_eq!(json, "\"danger\"");
    }

    #[test]
    fn alert_display_upper_cases_severity() {
        let alert = Alert::new("heat", AlertSeverity::Warning, "Hot out");
        assert_eq!(alert.to_string(), "WARNING: Hot out");
    }

    #[test]
    fn severity_ordering() {
        assert!(AlertSeverity::Success < AlertSeverity::Info);
        assert!(AlertSeverity::Warning < AlertSeverity::Danger);
    }
}
