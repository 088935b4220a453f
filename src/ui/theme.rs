use crate::logic::thresholds::{HEAT_THRESHOLD_C, HEAVY_RAIN_THRESHOLD_MM, HIGH_HUMIDITY_PERCENT};
use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    // Base colors
    pub const FG: Color = Color::White;
    pub const DIM: Color = Color::DarkGray;
    pub const ACCENT: Color = Color::Green;
    pub const HIGHLIGHT: Color = Color::Cyan;

    // Status colors
    pub const SUCCESS: Color = Color::Green;
    pub const WARNING: Color = Color::Yellow;
    pub const ERROR: Color = Color::Red;

    // Weather colors
    pub const TEMP_COOL: Color = Color::Cyan;
    pub const TEMP_MILD: Color = Color::Green;
    pub const TEMP_HOT: Color = Color::Red;
    pub const RAIN_DRY: Color = Color::Gray;
    pub const RAIN_WET: Color = Color::LightBlue;
    pub const RAIN_HEAVY: Color = Color::Blue;

    // Styles
    pub fn title() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn header() -> Style {
        Style::default().fg(Self::FG).add_modifier(Modifier::BOLD)
    }

    pub fn normal() -> Style {
        Style::default().fg(Self::FG)
    }

    pub fn dim() -> Style {
        Style::default().fg(Self::DIM)
    }

    pub fn highlight() -> Style {
        Style::default()
            .fg(Self::HIGHLIGHT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected() -> Style {
        Style::default()
            .bg(Color::DarkGray)
            .fg(Self::FG)
            .add_modifier(Modifier::BOLD)
    }

    pub fn success() -> Style {
        Style::default().fg(Self::SUCCESS)
    }

    pub fn warning() -> Style {
        Style::default().fg(Self::WARNING)
    }

    pub fn error() -> Style {
        Style::default().fg(Self::ERROR)
    }

    pub fn temp_color(temp_c: f64) -> Color {
        if temp_c < 15.0 {
            Self::TEMP_COOL
        } else if temp_c <= HEAT_THRESHOLD_C {
            Self::TEMP_MILD
        } else {
            Self::TEMP_HOT
        }
    }

    pub fn rain_color(rain_mm: f64) -> Color {
        if rain_mm <= 0.0 {
            Self::RAIN_DRY
        } else if rain_mm <= HEAVY_RAIN_THRESHOLD_MM {
            Self::RAIN_WET
        } else {
            Self::RAIN_HEAVY
        }
    }

    pub fn humidity_color(humidity_percent: f64) -> Color {
        if humidity_percent > HIGH_HUMIDITY_PERCENT {
            Self::WARNING
        } else {
            Self::SUCCESS
        }
    }

    pub fn nav_key() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn nav_label() -> Style {
        Style::default().fg(Self::DIM)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::DIM)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT)
    }
}
