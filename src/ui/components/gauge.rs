use crate::logic::thresholds::{HEAT_THRESHOLD_C, HEAVY_RAIN_THRESHOLD_MM, HIGH_HUMIDITY_PERCENT};
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Single weather value with a bar and a tick where its alert threshold sits.
pub struct WeatherGauge<'a> {
    title: &'a str,
    value: Option<f64>,
    unit: &'a str,
    min: f64,
    max: f64,
    alert_at: Option<f64>,
    palette: fn(f64) -> Color,
    precision: usize,
}

impl<'a> WeatherGauge<'a> {
    pub fn new(title: &'a str, value: Option<f64>, unit: &'a str) -> Self {
        Self {
            title,
            value,
            unit,
            min: 0.0,
            max: 100.0,
            alert_at: None,
            palette: |_| Theme::FG,
            precision: 1,
        }
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn alert_at(mut self, threshold: f64) -> Self {
        self.alert_at = Some(threshold);
        self
    }

    pub fn palette(mut self, palette: fn(f64) -> Color) -> Self {
        self.palette = palette;
        self
    }

    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    fn color_for(&self, value: f64) -> Color {
        (self.palette)(value)
    }

    fn ratio(&self, value: f64) -> f64 {
        ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }
}

impl Widget for WeatherGauge<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 3 || area.width < 10 {
            return;
        }

        let block = Block::default()
            .title(self.title)
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let value = match self.value {
            Some(v) => v,
            None => {
                Paragraph::new(Span::styled("N/A", Theme::dim())).render(inner, buf);
                return;
            }
        };

        let color = self.color_for(value);
        let mut spans = vec![Span::styled(
            format!("{:.prec$}{}", value, self.unit, prec = self.precision),
            Style::default().fg(color),
        )];
        if self.alert_at.is_some_and(|t| value > t) {
            spans.push(Span::styled(" ⚠", Theme::warning()));
        }
        Paragraph::new(Line::from(spans)).render(inner, buf);

        if inner.height < 2 {
            return;
        }

        let bar_y = inner.y + 1;
        let filled = (inner.width as f64 * self.ratio(value)) as u16;
        let tick = self
            .alert_at
            .map(|t| inner.x + (inner.width.saturating_sub(1) as f64 * self.ratio(t)) as u16);

        for x in inner.x..inner.x + inner.width {
            let (ch, fg) = if Some(x) == tick {
                ('│', Theme::WARNING)
            } else if x < inner.x + filled {
                ('█', color)
            } else {
                ('░', color)
            };
            buf[(x, bar_y)].set_char(ch).set_fg(fg);
        }
    }
}

pub fn temperature_gauge(value: Option<f64>) -> WeatherGauge<'static> {
    WeatherGauge::new("Temperature", value, "°C")
        .range(0.0, 40.0)
        .alert_at(HEAT_THRESHOLD_C)
        .palette(Theme::temp_color)
}

pub fn humidity_gauge(value: Option<f64>) -> WeatherGauge<'static> {
    WeatherGauge::new("Humidity", value, "%")
        .range(0.0, 100.0)
        .precision(0)
        .alert_at(HIGH_HUMIDITY_PERCENT)
        .palette(Theme::humidity_color)
}

pub fn rain_gauge(value: Option<f64>) -> WeatherGauge<'static> {
    WeatherGauge::new("Rain", value, " mm")
        .range(0.0, 20.0)
        .alert_at(HEAVY_RAIN_THRESHOLD_MM)
        .palette(Theme::rain_color)
}
