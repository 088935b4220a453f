use crate::models::{Advisory, District, SeasonDescriptor, WeatherStatus};
use crate::report::{NO_CROPS_MESSAGE, NO_WEATHER_MESSAGE};
use crate::ui::components::{humidity_gauge, rain_gauge, temperature_gauge};
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget, Wrap},
};

pub struct DashboardScreen<'a> {
    pub districts: &'a [District],
    pub selected_index: usize,
    pub season: SeasonDescriptor,
    pub advisory: Option<&'a Advisory>,
    pub loading: bool,
    pub status_message: Option<&'a str>,
}

impl<'a> DashboardScreen<'a> {
    pub fn new(districts: &'a [District], season: SeasonDescriptor) -> Self {
        Self {
            districts,
            selected_index: 0,
            season,
            advisory: None,
            loading: false,
            status_message: None,
        }
    }

    pub fn with_selection(mut self, index: usize) -> Self {
        self.selected_index = index;
        self
    }

    pub fn with_advisory(mut self, advisory: Option<&'a Advisory>) -> Self {
        self.advisory = advisory;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn with_status(mut self, status: Option<&'a str>) -> Self {
        self.status_message = status;
        self
    }

    /// Season from the advisory when present, otherwise today's.
    fn season(&self) -> SeasonDescriptor {
        self.advisory.map(|a| a.season).unwrap_or(self.season)
    }
}

impl Widget for DashboardScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(12),   // Districts and advisory
                Constraint::Length(1), // Status message
                Constraint::Length(1), // Nav bar
            ])
            .split(area);

        self.render_header(chunks[0], buf);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(24), Constraint::Min(40)])
            .split(chunks[1]);

        self.render_districts(body[0], buf);

        let panels = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Weather gauges
                Constraint::Length(4), // Season
                Constraint::Min(4),    // Alerts
                Constraint::Min(6),    // Crops
            ])
            .split(body[1]);

        self.render_weather(panels[0], buf);
        self.render_season(panels[1], buf);
        self.render_alerts(panels[2], buf);
        self.render_crops(panels[3], buf);

        self.render_status_message(chunks[2], buf);
        self.render_nav(chunks[3], buf);
    }
}

impl DashboardScreen<'_> {
    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let title = match self.advisory {
            Some(a) => format!("Agri Advisor - {}", a.district),
            None => "Agri Advisor - Select a district".to_string(),
        };

        let block = Block::default()
            .title(Span::styled(title, Theme::title()))
            .borders(Borders::BOTTOM)
            .border_style(Theme::border());

        let info = match self.advisory {
            Some(a) => format!(
                "Updated: {}",
                a.generated_at
                    .with_timezone(&chrono::Local)
                    .format("%Y-%m-%d %H:%M")
            ),
            None => "Updated: Never".to_string(),
        };
        Paragraph::new(Span::styled(info, Theme::dim()))
            .block(block)
            .render(area, buf);
    }

    fn render_districts(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled("Districts", Theme::header()))
            .borders(Borders::ALL)
            .border_style(Theme::border_focused());

        let inner = block.inner(area);
        block.render(area, buf);

        let shown = self.advisory.map(|a| a.district.name);

        let items: Vec<ListItem> = self
            .districts
            .iter()
            .enumerate()
            .map(|(i, d)| {
                let style = if i == self.selected_index {
                    Theme::selected()
                } else {
                    Style::default()
                };
                let marker = if shown == Some(d.name) { "● " } else { "  " };
                let line = Line::from(vec![
                    Span::styled(marker, Theme::success()),
                    Span::styled(d.name, Theme::normal()),
                    Span::styled(format!(" {}", d.region), Theme::dim()),
                ]);
                ListItem::new(line).style(style)
            })
            .collect();

        List::new(items).render(inner, buf);
    }

    fn render_weather(&self, area: Rect, buf: &mut Buffer) {
        if let Some(WeatherStatus::Unavailable { reason }) = self.advisory.map(|a| &a.weather) {
            let block = Block::default()
                .title("Weather")
                .borders(Borders::ALL)
                .border_style(Theme::border());
            let lines = vec![
                Line::from(Span::styled(NO_WEATHER_MESSAGE, Theme::error())),
                Line::from(Span::styled(reason.as_str(), Theme::dim())),
            ];
            Paragraph::new(lines)
                .block(block)
                .wrap(Wrap { trim: true })
                .render(area, buf);
            return;
        }

        let gauges = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(34),
                Constraint::Percentage(33),
                Constraint::Percentage(33),
            ])
            .split(area);

        let reading = self.advisory.and_then(|a| a.weather.reading());

        temperature_gauge(reading.map(|r| r.temperature_c)).render(gauges[0], buf);
        humidity_gauge(reading.map(|r| r.humidity_percent)).render(gauges[1], buf);
        rain_gauge(reading.map(|r| r.rainfall_mm)).render(gauges[2], buf);
    }

    fn render_season(&self, area: Rect, buf: &mut Buffer) {
        let season = self.season();
        let block = Block::default()
            .title(Span::styled("Season", Theme::header()))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let lines = vec![
            Line::from(Span::styled(season.name, Theme::highlight())),
            Line::from(Span::styled(season.description, Theme::normal())),
        ];
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }

    fn render_alerts(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled("Alerts", Theme::header()))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let alerts = match self.advisory {
            Some(a) => a.alerts(),
            None => {
                self.render_placeholder(inner, buf);
                return;
            }
        };

        if alerts.is_empty() {
            Paragraph::new(Span::styled("No weather analysis available", Theme::dim()))
                .render(inner, buf);
            return;
        }

        let items: Vec<ListItem> = alerts
            .iter()
            .map(|alert| {
                let severity_style = Style::default().fg(alert.severity.color());
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{} ", alert.severity.symbol()), severity_style),
                    Span::styled(
                        format!("{}: ", alert.severity.as_str().to_uppercase()),
                        severity_style,
                    ),
                    Span::styled(alert.message.as_str(), Theme::normal()),
                ]))
            })
            .collect();

        List::new(items).render(inner, buf);
    }

    fn render_crops(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled("Recommended Crops", Theme::header()))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let crops = match self.advisory {
            Some(a) => a.crops(),
            None => {
                self.render_placeholder(inner, buf);
                return;
            }
        };

        let crops = match crops {
            Some(c) if !c.is_empty() => c,
            Some(_) => {
                Paragraph::new(Span::styled(NO_CROPS_MESSAGE, Theme::warning()))
                    .render(inner, buf);
                return;
            }
            None => {
                Paragraph::new(Span::styled(
                    "Recommendations need live weather data",
                    Theme::dim(),
                ))
                .render(inner, buf);
                return;
            }
        };

        let items: Vec<ListItem> = crops
            .iter()
            .map(|rec| {
                let title_line = Line::from(vec![
                    Span::styled("❀ ", Theme::success()),
                    Span::styled(rec.crop.name, Theme::header()),
                    Span::styled(format!("  water: {}", rec.crop.water), Theme::dim()),
                ]);
                let reason_line = Line::from(vec![
                    Span::raw("  "),
                    Span::styled(rec.reason.as_str(), Theme::dim()),
                ]);
                ListItem::new(vec![title_line, reason_line])
            })
            .collect();

        List::new(items).render(inner, buf);
    }

    fn render_placeholder(&self, area: Rect, buf: &mut Buffer) {
        let text = if self.loading {
            "Fetching live data..."
        } else {
            "Choose a district and press Enter"
        };
        Paragraph::new(Span::styled(text, Theme::dim())).render(area, buf);
    }

    fn render_status_message(&self, area: Rect, buf: &mut Buffer) {
        if let Some(msg) = self.status_message {
            let style = if msg.contains("unavailable") || msg.contains("failed") {
                Theme::warning()
            } else {
                Theme::success()
            };
            Paragraph::new(Span::styled(msg, style)).render(area, buf);
        }
    }

    fn render_nav(&self, area: Rect, buf: &mut Buffer) {
        let nav = Line::from(vec![
            Span::styled("[↑↓]", Theme::nav_key()),
            Span::styled("District ", Theme::nav_label()),
            Span::styled("[Enter]", Theme::nav_key()),
            Span::styled("Advise ", Theme::nav_label()),
            Span::styled("[r]", Theme::nav_key()),
            Span::styled("Refresh ", Theme::nav_label()),
            Span::styled("[q]", Theme::nav_key()),
            Span::styled("Quit", Theme::nav_label()),
        ]);

        Paragraph::new(nav).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AgriError;
    use crate::logic::advisor::{build_advisory, QueryTracker};
    use crate::logic::classify_season;
    use crate::models::WeatherReading;
    use crate::reference::{find_district, DISTRICTS};

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut text = String::new();
        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                text.push_str(buf[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn render(screen: DashboardScreen<'_>) -> String {
        let area = Rect::new(0, 0, 110, 36);
        let mut buf = Buffer::empty(area);
        screen.render(area, &mut buf);
        buffer_text(&buf)
    }

    #[test]
    fn empty_dashboard_lists_districts() {
        let season = classify_season(10).unwrap();
        let text = render(DashboardScreen::new(DISTRICTS, season));
        assert!(text.contains("Musanze"));
        assert!(text.contains("Imuhindo (Season A)"));
        assert!(text.contains("Choose a district"));
    }

    #[test]
    fn dashboard_shows_advisory() {
        let season = classify_season(10).unwrap();
        let advisory = build_advisory(
            QueryTracker::new().issue(),
            find_district("Musanze").unwrap(),
            season,
            Ok(WeatherReading::new(20.0, 85.0, 12.0)),
        );
        let text = render(
            DashboardScreen::new(DISTRICTS, season)
                .with_selection(1)
                .with_advisory(Some(&advisory)),
        );
        assert!(text.contains("DANGER"));
        assert!(text.contains("Maize (Ibigori)"));
        assert!(!text.contains("Beans (Ibishyimbo)"));
    }

    #[test]
    fn dashboard_reports_missing_weather() {
        let season = classify_season(7).unwrap();
        let advisory = build_advisory(
            QueryTracker::new().issue(),
            find_district("Huye").unwrap(),
            season,
            Err(AgriError::ProviderUnavailable("offline".into())),
        );
        let text = render(DashboardScreen::new(DISTRICTS, season).with_advisory(Some(&advisory)));
        assert!(text.contains(NO_WEATHER_MESSAGE));
        assert!(text.contains("Impeshyi (Season C)"));
    }
}
