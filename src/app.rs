use crate::config::Config;
use crate::logic::current_season;
use crate::models::{Advisory, District, SeasonDescriptor, WeatherStatus};
use crate::reference::{find_district, DISTRICTS};

pub struct DistrictListState {
    pub selected_index: usize,
}

impl DistrictListState {
    pub fn new(selected_index: usize) -> Self {
        Self { selected_index }
    }

    pub fn next(&mut self, max: usize) {
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    pub fn prev(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }
}

/// Dashboard state. Everything the screens draw lives here.
pub struct App {
    pub should_quit: bool,

    // Data
    pub districts: &'static [District],
    pub season: SeasonDescriptor,
    pub advisory: Option<Advisory>,

    // Screen state
    pub district_state: DistrictListState,

    // UI state
    pub status_message: Option<String>,
    pub loading: bool,
    pub needs_refresh: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let selected_index = config
            .default_district
            .as_deref()
            .and_then(|name| find_district(name).ok())
            .and_then(|d| DISTRICTS.iter().position(|x| x.name == d.name))
            .unwrap_or(0);

        let mut app = Self {
            should_quit: false,
            districts: DISTRICTS,
            season: current_season(),
            advisory: None,
            district_state: DistrictListState::new(selected_index),
            status_message: None,
            loading: false,
            needs_refresh: false,
        };

        // Open straight onto the configured home district
        if config.default_district.is_some() {
            app.request_advisory();
        }

        app
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: &str) {
        self.status_message = Some(message.to_string());
    }

    pub fn selected_district(&self) -> &'static District {
        let districts = self.districts;
        let index = self
            .district_state
            .selected_index
            .min(districts.len().saturating_sub(1));
        &districts[index]
    }

    pub fn select_next(&mut self) {
        self.district_state.next(self.districts.len());
    }

    pub fn select_prev(&mut self) {
        self.district_state.prev();
    }

    pub fn request_advisory(&mut self) {
        self.needs_refresh = true;
        self.loading = true;
        let name = self.selected_district().name;
        self.set_status(&format!("Fetching live data for {}...", name));
    }

    /// Take the pending refresh request, if any.
    pub fn take_refresh_request(&mut self) -> Option<&'static District> {
        if std::mem::take(&mut self.needs_refresh) {
            Some(self.selected_district())
        } else {
            None
        }
    }

    pub fn apply_advisory(&mut self, advisory: Advisory) {
        let status = match advisory.weather {
            WeatherStatus::Available { .. } => {
                format!("Advisory updated for {}", advisory.district.name)
            }
            WeatherStatus::Unavailable { .. } => {
                format!("Weather unavailable for {}", advisory.district.name)
            }
        };
        self.season = advisory.season;
        self.advisory = Some(advisory);
        self.loading = false;
        self.set_status(&status);
    }

    pub fn advisory_failed(&mut self, message: &str) {
        self.loading = false;
        self.set_status(&format!("Advisory failed: {}", message));
    }
}
