use crate::datasources::WeatherProvider;
use crate::error::{AgriError, Result};
use crate::logic::recommend::recommend;
use crate::logic::rules::analyze_weather;
use crate::logic::season::classify_season;
use crate::models::{
    Advisory, District, RecommendedCrop, SeasonDescriptor, WeatherAnalysis, WeatherReading,
    WeatherStatus,
};
use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Sequence number identifying one district query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct QueryTicket(u64);

impl QueryTicket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Issues monotonically increasing tickets so late responses can be told apart.
#[derive(Debug, Clone, Default)]
pub struct QueryTracker {
    latest: Arc<AtomicU64>,
}

impl QueryTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> QueryTicket {
        QueryTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// True only for the most recently issued ticket.
    pub fn is_current(&self, ticket: QueryTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}

/// Combines the season, the weather provider and the rules into an [`Advisory`].
#[derive(Clone)]
pub struct AdvisoryService {
    provider: Option<Arc<dyn WeatherProvider>>,
    tracker: QueryTracker,
}

impl AdvisoryService {
    pub fn new(provider: Option<Arc<dyn WeatherProvider>>) -> Self {
        match provider {
            Some(ref p) => tracing::info!("{} configured for live weather", p.name()),
            None => tracing::info!("Weather provider disabled - only season data available"),
        }

        Self {
            provider,
            tracker: QueryTracker::new(),
        }
    }

    pub fn provider_name(&self) -> Option<&'static str> {
        self.provider.as_ref().map(|p| p.name())
    }

    pub fn begin_query(&self) -> QueryTicket {
        self.tracker.issue()
    }

    /// Fetch weather for the district and build its advisory.
    ///
    /// Provider failures become [`WeatherStatus::Unavailable`]; only an invalid
    /// month is returned as an error.
    pub async fn fetch(
        &self,
        ticket: QueryTicket,
        district: &District,
        month: u32,
    ) -> Result<Advisory> {
        let season = classify_season(month)?;

        let weather = match self.provider {
            Some(ref provider) => {
                provider
                    .current_reading(district.latitude, district.longitude)
                    .await
            }
            None => Err(AgriError::ProviderUnavailable(
                "weather provider disabled in config".into(),
            )),
        };

        if let Err(ref e) = weather {
            tracing::warn!("No weather for {}: {}", district.name, e);
        }

        Ok(build_advisory(ticket, district, season, weather))
    }

    /// Drop advisories superseded by a newer query.
    pub fn accept(&self, advisory: Advisory) -> Option<Advisory> {
        if self.tracker.is_current(QueryTicket(advisory.query_id)) {
            Some(advisory)
        } else {
            tracing::warn!(
                "Discarding stale advisory #{} for {}",
                advisory.query_id,
                advisory.district.name
            );
            None
        }
    }

    /// Staleness check for a finished fetch, failed or not.
    pub fn accept_result(
        &self,
        ticket: QueryTicket,
        result: Result<Advisory>,
    ) -> Option<Result<Advisory>> {
        match result {
            Ok(advisory) => self.accept(advisory).map(Ok),
            Err(e) if self.tracker.is_current(ticket) => Some(Err(e)),
            Err(e) => {
                tracing::warn!("Discarding stale failure #{}: {}", ticket.id(), e);
                None
            }
        }
    }

    /// Issue, fetch and accept in one step. `None` when a newer query started meanwhile.
    pub async fn advise(&self, district: &District, month: u32) -> Result<Option<Advisory>> {
        let ticket = self.begin_query();
        let advisory = self.fetch(ticket, district, month).await?;
        Ok(self.accept(advisory))
    }

    pub async fn is_healthy(&self) -> bool {
        match self.provider {
            Some(ref provider) => provider.is_healthy().await,
            None => false,
        }
    }
}

/// Pure assembly of an advisory from an already-fetched weather result.
pub fn build_advisory(
    ticket: QueryTicket,
    district: &District,
    season: SeasonDescriptor,
    weather: Result<WeatherReading>,
) -> Advisory {
    let analyzed = weather.and_then(|reading| {
        analyze(&season, district, &reading).map(|analysis| (reading, analysis))
    });

    let (status, analysis) = match analyzed {
        Ok((reading, analysis)) => (WeatherStatus::Available { reading }, Some(analysis)),
        Err(e) => (
            WeatherStatus::Unavailable {
                reason: e.to_string(),
            },
            None,
        ),
    };

    let advisory = Advisory {
        query_id: ticket.id(),
        district: *district,
        season,
        weather: status,
        analysis,
        generated_at: Utc::now(),
    };

    tracing::debug!(
        query = advisory.query_id,
        district = advisory.district.name,
        season = %advisory.season.id,
        alerts = advisory.alerts().len(),
        crops = advisory.crops().map(|c| c.len()).unwrap_or(0),
        "Advisory computed"
    );

    advisory
}

fn analyze(
    season: &SeasonDescriptor,
    district: &District,
    reading: &WeatherReading,
) -> Result<WeatherAnalysis> {
    let alerts = analyze_weather(reading)?;
    let crops = recommend(season, district.region, reading)?
        .into_iter()
        .map(|crop| RecommendedCrop::new(crop, season.id, district.region))
        .collect();

    Ok(WeatherAnalysis { alerts, crops })
}
