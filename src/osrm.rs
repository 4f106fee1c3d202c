//! OSRM HTTP adapter for per-segment route estimates.

use serde::Deserialize;

use crate::error::Result;
use crate::haversine::{HaversineEstimator, SegmentEstimate};
use crate::traits::{RouteEstimator, TravelMode};

#[derive(Debug, Clone)]
pub struct OsrmConfig {
    pub base_url: String,
    /// Profile used for car and transit legs (OSRM has no transit profile).
    pub profile: String,
    pub walking_profile: String,
    pub timeout_secs: u64,
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            profile: "car".to_string(),
            walking_profile: "foot".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Route estimator backed by OSRM, falling back to haversine on failure.
#[derive(Debug, Clone)]
pub struct OsrmRouteClient {
    config: OsrmConfig,
    client: reqwest::blocking::Client,
    fallback: HaversineEstimator,
}

impl OsrmRouteClient {
    pub fn new(config: OsrmConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            config,
            client,
            fallback: HaversineEstimator::default(),
        })
    }

    fn profile_for(&self, mode: TravelMode) -> &str {
        match mode {
            TravelMode::Car | TravelMode::Transit => &self.config.profile,
            TravelMode::Walk => &self.config.walking_profile,
        }
    }

    fn route_url(&self, from: (f64, f64), to: (f64, f64), mode: TravelMode) -> String {
        format!(
            "{}/route/v1/{}/{:.6},{:.6};{:.6},{:.6}?overview=false",
            self.config.base_url,
            self.profile_for(mode),
            from.1,
            from.0,
            to.1,
            to.0
        )
    }

    fn fetch(&self, from: (f64, f64), to: (f64, f64), mode: TravelMode) -> Option<SegmentEstimate> {
        let response = self
            .client
            .get(self.route_url(from, to, mode))
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<OsrmRouteResponse>());

        match response {
            Ok(body) => body.routes.into_iter().next().map(SegmentEstimate::from),
            Err(err) => {
                tracing::warn!(error = %err, "OSRM route request failed");
                None
            }
        }
    }
}

impl RouteEstimator for OsrmRouteClient {
    fn estimate(&self, from: (f64, f64), to: (f64, f64), mode: TravelMode) -> SegmentEstimate {
        self.fetch(from, to, mode).unwrap_or_else(|| {
            tracing::warn!(?from, ?to, "falling back to haversine estimate");
            self.fallback.estimate(from, to, mode)
        })
    }
}

#[derive(Debug, Deserialize)]
struct OsrmRouteResponse {
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    /// Meters.
    distance: f64,
    /// Seconds.
    duration: f64,
}

impl From<OsrmRoute> for SegmentEstimate {
    fn from(route: OsrmRoute) -> Self {
        Self {
            distance_km: route.distance / 1000.0,
            duration_seconds: route.duration.round() as u32,
        }
    }
}
