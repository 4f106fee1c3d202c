//! Itinerary scoring: reduces one day's stops and segments to a quality
//! signal (score, density, warnings).

use serde::{Deserialize, Serialize};

use crate::traits::{SegmentMetrics, TripStop};

#[derive(Debug, Clone)]
pub struct ScoringPolicy {
    /// Segments strictly longer than this are long transfers.
    pub long_transfer_threshold_secs: u32,
    /// Points deducted per long transfer.
    pub long_transfer_penalty: i32,
    /// Visited-stop count above which the day is overloaded.
    pub max_visited_stops: usize,
    /// Points deducted once for an overloaded day.
    pub too_many_stops_penalty: i32,
    /// Visited-stop count below which the day is flagged as sparse.
    pub min_visited_stops: usize,
    /// Scores below this are `tight`.
    pub tight_below: i32,
    /// Scores above this with few visits are `loose`.
    pub loose_above: i32,
    /// Visited-stop count below which a high score reads as `loose`.
    pub loose_max_visited: usize,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            long_transfer_threshold_secs: 5400, // 90 minutes
            long_transfer_penalty: 15,
            max_visited_stops: 4,
            too_many_stops_penalty: 20,
            min_visited_stops: 2,
            tight_below: 70,
            loose_above: 90,
            loose_max_visited: 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Density {
    Loose,
    JustRight,
    Tight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    LongTransfer,
    TooManyStops,
    SparseSchedule,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    pub kind: WarningKind,
    pub message: String,
}

impl Warning {
    /// `count` is the number of offending segments for long transfers and the
    /// visited-stop count otherwise.
    fn new(kind: WarningKind, count: usize, policy: &ScoringPolicy) -> Self {
        let message = match kind {
            WarningKind::LongTransfer => format!(
                "{} segment(s) take longer than {} minutes to travel.",
                count,
                policy.long_transfer_threshold_secs / 60
            ),
            WarningKind::TooManyStops => format!(
                "{} spots planned for one day; more than {} is hard to enjoy.",
                count, policy.max_visited_stops
            ),
            WarningKind::SparseSchedule => {
                "The schedule has room to spare. Consider adding a recommended spot.".to_string()
            }
        };
        Self { kind, message }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryEvaluation {
    pub score: u8,
    pub density: Density,
    pub warnings: Vec<Warning>,
    pub visited_stops: usize,
    pub total_travel_seconds: u64,
    pub total_distance_meters: u64,
}

impl ItineraryEvaluation {
    pub fn has_warning(&self, kind: WarningKind) -> bool {
        self.warnings.iter().any(|warning| warning.kind == kind)
    }
}

/// Score one day's ordered stops and segments.
pub fn evaluate<S, G>(stops: &[S], segments: &[G], policy: &ScoringPolicy) -> ItineraryEvaluation
where
    S: TripStop,
    G: SegmentMetrics,
{
    let mut score: i32 = 100;
    let mut warnings = Vec::new();

    let mut total_travel_seconds: u64 = 0;
    let mut total_distance_meters: u64 = 0;
    let mut long_transfers = 0usize;

    for segment in segments {
        total_travel_seconds += u64::from(segment.duration_seconds());
        total_distance_meters += u64::from(segment.distance_meters());

        if segment.duration_seconds() > policy.long_transfer_threshold_secs {
            long_transfers += 1;
        }
    }

    // One aggregated warning, one deduction per offending segment
    if long_transfers > 0 {
        let deduction = i32::try_from(long_transfers)
            .unwrap_or(i32::MAX)
            .saturating_mul(policy.long_transfer_penalty);
        score = score.saturating_sub(deduction);
        warnings.push(Warning::new(WarningKind::LongTransfer, long_transfers, policy));
    }

    let visited_stops = stops.iter().filter(|stop| stop.is_visited()).count();
    if visited_stops > policy.max_visited_stops {
        score = score.saturating_sub(policy.too_many_stops_penalty);
        warnings.push(Warning::new(WarningKind::TooManyStops, visited_stops, policy));
    } else if visited_stops < policy.min_visited_stops {
        warnings.push(Warning::new(WarningKind::SparseSchedule, visited_stops, policy));
    }

    let score = score.clamp(0, 100);
    let density = classify_density(score, visited_stops, policy);

    tracing::debug!(
        score,
        ?density,
        visited_stops,
        long_transfers,
        "evaluated itinerary"
    );

    ItineraryEvaluation {
        score: score as u8,
        density,
        warnings,
        visited_stops,
        total_travel_seconds,
        total_distance_meters,
    }
}

/// Rules are evaluated in order; `loose` overrides `tight`.
fn classify_density(score: i32, visited_stops: usize, policy: &ScoringPolicy) -> Density {
    let mut density = Density::JustRight;
    if score < policy.tight_below {
        density = Density::Tight;
    }
    if score > policy.loose_above && visited_stops < policy.loose_max_visited {
        density = Density::Loose;
    }
    density
}
