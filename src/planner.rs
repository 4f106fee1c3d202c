//! Day and trip planning: ordered stops in, segments and evaluation out.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::scoring::{evaluate, ItineraryEvaluation, ScoringPolicy};
use crate::segment::{derive_segments, CostModel, Segment};
use crate::timeline::{group_by_day, validate_day};
use crate::traits::{RouteEstimator, TripStop};
use crate::trip::TripItem;

#[derive(Debug, Clone, Default)]
pub struct PlanOptions {
    pub policy: ScoringPolicy,
    pub costs: CostModel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    pub day_index: u32,
    pub segments: Vec<Segment>,
    pub evaluation: ItineraryEvaluation,
}

/// Validate one ordered day, derive its segments and score it.
pub fn plan_day<S, E>(day_index: u32, stops: &[S], estimator: &E, options: &PlanOptions) -> Result<DayPlan>
where
    S: TripStop,
    E: RouteEstimator,
{
    validate_day(day_index, stops)?;

    let segments = derive_segments(stops, estimator, &options.costs);
    let evaluation = evaluate(stops, &segments, &options.policy);

    Ok(DayPlan {
        day_index,
        segments,
        evaluation,
    })
}

/// Plan every day of a trip. Days are independent and planned in parallel.
pub fn plan_trip<E>(items: Vec<TripItem>, estimator: &E, options: &PlanOptions) -> Result<Vec<DayPlan>>
where
    E: RouteEstimator + Sync,
{
    let days: Vec<(u32, Vec<TripItem>)> = group_by_day(items).into_iter().collect();
    tracing::debug!(days = days.len(), "planning trip");

    days.par_iter()
        .map(|(day_index, stops)| plan_day(*day_index, stops, estimator, options))
        .collect()
}
