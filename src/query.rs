use std::num::NonZeroUsize;

use serde::Serialize;

use crate::data::model::{Dataset, FacilityRecord, ReferencePoint};
use crate::distance::distance_to;
use crate::error::InvalidReferenceError;

/// Number of facilities returned when the caller does not say.
pub const DEFAULT_COUNT: NonZeroUsize = match NonZeroUsize::new(5) {
    Some(n) => n,
    None => unreachable!(),
};

/// One ranked result: a facility borrowed from the dataset plus its distance
/// from the query's reference point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NearestFacility<'a> {
    #[serde(flatten)]
    pub record: &'a FacilityRecord,
    pub distance_km: f64,
}

/// Rank facilities by geodesic distance from `reference`.
///
/// `predicate`, when given, is applied before any distance is computed.
/// Records at equal distance keep their dataset order. Returns at most
/// `count` results; fewer (possibly none) when fewer records pass the
/// predicate. The dataset is never modified, so concurrent queries can share
/// it freely.
pub fn query_nearest<'a>(
    dataset: &'a Dataset,
    reference: ReferencePoint,
    count: NonZeroUsize,
    predicate: Option<&dyn Fn(&FacilityRecord) -> bool>,
) -> Result<Vec<NearestFacility<'a>>, InvalidReferenceError> {
    let reference = reference.validate()?;

    let mut ranked: Vec<NearestFacility<'a>> = dataset
        .iter()
        .filter(|record| predicate.map_or(true, |p| p(*record)))
        .map(|record| NearestFacility {
            record,
            distance_km: distance_to(reference, record),
        })
        .collect();
    let candidates = ranked.len();

    // `sort_by` is stable: ties keep dataset order.
    ranked.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    ranked.truncate(count.get());

    log::debug!(
        "Nearest query at ({reference}): {candidates} of {} candidates, returning {}",
        dataset.len(),
        ranked.len()
    );
    Ok(ranked)
}
