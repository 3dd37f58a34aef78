use crate::domain::{Geometry, Record};
use crate::proximity::within_radius;
use tracing::{debug, instrument};

/// Returns the records within `radius_m` of `geometry`, in their original order.
///
/// Every record is tested, so a query costs one predicate per record and, for paths, one
/// segment distance per record and segment.
#[instrument(skip(records), fields(records = records.len()))]
pub fn filter<'a>(records: &'a [Record], geometry: &Geometry, radius_m: f64) -> Vec<&'a Record> {
    let matches = records
        .iter()
        .filter(|record| within_radius(record, geometry, radius_m))
        .collect::<Vec<_>>();

    debug!("🔍 {} of {} record(s) within {} m", matches.len(), records.len(), radius_m);
    matches
}
