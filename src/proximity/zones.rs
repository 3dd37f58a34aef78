use crate::domain::{Geometry, Record};
use crate::proximity::within_radius;
use tracing::{debug, instrument};

/// Zones are always matched at this radius, whatever radius a query uses.
pub const ZONE_RADIUS_M: f64 = 100.0;

/// Counts the records that lie within [`ZONE_RADIUS_M`] of at least one zone.
#[instrument(skip_all, fields(records = records.len(), zones = zones.len()))]
pub fn count_records_near_any_zone(records: &[Record], zones: &[Geometry]) -> usize {
    let count = records
        .iter()
        .filter(|record| zones.iter().any(|zone| within_radius(record, zone, ZONE_RADIUS_M)))
        .count();

    debug!("🔍 {} of {} record(s) near any of {} zone(s)", count, records.len(), zones.len());
    count
}
