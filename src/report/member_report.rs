use crate::domain::member::{self, Member};
use crate::domain::{Geometry, Motion, Record};
use crate::proximity::count_records_near_any_zone;
use crate::report::VoteTally;
use crate::request::parse_zone_geometry;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, instrument};

/// Voting record, motion activity and nearby arrests for one council member.
#[derive(Debug, PartialEq, Serialize)]
pub struct MemberReport {
    pub member: &'static Member,
    pub yes_percentage: Option<f64>,
    pub motions_moved: usize,
    pub motions_seconded: usize,
    pub arrests_near_zones: usize,
    pub zones: Vec<Geometry>,
}

#[instrument(skip(records, motions))]
pub fn member_report(name: &str, records: &[Record], motions: &[Motion]) -> Result<MemberReport, ReportError> {
    let member = member::find(name).ok_or_else(|| ReportError::UnknownMember(name.to_string()))?;

    let tally = VoteTally::for_member(motions, member.name);
    let moved = motions.iter().filter(|motion| motion.moved_by(member.name)).collect::<Vec<_>>();
    let motions_seconded = motions.iter().filter(|motion| motion.seconded_by(member.name)).count();

    let zones = zone_geometries(&moved);
    let arrests_near_zones = count_records_near_any_zone(records, &zones);

    info!(
        "📊 {}: {} moved, {} seconded, {} arrest(s) near {} zone(s)",
        member.name,
        moved.len(),
        motions_seconded,
        arrests_near_zones,
        zones.len()
    );

    Ok(MemberReport {
        member,
        yes_percentage: tally.yes_percentage(),
        motions_moved: moved.len(),
        motions_seconded,
        arrests_near_zones,
        zones,
    })
}

/// Decodes the zones of `motions`, skipping any that cannot be read.
fn zone_geometries(motions: &[&Motion]) -> Vec<Geometry> {
    motions
        .iter()
        .filter_map(|motion| motion.geojson.as_deref())
        .filter_map(|text| match parse_zone_geometry(text) {
            Ok(geometry) => Some(geometry),
            Err(err) => {
                debug!("Skipping zone '{}': {}", text, err);
                None
            }
        })
        .collect()
}

#[derive(Error, Debug, PartialEq)]
pub enum ReportError {
    #[error("No such councilperson in record: '{0}'")]
    UnknownMember(String),
}
