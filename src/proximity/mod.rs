mod filter;
mod predicate;
mod zones;

pub use filter::filter;
pub use predicate::within_radius;
pub use zones::count_records_near_any_zone;
