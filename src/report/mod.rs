mod member_report;
mod votes;

pub use member_report::{ReportError, member_report};
pub use votes::VoteTally;
