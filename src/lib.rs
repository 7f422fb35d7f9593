mod cfg;
mod error;

pub mod aggregate;
pub mod dashboard;
pub mod format;
pub mod parse;
pub mod reading;
pub mod source;

pub use cfg::Cfg;
pub use error::Error;

pub use aggregate::{
    aggregate_by_device, aggregate_by_key, aggregate_by_room, aggregate_by_timestamp, total_watts,
    Total,
};
pub use dashboard::Dashboard;
pub use parse::{diagnose, parse, Issue, IssueKind};
pub use reading::Reading;
