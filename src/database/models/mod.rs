pub mod group;
pub mod stats;
pub mod user;

pub use group::*;
pub use stats::*;
pub use user::*;

/// Timestamp format used for `joined_date` and `added_date` columns.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub(crate) fn timestamp_now() -> String {
    chrono::Utc::now().format(TIMESTAMP_FORMAT).to_string()
}
