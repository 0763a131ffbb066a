pub mod busy_indicator;
pub mod notice;

pub use busy_indicator::BusyIndicator;
pub use notice::{Notice, Severity};
