//! Page components.

mod dashboard;
mod insight;

pub use dashboard::Dashboard;
pub use insight::Insight;
