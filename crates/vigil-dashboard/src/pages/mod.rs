//! Dashboard Pages

pub mod dashboard;
pub mod history;

pub use dashboard::*;
pub use history::*;
