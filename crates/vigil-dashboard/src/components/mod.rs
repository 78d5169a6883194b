//! Reusable UI Components

pub mod charts;
pub mod icons;
pub mod navbar;
pub mod spinner;
pub mod table;
pub mod toast;

pub use charts::*;
pub use icons::*;
pub use navbar::*;
pub use spinner::*;
pub use table::*;
pub use toast::*;
