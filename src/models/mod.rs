//! Domain models
//!
//! Row types for the five catalog tables, the column sets written on
//! create/update, and the derived link sets returned alongside each row.

pub mod country;
pub mod entry;
pub mod event;
pub mod participant;
pub mod performance;

pub use country::*;
pub use entry::*;
pub use event::*;
pub use participant::*;
pub use performance::*;
