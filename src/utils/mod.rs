//! Utility functions

pub mod id;
pub mod time;
pub mod validation;

pub use id::{allocate_unique_id, random_id};
pub use time::{format_date, format_time, parse_date, parse_time};
pub use validation::{blank_int_to_none, blank_to_none, FlexibleBool, FlexibleInt};
