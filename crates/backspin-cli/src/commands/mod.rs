//! CLI command implementations

pub mod inspect;
pub mod json_output;
pub mod record;
pub mod reverse;

mod reporting;
