//! Embassy tasks for the Cadence firmware

pub mod pulse;
pub mod sweep;
