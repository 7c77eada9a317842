pub mod config;
pub mod report;
pub mod result;
pub mod roster;
pub mod stats;
