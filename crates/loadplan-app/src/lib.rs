//! Application service layer - planning use cases, config, reports

pub mod config;
pub mod planner;
pub mod report;
