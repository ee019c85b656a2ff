//! Classification and drafting pipeline for RTI information requests and public grievance letters.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
