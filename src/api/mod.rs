//! Analysis service API module
//!
//! This module holds the wire types exchanged with the robots.txt analysis
//! service and the transport used to reach it:
//! - `AnalysisRequest` / `AnalysisResult` JSON models
//! - The `AnalysisTransport` seam the controller submits through
//! - `HttpAnalysisClient`, the reqwest-backed transport

mod client;
mod models;

pub use client::{AnalysisTransport, HttpAnalysisClient};
pub use models::{
    AnalysisRequest, AnalysisResult, AnalysisStatus, RobotGroup, RobotsSource, TestResult,
};
