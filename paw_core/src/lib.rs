#![forbid(unsafe_code)]

//! Rule-based insight engine for daily pet check-ins.
//!
//! This crate provides:
//! - Domain types (pet profiles, check-ins, insights)
//! - Trailing 7/14-day windowing
//! - The rule battery and priority ranking
//! - Profile and check-in sources (file-backed adapter included)
//! - Configuration and logging setup

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod window;
pub mod quality;
pub mod rules;
pub mod store;
pub mod engine;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use quality::{Completeness, DataQuality};
pub use store::{CheckinSink, CheckinSource, FileStore, ProfileSource};
pub use engine::{build_engine, generate_insights, generate_pet_insights, prioritize, InsightEngine};
