//! Modules layer - Infrastructure components behind the feature services
//!
//! Contains storage backends used by the report features.

pub mod storage;
