//! Career Compass - Typed advisory engine for skill and career recommendations
//!
//! This crate implements the analysis pipelines behind a student advisory
//! application: quick and comprehensive personality assessment, AI-backed
//! skill/career matching, personalized learning maps, and ILP activity
//! recommendations, all issued through a chat-completion provider port.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
