//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, errors, state machine trait)
//! - `assessment` - Quick-assessment answers, trait derivation, uploads, wizard
//! - `catalog` - Course records and catalog filtering
//! - `extraction` - Typed JSON extraction from chat-completion responses
//! - `ilp` - Bundled Integrated Learning Programme event catalog
//! - `recommendation` - Typed schemas for generated analysis reports
//! - `session` - Advisory session lifecycle state machine

pub mod assessment;
pub mod catalog;
pub mod extraction;
pub mod foundation;
pub mod ilp;
pub mod recommendation;
pub mod session;
