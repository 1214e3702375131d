//! Prompt rendering for the analysis pipelines.
//!
//! Prompts are plain strings assembled from domain types; the JSON shape the
//! model must return is spelled out inline so extraction has a stable schema
//! to validate against.

mod advisor;
mod comprehensive;
mod ilp;
mod learning_map;
mod quick;

pub use advisor::advisor_system_prompt;
pub use comprehensive::comprehensive_analysis_prompt;
pub use ilp::{ilp_recommendation_prompt, IlpStudentProfile};
pub use learning_map::learning_map_prompt;
pub use quick::quick_analysis_prompt;
