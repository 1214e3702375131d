//! Application layer - analysis pipelines and the advisor chat.
//!
//! Each handler owns one pipeline: it renders a prompt from domain inputs,
//! calls the chat provider port once, and extracts the typed report from the
//! response. Retries are never automatic; a failed pipeline surfaces its
//! error to the caller.

pub mod error;
pub mod handlers;
pub mod prompts;

pub use error::AnalysisError;
pub use handlers::{
    AdvisorChatHandler, ComprehensiveAnalysisHandler, ComprehensiveContext,
    ComprehensiveReport, IlpRecommendationHandler, IlpStudentProfile, LearningMapHandler,
    QuickAnalysisHandler, QuickReport,
};
