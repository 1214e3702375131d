//! Pipeline handlers, one per analysis operation.

mod advisor_chat;
mod comprehensive_analysis;
mod ilp_recommendation;
mod learning_map;
mod quick_analysis;

pub use crate::application::prompts::IlpStudentProfile;
pub use advisor_chat::AdvisorChatHandler;
pub use comprehensive_analysis::{
    ComprehensiveAnalysisHandler, ComprehensiveContext, ComprehensiveReport,
};
pub use ilp_recommendation::IlpRecommendationHandler;
pub use learning_map::LearningMapHandler;
pub use quick_analysis::{QuickAnalysisHandler, QuickReport};
