//! Advisory session lifecycle state machine.
//!
//! A session moves from pathway choice through an intake state (wizard
//! answers or uploaded tests), into analysis, and finally into results and
//! the advisor chat. Each state carries exactly the data that exists at that
//! point, so a chat cannot be constructed without a finished report and
//! results cannot exist without an analysis having run.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::assessment::{Pathway, QuickAssessmentAnswers, UploadedTests, Wizard};
use crate::domain::foundation::{SessionId, StateMachine};
use crate::domain::recommendation::{ComprehensiveAnalysis, QuickAnalysis};

/// Error returned when a session operation is invalid in the current state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("operation `{operation}` is not valid in the {phase:?} phase")]
    InvalidPhase {
        operation: &'static str,
        phase: SessionPhase,
    },

    #[error("no test reports uploaded")]
    NoUploads,
}

/// The lightweight phase tag for a session, without state data.
///
/// Used for logging and for answering "where is the user" without
/// destructuring the full session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    /// Choosing between the quick and comprehensive pathways.
    #[default]
    PathwayChoice,

    /// Answering the quick-assessment wizard.
    QuickAssessment,

    /// Uploading third-party test reports.
    TestUpload,

    /// Analysis request in flight.
    Analyzing,

    /// A finished report is available.
    Results,

    /// Chatting with the advisor about the report.
    AdvisorChat,
}

impl StateMachine for SessionPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SessionPhase::*;
        matches!(
            (self, target),
            (PathwayChoice, QuickAssessment)
                | (PathwayChoice, TestUpload)
                | (QuickAssessment, Analyzing)
                | (TestUpload, Analyzing)
                // Failed analysis returns to the intake state it came from
                | (Analyzing, QuickAssessment)
                | (Analyzing, TestUpload)
                | (Analyzing, Results)
                | (Results, AdvisorChat)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SessionPhase::*;
        match self {
            PathwayChoice => vec![QuickAssessment, TestUpload],
            QuickAssessment => vec![Analyzing],
            TestUpload => vec![Analyzing],
            Analyzing => vec![QuickAssessment, TestUpload, Results],
            Results => vec![AdvisorChat],
            AdvisorChat => vec![],
        }
    }
}

/// The intake data an analysis was started from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisInput {
    Quick { answers: QuickAssessmentAnswers },
    Comprehensive { uploads: UploadedTests },
}

/// A finished analysis report, by pathway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnalysisReport {
    Quick(QuickAnalysis),
    Comprehensive(ComprehensiveAnalysis),
}

/// Who produced a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    Student,
    Advisor,
}

/// One turn of the advisor conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisorTurn {
    pub speaker: Speaker,
    pub content: String,
}

impl AdvisorTurn {
    pub fn student(content: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Student,
            content: content.into(),
        }
    }

    pub fn advisor(content: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Advisor,
            content: content.into(),
        }
    }
}

/// Per-state session data.
#[derive(Debug, Clone, PartialEq)]
enum SessionState {
    PathwayChoice,
    QuickAssessment {
        wizard: Wizard,
        /// Answers preserved when a failed analysis sent the user back.
        draft: Option<QuickAssessmentAnswers>,
    },
    TestUpload {
        uploads: UploadedTests,
    },
    Analyzing {
        input: AnalysisInput,
    },
    Results {
        report: AnalysisReport,
    },
    AdvisorChat {
        report: AnalysisReport,
        history: Vec<AdvisorTurn>,
    },
}

/// An advisory session.
///
/// All transitions consume the session and return either the next state or a
/// [`SessionError`] naming the rejected operation. Invalid combinations
/// (e.g. chat without a report) cannot be represented.
#[derive(Debug, Clone, PartialEq)]
pub struct AdvisorSession {
    id: SessionId,
    state: SessionState,
}

impl AdvisorSession {
    /// Starts a new session at the pathway choice screen.
    pub fn new() -> Self {
        Self {
            id: SessionId::new(),
            state: SessionState::PathwayChoice,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    /// The current phase tag.
    pub fn phase(&self) -> SessionPhase {
        match &self.state {
            SessionState::PathwayChoice => SessionPhase::PathwayChoice,
            SessionState::QuickAssessment { .. } => SessionPhase::QuickAssessment,
            SessionState::TestUpload { .. } => SessionPhase::TestUpload,
            SessionState::Analyzing { .. } => SessionPhase::Analyzing,
            SessionState::Results { .. } => SessionPhase::Results,
            SessionState::AdvisorChat { .. } => SessionPhase::AdvisorChat,
        }
    }

    /// Picks a pathway, entering the matching intake state.
    pub fn choose_pathway(self, pathway: Pathway) -> Result<Self, SessionError> {
        match self.state {
            SessionState::PathwayChoice => {
                let state = match pathway {
                    Pathway::Quick => SessionState::QuickAssessment {
                        wizard: Wizard::new(pathway),
                        draft: None,
                    },
                    Pathway::Comprehensive => SessionState::TestUpload {
                        uploads: UploadedTests::new(),
                    },
                };
                Ok(Self { state, ..self })
            }
            _ => Err(self.invalid("choose_pathway")),
        }
    }

    /// The wizard, when the session is in the quick-assessment state.
    pub fn wizard_mut(&mut self) -> Option<&mut Wizard> {
        match &mut self.state {
            SessionState::QuickAssessment { wizard, .. } => Some(wizard),
            _ => None,
        }
    }

    /// Answers restored after a failed analysis, if any.
    pub fn draft_answers(&self) -> Option<&QuickAssessmentAnswers> {
        match &self.state {
            SessionState::QuickAssessment { draft, .. } => draft.as_ref(),
            _ => None,
        }
    }

    /// The upload collection, when the session is in the test-upload state.
    pub fn uploads_mut(&mut self) -> Option<&mut UploadedTests> {
        match &mut self.state {
            SessionState::TestUpload { uploads } => Some(uploads),
            _ => None,
        }
    }

    /// Submits completed wizard answers, moving into analysis.
    pub fn submit_answers(self, answers: QuickAssessmentAnswers) -> Result<Self, SessionError> {
        match self.state {
            SessionState::QuickAssessment { .. } => Ok(Self {
                state: SessionState::Analyzing {
                    input: AnalysisInput::Quick { answers },
                },
                ..self
            }),
            _ => Err(self.invalid("submit_answers")),
        }
    }

    /// Submits the uploaded reports, moving into analysis.
    ///
    /// Rejects an empty upload set.
    pub fn submit_uploads(self) -> Result<Self, SessionError> {
        match self.state {
            SessionState::TestUpload { uploads } => {
                if uploads.is_empty() {
                    return Err(SessionError::NoUploads);
                }
                Ok(Self {
                    state: SessionState::Analyzing {
                        input: AnalysisInput::Comprehensive { uploads },
                    },
                    ..self
                })
            }
            _ => Err(self.invalid("submit_uploads")),
        }
    }

    /// The intake the in-flight analysis was started from.
    pub fn analysis_input(&self) -> Option<&AnalysisInput> {
        match &self.state {
            SessionState::Analyzing { input } => Some(input),
            _ => None,
        }
    }

    /// Records a finished report, moving into the results state.
    pub fn complete_analysis(self, report: AnalysisReport) -> Result<Self, SessionError> {
        match self.state {
            SessionState::Analyzing { .. } => Ok(Self {
                state: SessionState::Results { report },
                ..self
            }),
            _ => Err(self.invalid("complete_analysis")),
        }
    }

    /// Returns to the intake state the analysis came from, keeping its data
    /// so the user can retry without re-entering anything.
    pub fn fail_analysis(self) -> Result<Self, SessionError> {
        match self.state {
            SessionState::Analyzing { input } => {
                let state = match input {
                    AnalysisInput::Quick { answers } => {
                        let mut wizard = Wizard::new(Pathway::Quick);
                        while !wizard.is_last_step() {
                            wizard.next();
                        }
                        SessionState::QuickAssessment {
                            wizard,
                            draft: Some(answers),
                        }
                    }
                    AnalysisInput::Comprehensive { uploads } => {
                        SessionState::TestUpload { uploads }
                    }
                };
                Ok(Self { state, ..self })
            }
            _ => Err(self.invalid("fail_analysis")),
        }
    }

    /// The report, once results are available (results or chat state).
    pub fn report(&self) -> Option<&AnalysisReport> {
        match &self.state {
            SessionState::Results { report } | SessionState::AdvisorChat { report, .. } => {
                Some(report)
            }
            _ => None,
        }
    }

    /// Opens the advisor chat over the finished report.
    pub fn start_chat(self) -> Result<Self, SessionError> {
        match self.state {
            SessionState::Results { report } => Ok(Self {
                state: SessionState::AdvisorChat {
                    report,
                    history: Vec::new(),
                },
                ..self
            }),
            _ => Err(self.invalid("start_chat")),
        }
    }

    /// Appends a turn to the chat history.
    pub fn record_turn(&mut self, turn: AdvisorTurn) -> Result<(), SessionError> {
        match &mut self.state {
            SessionState::AdvisorChat { history, .. } => {
                history.push(turn);
                Ok(())
            }
            _ => Err(self.invalid("record_turn")),
        }
    }

    /// The chat history, when in the advisor chat state.
    pub fn chat_history(&self) -> Option<&[AdvisorTurn]> {
        match &self.state {
            SessionState::AdvisorChat { history, .. } => Some(history.as_slice()),
            _ => None,
        }
    }

    fn invalid(&self, operation: &'static str) -> SessionError {
        SessionError::InvalidPhase {
            operation,
            phase: self.phase(),
        }
    }
}

impl Default for AdvisorSession {
    fn default() -> Self {
        Self::new()
    }
}
