//! Multi-step intake wizard.
//!
//! The step index is 1-based and always clamped to `[1, total_steps]`:
//! repeated next/previous clicks can never move it out of range.

use serde::{Deserialize, Serialize};

/// Which intake pathway the wizard is driving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pathway {
    /// Fifteen-question quick assessment: 4 steps.
    Quick,
    /// Test-report upload flow: 4 test steps + degree + description + analysis.
    Comprehensive,
}

impl Pathway {
    /// Number of wizard steps for this pathway.
    pub fn total_steps(&self) -> u32 {
        match self {
            Pathway::Quick => 4,
            Pathway::Comprehensive => 7,
        }
    }
}

/// Wizard position within a pathway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wizard {
    pathway: Pathway,
    current_step: u32,
}

impl Wizard {
    /// Starts the wizard at step 1.
    pub fn new(pathway: Pathway) -> Self {
        Self {
            pathway,
            current_step: 1,
        }
    }

    pub fn pathway(&self) -> Pathway {
        self.pathway
    }

    /// Current 1-based step, always within `[1, total_steps]`.
    pub fn current_step(&self) -> u32 {
        self.current_step
    }

    pub fn total_steps(&self) -> u32 {
        self.pathway.total_steps()
    }

    /// Advances one step, saturating at the last step.
    pub fn next(&mut self) {
        self.current_step = (self.current_step + 1).min(self.total_steps());
    }

    /// Goes back one step, saturating at the first step.
    pub fn previous(&mut self) {
        self.current_step = self.current_step.saturating_sub(1).max(1);
    }

    pub fn is_first_step(&self) -> bool {
        self.current_step == 1
    }

    pub fn is_last_step(&self) -> bool {
        self.current_step == self.total_steps()
    }

    /// Completion fraction in percent, for progress display.
    pub fn progress_percent(&self) -> f32 {
        (self.current_step as f32 / self.total_steps() as f32) * 100.0
    }
}
