//! Shared domain primitives: identifiers, validation errors, state machines.

mod errors;
mod ids;
mod state_machine;

pub use errors::ValidationError;
pub use ids::SessionId;
pub use state_machine::StateMachine;
