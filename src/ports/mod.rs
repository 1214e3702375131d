//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between the
//! domain and the outside world. Adapters implement these ports.

mod chat_provider;

pub use chat_provider::{
    ChatError, ChatProvider, CompletionRequest, CompletionResponse, Message, MessageRole,
};
