//! Adapters - Implementations of port interfaces.

pub mod ai;

pub use ai::{DeepSeekProvider, MockChatProvider};
