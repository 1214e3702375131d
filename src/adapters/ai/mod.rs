//! Chat provider adapters.
//!
//! - `DeepSeekProvider` - reqwest-backed adapter for the DeepSeek API
//! - `MockChatProvider` - configurable test double

mod deepseek_provider;
mod mock_provider;

pub use deepseek_provider::DeepSeekProvider;
pub use mock_provider::{MockChatProvider, MockResponse};
