//! # intake
//!
//! Conversational intake parser for a meeting scheduling tool. Turns
//! free-form (or loosely structured pasted) availability text into a
//! validated structured record — time windows, duration, title, contact
//! fields, and the required fields still missing — by driving an external
//! text-completion provider and defensively decoding whatever it returns.
//!
//! ## Pipeline
//!
//! 1. [`prompt::compile`] turns a [`ReferenceContext`] into a deterministic
//!    instruction document encoding the temporal-resolution rules.
//! 2. A [`CompletionProvider`] adapter sends instructions plus user text to
//!    one vendor (Anthropic, OpenAI, or Gemini) behind one uniform contract.
//! 3. [`decode::decode`] turns the raw completion into a [`ParseOutcome`],
//!    folding every failure into an error record instead of panicking.
//!
//! Each [`parse`] call is stateless and single-shot: no conversation state,
//! no caching, no retries. Calls share nothing mutable, so running the same
//! input against several providers concurrently is safe.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use intake::{parse, Credentials, ProviderKind};
//!
//! #[tokio::main]
//! async fn main() {
//!     let credentials = Credentials::from_env();
//!     let outcome = parse(
//!         ProviderKind::Anthropic,
//!         "I'm free Tuesday afternoon",
//!         None,
//!         &credentials,
//!     )
//!     .await;
//!
//!     if let Some(error) = &outcome.error {
//!         eprintln!("parse failed: {error}");
//!     } else {
//!         println!("windows: {:?}", outcome.availability_windows);
//!     }
//! }
//! ```

pub mod cases;
pub mod config;
pub mod decode;
pub mod error;
pub mod parse;
pub mod prompt;
pub mod providers;
pub mod record;
pub mod reference;
pub mod transport;

pub use config::Credentials;
pub use decode::{decode, decode_with, DecodeOptions};
pub use error::Error;
pub use parse::{parse, parse_with, parse_with_provider, ParseOptions};
pub use providers::{
    create_provider, AnthropicProvider, CompletionProvider, GeminiProvider, OpenAiProvider,
    ProviderKind, SamplingConfig,
};
pub use record::{AvailabilityWindow, ParseOutcome, RequiredField};
pub use reference::ReferenceContext;
pub use transport::TransportError;

/// Result type alias for the library.
pub type Result<T> = std::result::Result<T, Error>;
