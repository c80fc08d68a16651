/// Wire types for the chat endpoint.
pub mod api;
/// Widget configuration derived from the embedding script tag.
pub mod config;
pub mod error;
/// URL detection for bot message bodies.
pub mod linkify;
/// Domain entities for the message log and submission gating.
pub mod message;
pub mod session;

pub use api::{ApiErrorBody, ChatRequest, ChatResponse};
pub use config::{WidgetConfig, base_url_from_script_src};
pub use error::{ChatError, ChatResult, GENERIC_ERROR_MESSAGE};
pub use linkify::{TextSpan, linkify};
pub use message::{Message, Role, Transcript, compose_question};
pub use session::{SessionId, SessionStore, obtain_session};
