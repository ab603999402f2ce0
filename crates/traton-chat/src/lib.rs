//! Query interpretation and conversation engine for TratonAI.
//!
//! Matches free-text ocean-data questions to a fixed set of topics, builds
//! the canned narrative and chart for the matched topic, and runs a chat
//! session that answers one message at a time after a simulated delay.

pub mod interpreter;
pub mod matcher;
pub mod prompts;
pub mod response;
pub mod session;

pub use interpreter::{interpret, QueryInterpreter};
pub use matcher::{normalize, Topic, TopicMatcher};
pub use prompts::{QuickAction, QUICK_ACTIONS, TYPING_INDICATOR, WELCOME_MESSAGE};
pub use response::{Response, ResponseBuilder};
pub use session::{ConversationSession, SessionState, SessionView, SubmitOutcome};
