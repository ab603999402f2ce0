//! Query interpreter: normalize, match, build.

use crate::matcher::{normalize, TopicMatcher};
use crate::response::{Response, ResponseBuilder};

/// Turns any raw query into exactly one [`Response`].
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryInterpreter {
    matcher: TopicMatcher,
    builder: ResponseBuilder,
}

impl QueryInterpreter {
    pub fn new() -> Self {
        Self {
            matcher: TopicMatcher::new(),
            builder: ResponseBuilder::new(),
        }
    }

    /// Interpret a raw query. Total: the empty string resolves to the help text.
    pub fn interpret(&self, raw_query: &str) -> Response {
        let normalized = normalize(raw_query);
        let topic = self.matcher.match_topic(&normalized);
        tracing::debug!(%topic, query_len = raw_query.len(), "Query interpreted");
        self.builder.build(topic)
    }
}

/// Convenience wrapper over a default [`QueryInterpreter`].
pub fn interpret(raw_query: &str) -> Response {
    QueryInterpreter::new().interpret(raw_query)
}

// =============================================================================
// Tests
// =============================================================================
