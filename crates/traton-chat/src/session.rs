//! Conversation session: append-only message log with single-flight replies.
//!
//! State transitions:
//! - Idle -> AwaitingResponse (user message accepted)
//! - AwaitingResponse -> Idle (assistant reply appended, or session torn down)
//!
//! The assistant reply is produced by a spawned Tokio task that sleeps for the
//! configured thinking delay first. The session owns the task handle and
//! aborts it on [`ConversationSession::close`] or drop.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::task::JoinHandle;
use traton_core::config::ChatConfig;
use traton_core::types::Message;

use crate::interpreter::QueryInterpreter;
use crate::prompts::WELCOME_MESSAGE;

// =============================================================================
// SessionState
// =============================================================================

/// Lifecycle state of a conversation session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// Ready to accept a user message.
    Idle,
    /// A user message was accepted and its reply is scheduled.
    AwaitingResponse,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::Idle => write!(f, "Idle"),
            SessionState::AwaitingResponse => write!(f, "AwaitingResponse"),
        }
    }
}

impl SessionState {
    /// Returns whether a transition from `self` to `target` is valid.
    pub fn can_transition_to(&self, target: &SessionState) -> bool {
        matches!(
            (self, target),
            (SessionState::Idle, SessionState::AwaitingResponse)
                | (SessionState::AwaitingResponse, SessionState::Idle)
        )
    }
}

/// What happened to a [`ConversationSession::submit`] call.
///
/// Rejections leave the session untouched; they are not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    /// Text was empty or whitespace only.
    RejectedEmpty,
    /// Another reply is still pending.
    RejectedPending,
}

// =============================================================================
// Shared log
// =============================================================================

#[derive(Debug)]
struct SessionLog {
    messages: Vec<Message>,
    state: SessionState,
    closed: bool,
}

impl SessionLog {
    fn new(seed: Vec<Message>) -> Self {
        Self {
            messages: seed,
            state: SessionState::Idle,
            closed: false,
        }
    }

    fn transition(&mut self, target: SessionState) -> bool {
        if self.state.can_transition_to(&target) {
            tracing::debug!("Session state: {} -> {}", self.state, target);
            self.state = target;
            true
        } else {
            false
        }
    }

    fn complete(&mut self, reply: Message) {
        if self.closed {
            tracing::debug!("Session closed before reply landed; discarding");
            return;
        }
        if self.transition(SessionState::Idle) {
            self.messages.push(reply);
        }
    }
}

fn lock_log(log: &Mutex<SessionLog>) -> MutexGuard<'_, SessionLog> {
    // Every critical section leaves the log consistent, so a poisoned lock is still usable.
    log.lock().unwrap_or_else(|e| e.into_inner())
}

// =============================================================================
// SessionView
// =============================================================================

/// Read-only handle onto a session's log, for the display surface.
///
/// Outlives the session; after teardown it keeps showing the final snapshot.
#[derive(Debug, Clone)]
pub struct SessionView {
    log: Arc<Mutex<SessionLog>>,
}

impl SessionView {
    /// Ordered snapshot of the log.
    pub fn messages(&self) -> Vec<Message> {
        lock_log(&self.log).messages.clone()
    }

    pub fn pending(&self) -> bool {
        lock_log(&self.log).state == SessionState::AwaitingResponse
    }
}

// =============================================================================
// ConversationSession
// =============================================================================

/// A single-writer chat log that answers one user message at a time.
pub struct ConversationSession {
    log: Arc<Mutex<SessionLog>>,
    interpreter: QueryInterpreter,
    thinking_delay: Duration,
    reply_task: Option<JoinHandle<()>>,
}

impl fmt::Debug for ConversationSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversationSession")
            .field("log", &self.log)
            .field("thinking_delay", &self.thinking_delay)
            .field("has_reply_task", &self.reply_task.is_some())
            .finish()
    }
}

impl ConversationSession {
    /// Create an empty session.
    pub fn new(thinking_delay: Duration) -> Self {
        Self::seeded(thinking_delay, Vec::new())
    }

    /// Create a session whose log opens with the assistant greeting.
    pub fn with_welcome(thinking_delay: Duration) -> Self {
        let greeting = Message::assistant(WELCOME_MESSAGE, Default::default());
        Self::seeded(thinking_delay, vec![greeting])
    }

    /// Create a session from the `[chat]` config section.
    pub fn from_config(config: &ChatConfig) -> Self {
        if config.show_welcome {
            Self::with_welcome(config.thinking_delay())
        } else {
            Self::new(config.thinking_delay())
        }
    }

    fn seeded(thinking_delay: Duration, seed: Vec<Message>) -> Self {
        Self {
            log: Arc::new(Mutex::new(SessionLog::new(seed))),
            interpreter: QueryInterpreter::new(),
            thinking_delay,
            reply_task: None,
        }
    }

    /// Submit user text.
    ///
    /// Appends the user message immediately and schedules the assistant reply.
    /// Empty text and submissions made while a reply is pending are ignored.
    /// Must be called from within a Tokio runtime.
    pub fn submit(&mut self, text: &str) -> SubmitOutcome {
        if text.trim().is_empty() {
            tracing::debug!("Ignoring empty submission");
            return SubmitOutcome::RejectedEmpty;
        }

        {
            let mut log = lock_log(&self.log);
            if !log.transition(SessionState::AwaitingResponse) {
                tracing::debug!(state = %log.state, "Ignoring submission while a reply is pending");
                return SubmitOutcome::RejectedPending;
            }
            log.messages.push(Message::user(text));
        }

        let log = Arc::clone(&self.log);
        let interpreter = self.interpreter;
        let delay = self.thinking_delay;
        let query = text.to_string();

        self.reply_task = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let response = interpreter.interpret(&query);
            tracing::info!(topic = %response.topic, "Assistant reply ready");
            let reply = Message::assistant(response.content, response.chart);
            lock_log(&log).complete(reply);
        }));

        SubmitOutcome::Accepted
    }

    /// Wait until the scheduled reply, if any, has been appended.
    ///
    /// The task handle is only released once the reply has landed.
    pub async fn wait_for_reply(&mut self) {
        if let Some(task) = self.reply_task.as_mut() {
            if let Err(e) = task.await {
                tracing::warn!(error = %e, "Reply task did not complete");
            }
            self.reply_task = None;
        }
    }

    /// Ordered snapshot of the log.
    pub fn messages(&self) -> Vec<Message> {
        lock_log(&self.log).messages.clone()
    }

    pub fn message_count(&self) -> usize {
        lock_log(&self.log).messages.len()
    }

    /// Whether an assistant reply is outstanding.
    pub fn pending(&self) -> bool {
        self.state() == SessionState::AwaitingResponse
    }

    pub fn state(&self) -> SessionState {
        lock_log(&self.log).state
    }

    pub fn thinking_delay(&self) -> Duration {
        self.thinking_delay
    }

    /// A read-only handle that stays valid after the session is gone.
    pub fn view(&self) -> SessionView {
        SessionView {
            log: Arc::clone(&self.log),
        }
    }

    /// Tear the session down, cancelling any pending reply.
    pub fn close(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        if let Some(task) = self.reply_task.take() {
            task.abort();
        }

        let mut log = lock_log(&self.log);
        if log.closed {
            return;
        }
        log.closed = true;
        if log.transition(SessionState::Idle) {
            tracing::info!("Pending reply cancelled on session teardown");
        }
    }
}

impl Drop for ConversationSession {
    fn drop(&mut self) {
        self.shutdown();
    }
}

// =============================================================================
// Tests
// =============================================================================
