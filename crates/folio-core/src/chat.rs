//! Chat session latch: at most one reply in flight per session.
//!
//! The session walks `Idle -> Sending -> Streaming -> Idle`. Submissions
//! made while it is not idle are rejected, never queued, so replies always
//! land in submission order.

use thiserror::Error;
use tracing::debug;

use crate::state::{Message, Role};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChatError {
    #[error("message cannot be empty")]
    EmptyMessage,
    #[error("a reply is still in progress")]
    Busy,
    #[error("chat session is closed")]
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChatPhase {
    #[default]
    Idle,
    /// Waiting for the responder.
    Sending,
    /// Reply received, still being revealed.
    Streaming,
}

/// Handed out by [`ChatSession::submit`]; the ticket must come back with
/// the reply so late answers for an older submission are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    pub ticket: u64,
    pub prompt: String,
}

#[derive(Debug, Clone, Copy)]
struct Reveal {
    index: usize,
    shown: usize,
    total: usize,
}

#[derive(Debug, Default)]
pub struct ChatSession {
    messages: Vec<Message>,
    phase: ChatPhase,
    ticket: u64,
    reveal: Option<Reveal>,
    closed: bool,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn phase(&self) -> ChatPhase {
        self.phase
    }

    pub fn is_busy(&self) -> bool {
        self.phase != ChatPhase::Idle
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn submit(&mut self, input: &str) -> Result<PendingReply, ChatError> {
        if self.closed {
            return Err(ChatError::Closed);
        }
        if self.is_busy() {
            return Err(ChatError::Busy);
        }
        let prompt = input.trim();
        if prompt.is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        self.messages.push(Message::user(prompt));
        self.ticket += 1;
        self.phase = ChatPhase::Sending;

        Ok(PendingReply {
            ticket: self.ticket,
            prompt: prompt.to_string(),
        })
    }

    /// Accept the reply for `ticket`. Returns false when it was dropped
    /// because the session closed or moved on.
    pub fn receive(&mut self, ticket: u64, reply: String) -> bool {
        if self.closed || self.phase != ChatPhase::Sending || ticket != self.ticket {
            debug!(ticket, current = self.ticket, "dropping stale reply");
            return false;
        }

        let total = reply.chars().count();
        self.messages.push(Message::assistant(reply));
        self.reveal = Some(Reveal {
            index: self.messages.len() - 1,
            shown: 0,
            total,
        });
        self.phase = ChatPhase::Streaming;
        self.settle_reveal();
        true
    }

    pub fn advance_reveal(&mut self, chars: usize) {
        if let Some(reveal) = self.reveal.as_mut() {
            reveal.shown = reveal.shown.saturating_add(chars).min(reveal.total);
        }
        self.settle_reveal();
    }

    pub fn finish_reveal(&mut self) {
        if let Some(reveal) = self.reveal.as_mut() {
            reveal.shown = reveal.total;
        }
        self.settle_reveal();
    }

    /// Text to display for message `index`: the revealed prefix while it is
    /// streaming, its full content otherwise.
    pub fn visible_content(&self, index: usize) -> &str {
        let Some(message) = self.messages.get(index) else {
            return "";
        };
        match self.reveal {
            Some(reveal) if reveal.index == index => {
                let end = message
                    .content
                    .char_indices()
                    .nth(reveal.shown)
                    .map(|(i, _)| i)
                    .unwrap_or(message.content.len());
                &message.content[..end]
            }
            _ => &message.content,
        }
    }

    pub fn last_role(&self) -> Option<Role> {
        self.messages.last().map(|m| m.role)
    }

    /// Tear the session down. Pending replies are ignored from now on.
    pub fn close(&mut self) {
        self.closed = true;
        self.ticket += 1;
        self.reveal = None;
        self.phase = ChatPhase::Idle;
    }

    fn settle_reveal(&mut self) {
        if let Some(reveal) = self.reveal {
            if reveal.shown >= reveal.total {
                self.reveal = None;
                self.phase = ChatPhase::Idle;
            }
        }
    }
}
