//! Destination for accepted contact messages.
//!
//! DESIGN
//! ======
//! `ContactInbox` is the seam between validation and delivery. The shipped
//! `MemoryInbox` logs every accepted message at `info` and keeps the most
//! recent `capacity` of them in process memory, evicting the oldest once
//! full. A zero-capacity inbox refuses everything.

use std::collections::VecDeque;

use async_trait::async_trait;
use time::OffsetDateTime;
use tokio::sync::RwLock;
use uuid::Uuid;

#[cfg(test)]
#[path = "inbox_test.rs"]
mod inbox_test;

// =============================================================================
// MESSAGE
// =============================================================================

/// A validated, normalized contact submission.
#[derive(Clone, Debug)]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    /// Lowercased sender address.
    pub email: String,
    pub message: String,
    pub received_at: OffsetDateTime,
}

impl ContactMessage {
    #[must_use]
    pub fn new(name: String, email: String, message: String) -> Self {
        Self { id: Uuid::new_v4(), name, email, message, received_at: OffsetDateTime::now_utc() }
    }
}

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("inbox full (capacity {capacity})")]
    InboxFull { capacity: usize },
}

// =============================================================================
// INBOX TRAIT
// =============================================================================

/// Receives accepted contact messages. Enables mocking in tests.
#[async_trait]
pub trait ContactInbox: Send + Sync {
    /// Hand a message to the inbox.
    ///
    /// # Errors
    ///
    /// Returns a [`ContactError`] if the message could not be stored.
    async fn deliver(&self, message: ContactMessage) -> Result<(), ContactError>;
}

// =============================================================================
// MEMORY INBOX
// =============================================================================

/// Bounded in-process inbox.
pub struct MemoryInbox {
    messages: RwLock<VecDeque<ContactMessage>>,
    capacity: usize,
}

impl MemoryInbox {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self { messages: RwLock::new(VecDeque::new()), capacity }
    }

    /// Snapshot of stored messages, oldest first.
    #[cfg(test)]
    pub async fn messages(&self) -> Vec<ContactMessage> {
        self.messages.read().await.iter().cloned().collect()
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.messages.read().await.len()
    }
}

#[async_trait]
impl ContactInbox for MemoryInbox {
    async fn deliver(&self, message: ContactMessage) -> Result<(), ContactError> {
        if self.capacity == 0 {
            return Err(ContactError::InboxFull { capacity: 0 });
        }

        tracing::info!(
            id = %message.id,
            name = %message.name,
            email = %message.email,
            received_at = %message.received_at,
            body = %message.message,
            "contact message received"
        );

        let mut messages = self.messages.write().await;
        while messages.len() >= self.capacity {
            if let Some(evicted) = messages.pop_front() {
                tracing::debug!(id = %evicted.id, "inbox full, evicted oldest message");
            }
        }
        messages.push_back(message);
        Ok(())
    }
}
