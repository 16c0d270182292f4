//=========================================================================
// System Messages
//=========================================================================
//
// Append-only queue of short-lived notifications shown by the HUD.
//
// Architecture:
//   GameScene → push(text) → Vec<SystemMessage> → HUD filters by age
//
// The queue never evicts. Ids are assigned from a counter that is never
// rewound, so insertion order and id order always agree.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

//=== SystemMessage =======================================================

/// A single notification with the session time it was created at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemMessage {
    pub id: u64,
    pub text: String,
    pub created_at: Duration,
}

//=== MessageQueue ========================================================

/// Ordered notification log with monotonically increasing ids.
#[derive(Debug, Default)]
pub struct MessageQueue {
    messages: Vec<SystemMessage>,
    next_id: u64,
}

impl MessageQueue {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Message Operations -----------------------------------------------

    /// Appends a message stamped with `now` and returns its id.
    pub fn push(&mut self, text: impl Into<String>, now: Duration) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        self.messages.push(SystemMessage {
            id,
            text: text.into(),
            created_at: now,
        });

        id
    }

    /// Removes a message by id. The id is not handed out again.
    pub fn remove(&mut self, id: u64) -> Option<SystemMessage> {
        let pos = self.messages.iter().position(|m| m.id == id)?;
        Some(self.messages.remove(pos))
    }

    //--- Query API --------------------------------------------------------

    /// All messages in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &SystemMessage> {
        self.messages.iter()
    }

    /// Messages younger than `max_age` at `now`, oldest first.
    pub fn recent(&self, now: Duration, max_age: Duration) -> impl Iterator<Item = &SystemMessage> {
        self.messages
            .iter()
            .filter(move |m| now.saturating_sub(m.created_at) < max_age)
    }

    pub fn last(&self) -> Option<&SystemMessage> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// The id the next `push` will return.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
