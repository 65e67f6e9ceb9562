//! Homework-help chat sessions, one per user.
//!
//! The caller owns a [`SessionRegistry`] and passes it where it is needed.
//! Sessions are keyed by user id, refreshed on every access and evicted
//! either explicitly, after sitting idle past the TTL, or least-recently-used
//! first when the registry is full.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
    pub at: NaiveDateTime,
}

/// One slice of history, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryPage {
    pub messages: Vec<ChatMessage>,
    /// Offset to request the next (older) page, if any remain.
    pub next_offset: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSession {
    pub user_id: String,
    pub created_at: NaiveDateTime,
    pub last_seen: NaiveDateTime,
    messages: Vec<ChatMessage>,
}

impl ChatSession {
    fn new(user_id: &str, now: NaiveDateTime) -> Self {
        Self {
            user_id: user_id.to_string(),
            created_at: now,
            last_seen: now,
            messages: Vec::new(),
        }
    }

    pub fn push(&mut self, role: Role, text: impl Into<String>, now: NaiveDateTime) {
        self.messages.push(ChatMessage {
            role,
            text: text.into(),
            at: now,
        });
        self.last_seen = now;
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Messages in chronological order.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Read `limit` messages starting `offset` back from the newest one.
    pub fn page(&self, offset: usize, limit: usize) -> HistoryPage {
        let messages: Vec<ChatMessage> = self
            .messages
            .iter()
            .rev()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect();
        let consumed = offset.saturating_add(messages.len());
        let next_offset = (limit > 0 && consumed < self.messages.len()).then_some(consumed);
        HistoryPage {
            messages,
            next_offset,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SessionRegistry {
    sessions: HashMap<String, ChatSession>,
    capacity: usize,
    idle_ttl: Duration,
}

impl SessionRegistry {
    /// `capacity` is clamped to at least one session.
    pub fn new(capacity: usize, idle_ttl: Duration) -> Self {
        Self {
            sessions: HashMap::new(),
            capacity: capacity.max(1),
            idle_ttl,
        }
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn get(&self, user_id: &str) -> Option<&ChatSession> {
        self.sessions.get(user_id)
    }

    /// The user's session, created if missing. Marks it as seen at `now`.
    pub fn get_or_create(&mut self, user_id: &str, now: NaiveDateTime) -> &mut ChatSession {
        if !self.sessions.contains_key(user_id) {
            while self.sessions.len() >= self.capacity {
                if !self.evict_least_recent() {
                    break;
                }
            }
            tracing::debug!(user_id, "creating chat session");
        }
        let session = self
            .sessions
            .entry(user_id.to_string())
            .or_insert_with(|| ChatSession::new(user_id, now));
        session.last_seen = now;
        session
    }

    pub fn evict(&mut self, user_id: &str) -> Option<ChatSession> {
        self.sessions.remove(user_id)
    }

    /// Drop sessions idle for longer than the TTL. Returns how many were removed.
    pub fn evict_idle(&mut self, now: NaiveDateTime) -> usize {
        let before = self.sessions.len();
        let ttl = self.idle_ttl;
        self.sessions.retain(|_, s| now - s.last_seen <= ttl);
        let removed = before - self.sessions.len();
        if removed > 0 {
            tracing::debug!(removed, "evicted idle chat sessions");
        }
        removed
    }

    fn evict_least_recent(&mut self) -> bool {
        let oldest = self
            .sessions
            .values()
            .min_by_key(|s| s.last_seen)
            .map(|s| s.user_id.clone());
        match oldest {
            Some(id) => {
                tracing::debug!(user_id = %id, "evicting least recently used chat session");
                self.sessions.remove(&id).is_some()
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn t(min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 9, 9)
            .unwrap()
            .and_hms_opt(12, min, 0)
            .unwrap()
    }

    #[test]
    fn sessions_are_per_user() {
        let mut reg = SessionRegistry::new(8, Duration::minutes(30));
        reg.get_or_create("ana", t(0)).push(Role::User, "what is mitosis?", t(0));
        reg.get_or_create("ben", t(1)).push(Role::User, "help with 3x+1=7", t(1));
        reg.get_or_create("ana", t(2)).push(Role::Assistant, "cell division", t(2));

        assert_eq!(reg.len(), 2);
        assert_eq!(reg.get("ana").unwrap().len(), 2);
        assert_eq!(reg.get("ben").unwrap().len(), 1);
    }

    #[test]
    fn lru_eviction_when_full() {
        let mut reg = SessionRegistry::new(2, Duration::hours(1));
        reg.get_or_create("a", t(0));
        reg.get_or_create("b", t(1));
        reg.get_or_create("a", t(2));
        reg.get_or_create("c", t(3));

        assert_eq!(reg.len(), 2);
        assert!(reg.get("a").is_some());
        assert!(reg.get("b").is_none());
        assert!(reg.get("c").is_some());
    }

    #[test]
    fn idle_sessions_expire() {
        let mut reg = SessionRegistry::new(8, Duration::minutes(10));
        reg.get_or_create("a", t(0));
        reg.get_or_create("b", t(5));
        assert_eq!(reg.evict_idle(t(12)), 1);
        assert!(reg.get("a").is_none());
        assert!(reg.get("b").is_some());
    }

    #[test]
    fn explicit_eviction() {
        let mut reg = SessionRegistry::new(0, Duration::minutes(10));
        reg.get_or_create("a", t(0)).push(Role::User, "hi", t(0));
        let gone = reg.evict("a").unwrap();
        assert_eq!(gone.len(), 1);
        assert!(reg.is_empty());
    }

    #[test]
    fn history_pages_newest_first() {
        let mut reg = SessionRegistry::new(1, Duration::minutes(10));
        let s = reg.get_or_create("a", t(0));
        for i in 0..5 {
            s.push(Role::User, format!("m{i}"), t(i));
        }

        let first = s.page(0, 2);
        let texts: Vec<_> = first.messages.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, ["m4", "m3"]);
        assert_eq!(first.next_offset, Some(2));

        let last = s.page(4, 2);
        assert_eq!(last.messages.len(), 1);
        assert_eq!(last.messages[0].text, "m0");
        assert_eq!(last.next_offset, None);
    }
}
