//! Session identifiers and the per-session engine store.

use crate::game::OpponentEngine;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError, RwLock, TryLockError};
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Opaque session token
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Mint a fresh random token
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SessionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for SessionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Debug for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionId({})", self.0)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

struct SessionSlot {
    engine: Mutex<OpponentEngine>,
    last_seen: Mutex<Instant>,
}

impl SessionSlot {
    fn new() -> Self {
        Self {
            engine: Mutex::new(OpponentEngine::new()),
            last_seen: Mutex::new(Instant::now()),
        }
    }

    fn touch(&self) {
        *self.last_seen.lock().unwrap_or_else(PoisonError::into_inner) = Instant::now();
    }

    fn idle_for(&self) -> Duration {
        self.last_seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .elapsed()
    }

    /// Whether a caller currently holds the engine
    fn in_use(&self) -> bool {
        matches!(self.engine.try_lock(), Err(TryLockError::WouldBlock))
    }
}

/// Engines keyed by session, created on first use.
///
/// Each session has its own mutex: calls for the same session run one at a
/// time, calls for different sessions only share the map lock long enough to
/// look up the slot.
#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<SessionId, Arc<SessionSlot>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` on the session's engine, creating the engine if needed
    pub fn with_engine<T>(
        &self,
        session_id: &SessionId,
        f: impl FnOnce(&mut OpponentEngine) -> T,
    ) -> T {
        loop {
            let slot = self.slot(session_id);
            let mut engine = slot.engine.lock().unwrap_or_else(PoisonError::into_inner);
            // Evicted between lookup and lock: start over with a fresh slot.
            if !self.is_current(session_id, &slot) {
                continue;
            }
            slot.touch();
            return f(&mut engine);
        }
    }

    fn is_current(&self, session_id: &SessionId, slot: &Arc<SessionSlot>) -> bool {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(session_id)
            .is_some_and(|current| Arc::ptr_eq(current, slot))
    }

    /// Look up or create the slot, marking it used while the map lock is held
    fn slot(&self, session_id: &SessionId) -> Arc<SessionSlot> {
        if let Some(slot) = self
            .sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(session_id)
        {
            slot.touch();
            return Arc::clone(slot);
        }

        let mut sessions = self
            .sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let slot = sessions.entry(session_id.clone()).or_insert_with(|| {
            tracing::debug!("Created session {}", session_id);
            Arc::new(SessionSlot::new())
        });
        Arc::clone(slot)
    }

    pub fn contains(&self, session_id: &SessionId) -> bool {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(session_id)
    }

    /// Drop a session's engine. Returns whether it existed.
    pub fn remove(&self, session_id: &SessionId) -> bool {
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(session_id)
            .is_some()
    }

    /// Drop every session not used for longer than `max_idle`.
    ///
    /// A session whose engine is held by a caller is never dropped.
    pub fn evict_idle(&self, max_idle: Duration) -> Vec<SessionId> {
        let mut sessions = self
            .sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        let expired: Vec<SessionId> = sessions
            .iter()
            .filter(|(_, slot)| slot.idle_for() > max_idle && !slot.in_use())
            .map(|(id, _)| id.clone())
            .collect();

        for id in &expired {
            sessions.remove(id);
        }

        expired
    }

    pub fn len(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
