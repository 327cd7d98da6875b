//! Server-side session store and cookie plumbing.
//!
//! Sessions are isolated per visitor and keyed by an opaque id carried
//! in a cookie; only the id crosses the wire. The store is shared
//! read-mostly state behind a lock, mutated only by the owning
//! visitor's requests. Entries idle past the TTL are treated as gone
//! and swept whenever a new session is created, so abandoned visits
//! cannot grow the map for the process lifetime.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use axum::http::{header, HeaderMap};
use parking_lot::RwLock;

use bigfive_core::{SessionId, SessionState};

/// Cookie carrying the session id.
pub const SESSION_COOKIE: &str = "bigfive_sid";

/// Idle time after which a session is dropped.
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(30 * 60);

#[derive(Debug)]
struct SessionEntry {
    state: SessionState,
    touched: Instant,
}

impl SessionEntry {
    fn fresh() -> Self {
        Self {
            state: SessionState::new(),
            touched: Instant::now(),
        }
    }

    fn expired(&self, ttl: Duration) -> bool {
        self.touched.elapsed() >= ttl
    }
}

/// In-memory session store keyed by [`SessionId`].
#[derive(Debug)]
pub struct SessionStore {
    ttl: Duration,
    inner: RwLock<HashMap<SessionId, SessionEntry>>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_ttl(DEFAULT_SESSION_TTL)
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            inner: RwLock::new(HashMap::new()),
        }
    }

    /// Create a fresh session and return its id. Doubles as the sweep
    /// point: everything idle past the TTL is dropped here.
    pub fn create(&self) -> SessionId {
        let id = SessionId::new();
        let ttl = self.ttl;
        let mut inner = self.inner.write();
        inner.retain(|_, entry| !entry.expired(ttl));
        inner.insert(id, SessionEntry::fresh());
        id
    }

    /// Reinitialize an existing session to the empty state.
    pub fn reset(&self, id: SessionId) {
        self.inner.write().insert(id, SessionEntry::fresh());
    }

    pub fn contains(&self, id: SessionId) -> bool {
        self.inner
            .read()
            .get(&id)
            .is_some_and(|entry| !entry.expired(self.ttl))
    }

    /// Snapshot of the session state, refreshing its idle clock.
    pub fn get(&self, id: SessionId) -> Option<SessionState> {
        let mut inner = self.inner.write();
        if inner.get(&id).is_some_and(|entry| entry.expired(self.ttl)) {
            inner.remove(&id);
            return None;
        }
        let entry = inner.get_mut(&id)?;
        entry.touched = Instant::now();
        Some(entry.state.clone())
    }

    /// Mutate a session in place. Returns false when the id is unknown
    /// or expired.
    pub fn update<F>(&self, id: SessionId, f: F) -> bool
    where
        F: FnOnce(&mut SessionState),
    {
        let mut inner = self.inner.write();
        if inner.get(&id).is_some_and(|entry| entry.expired(self.ttl)) {
            inner.remove(&id);
            return false;
        }
        match inner.get_mut(&id) {
            Some(entry) => {
                f(&mut entry.state);
                entry.touched = Instant::now();
                true
            }
            None => false,
        }
    }

    /// Drop every session idle past the TTL.
    pub fn purge_expired(&self) {
        let ttl = self.ttl;
        self.inner.write().retain(|_, entry| !entry.expired(ttl));
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}

/// Extract the session id from the request's cookie header.
pub fn session_id_from_headers(headers: &HeaderMap) -> Option<SessionId> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        if name == SESSION_COOKIE {
            SessionId::parse(value.trim())
        } else {
            None
        }
    })
}

/// Set-Cookie value naming the session.
pub fn session_cookie_value(id: SessionId) -> String {
    format!("{SESSION_COOKIE}={id}; Path=/; HttpOnly; SameSite=Lax")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_create_get_update() {
        let store = SessionStore::new();
        let id = store.create();
        assert!(store.contains(id));

        assert!(store.update(id, |s| {
            s.record_answer("EXT1", 4).unwrap();
        }));
        assert_eq!(store.get(id).unwrap().answers["EXT1"], 4);

        store.reset(id);
        assert!(store.get(id).unwrap().answers.is_empty());
    }

    #[test]
    fn test_update_unknown_session() {
        let store = SessionStore::new();
        assert!(!store.update(SessionId::new(), |_| {}));
    }

    #[test]
    fn test_expired_session_is_gone() {
        let store = SessionStore::with_ttl(Duration::ZERO);
        let id = store.create();
        assert!(!store.contains(id));
        assert!(store.get(id).is_none());
        assert!(!store.update(id, |_| {}));
    }

    #[test]
    fn test_create_sweeps_expired_sessions() {
        let store = SessionStore::with_ttl(Duration::ZERO);
        let stale = store.create();
        let _fresh = store.create();
        assert_eq!(store.len(), 1);
        assert!(!store.contains(stale));
    }

    #[test]
    fn test_live_session_survives_purge() {
        let store = SessionStore::new();
        let id = store.create();
        store.purge_expired();
        assert!(store.contains(id));
        store.purge_expired();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_cookie_round_trip() {
        let id = SessionId::new();
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("theme=dark; {}", session_cookie_value(id)))
                .unwrap(),
        );
        assert_eq!(session_id_from_headers(&headers), Some(id));
    }

    #[test]
    fn test_missing_cookie() {
        assert_eq!(session_id_from_headers(&HeaderMap::new()), None);
    }
}
