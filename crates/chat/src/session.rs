use std::fmt;
use std::str::FromStr;

use snafu::ResultExt;
use uuid::Uuid;

use super::error::{ChatError, ChatResult, InvalidSessionSnafu};

/// Opaque token correlating one browser tab's messages server-side.
///
/// Sent unchanged with every request; the server treats it as an opaque
/// string, so the UUID shape is a client-side convenience only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new(raw: Uuid) -> Self {
        Self(raw)
    }

    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(raw: &str) -> ChatResult<Self> {
        let parsed = Uuid::parse_str(raw).context(InvalidSessionSnafu {
            raw: raw.to_string(),
        })?;
        Ok(Self(parsed))
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl From<Uuid> for SessionId {
    fn from(value: Uuid) -> Self {
        Self::new(value)
    }
}

impl FromStr for SessionId {
    type Err = ChatError;

    fn from_str(raw: &str) -> ChatResult<Self> {
        Self::parse(raw)
    }
}

/// One string slot of per-tab storage holding the session token.
pub trait SessionStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
}

/// Returns the stored session token, minting and persisting a fresh one
/// only when the slot is empty or holds something unparseable.
pub fn obtain_session<S: SessionStore>(store: &S) -> SessionId {
    if let Some(raw) = store.load()
        && let Ok(existing) = SessionId::parse(&raw)
    {
        return existing;
    }

    let fresh = SessionId::generate();
    store.save(&fresh.to_string());
    fresh
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    struct MemoryStore {
        slot: RefCell<Option<String>>,
    }

    impl SessionStore for MemoryStore {
        fn load(&self) -> Option<String> {
            self.slot.borrow().clone()
        }

        fn save(&self, token: &str) {
            *self.slot.borrow_mut() = Some(token.to_string());
        }
    }

    #[test]
    fn session_is_stable_across_repeated_obtains() {
        let store = MemoryStore::default();
        let first = obtain_session(&store);
        let second = obtain_session(&store);
        assert_eq!(first, second);
    }

    #[test]
    fn empty_slot_mints_and_persists_a_token() {
        let store = MemoryStore::default();
        let minted = obtain_session(&store);
        assert_eq!(store.load(), Some(minted.to_string()));
    }

    #[test]
    fn unparseable_slot_is_replaced() {
        let store = MemoryStore::default();
        store.save("not-a-uuid");
        let minted = obtain_session(&store);
        assert_eq!(store.load(), Some(minted.to_string()));
        assert_ne!(store.load().as_deref(), Some("not-a-uuid"));
    }

    #[test]
    fn parse_round_trips_display() {
        let id = SessionId::generate();
        assert_eq!(SessionId::parse(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(SessionId::parse("starship").is_err());
    }
}
