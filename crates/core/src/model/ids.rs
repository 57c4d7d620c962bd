use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::time::Clock;

/// Unique identifier for a mentoring session.
///
/// Serialised as a bare JSON number so the persisted array keeps the
/// `{"id": 1700000000000, ...}` layout.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(u64);

impl SessionId {
    /// Creates a new `SessionId`
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the underlying u64 value
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionId({})", self.0)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(Self)
    }
}

/// Issues session ids from the clock's millisecond timestamp.
///
/// Ids are strictly increasing: when two ids are requested within the same
/// millisecond (or the clock goes backwards) the next id is `last + 1`.
#[derive(Debug, Clone)]
pub struct SessionIdGenerator {
    clock: Clock,
    last: u64,
}

impl SessionIdGenerator {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self { clock, last: 0 }
    }

    /// Start after `last`, usually the largest id already persisted.
    #[must_use]
    pub fn seeded(clock: Clock, last: Option<SessionId>) -> Self {
        Self {
            clock,
            last: last.map_or(0, |id| id.value()),
        }
    }

    /// Raise the floor so ids up to and including `id` are never issued.
    pub fn observe(&mut self, id: SessionId) {
        self.last = self.last.max(id.value());
    }

    pub fn next_id(&mut self) -> SessionId {
        let now = self.clock.now_millis();
        let next = now.max(self.last.saturating_add(1));
        self.last = next;
        SessionId(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_clock;

    #[test]
    fn first_id_is_clock_millis() {
        let mut ids = SessionIdGenerator::new(fixed_clock());
        assert_eq!(ids.next_id(), SessionId::new(1_700_000_000_000));
    }

    #[test]
    fn same_millisecond_does_not_collide() {
        let mut ids = SessionIdGenerator::new(fixed_clock());
        let a = ids.next_id();
        let b = ids.next_id();
        let c = ids.next_id();
        assert!(a < b && b < c);
        assert_eq!(c.value(), a.value() + 2);
    }

    #[test]
    fn seeded_generator_skips_persisted_ids() {
        let future = SessionId::new(1_800_000_000_000);
        let mut ids = SessionIdGenerator::seeded(fixed_clock(), Some(future));
        assert_eq!(ids.next_id().value(), 1_800_000_000_001);
    }

    #[test]
    fn parses_from_trimmed_text() {
        let id: SessionId = " 42 ".parse().unwrap();
        assert_eq!(id.value(), 42);
        assert!("x".parse::<SessionId>().is_err());
    }
}
