//! Loader Plumbing
//!
//! Loading state for a panel plus a generation counter so that a slow,
//! superseded response cannot overwrite a newer one.

use crate::error::ApiError;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => LoadState::Ready(value),
            Err(e) => LoadState::Failed(format!("Failed to load: {}", e)),
        }
    }
}

/// Ticket handed out when a load starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u64);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationCounter {
    latest: u64,
}

impl GenerationCounter {
    /// Start a new load; every earlier ticket becomes stale
    pub fn begin(&mut self) -> Generation {
        self.latest += 1;
        Generation(self.latest)
    }

    pub fn is_current(&self, ticket: Generation) -> bool {
        ticket.0 == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_ticket_is_current() {
        let mut counter = GenerationCounter::default();
        let first = counter.begin();
        let second = counter.begin();
        assert!(!counter.is_current(first));
        assert!(counter.is_current(second));
    }

    #[test]
    fn test_failure_message() {
        let state: LoadState<()> = LoadState::from_result(Err(ApiError::Network("offline".into())));
        assert_eq!(state, LoadState::Failed("Failed to load: network error: offline".into()));
    }
}
