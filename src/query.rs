use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::{NameRecord, NameStore, QueryError, QueryResult};

/// Read-only queries over a loaded NameStore.
///
/// The random source is supplied by the caller so tests can use a seeded
/// generator. It sits behind a mutex since handlers run concurrently.
#[derive(Debug)]
pub struct NameQueryService<R = StdRng> {
    store: NameStore,
    rng: Mutex<R>,
}

impl NameQueryService<StdRng> {
    pub fn from_entropy(store: NameStore) -> Self {
        Self::new(store, StdRng::from_entropy())
    }
}

impl<R: Rng> NameQueryService<R> {
    pub fn new(store: NameStore, rng: R) -> Self {
        NameQueryService {
            store,
            rng: Mutex::new(rng),
        }
    }

    pub fn store(&self) -> &NameStore {
        &self.store
    }

    /// A uniformly chosen record, or `QueryError::EmptyStore`.
    pub fn random(&self) -> QueryResult<&NameRecord> {
        if self.store.is_empty() {
            return Err(QueryError::EmptyStore);
        }

        let idx = {
            let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
            rng.gen_range(0..self.store.len())
        };

        self.store.get(idx).ok_or(QueryError::EmptyStore)
    }

    /// Records at 1-based positions `from..=to`, in store order. Out of bounds
    /// or inverted ranges are rejected rather than clamped.
    pub fn range(&self, from: i64, to: i64) -> QueryResult<&[NameRecord]> {
        let len = self.store.len();
        let invalid = QueryError::InvalidRange { from, to, len };

        if from < 1 || from > to {
            return Err(invalid);
        }
        let (start, end) = match (usize::try_from(from - 1), usize::try_from(to)) {
            (Ok(start), Ok(end)) if end <= len => (start, end),
            _ => return Err(invalid),
        };

        Ok(&self.store.as_slice()[start..end])
    }
}
