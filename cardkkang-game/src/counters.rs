//! Daily and grand-total card counters over an injected key-value backend.
//!
//! Storage is best-effort: unreadable or corrupt values count as zero and
//! failed writes are logged and dropped. Reads and writes are not atomic, so
//! two writers sharing a backend can lose updates.

use serde::Serialize;

use crate::clock::{Clock, LocalClock};
use crate::constants::MILESTONE_SPAN;
use crate::storage::{KeyValueStore, StorageKeys};

/// Counter values after an operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CounterSnapshot {
    pub daily_total: u64,
    pub grand_total: u64,
}

impl CounterSnapshot {
    #[must_use]
    pub fn milestone(&self) -> MilestoneProgress {
        MilestoneProgress::from_total(self.grand_total)
    }
}

/// Progress toward the next multiple of [`MILESTONE_SPAN`] cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MilestoneProgress {
    /// `grand_total mod 100`.
    pub progress: u64,
    /// Bar width, `min(100, progress)`.
    pub percent: u8,
    /// Cards until the next milestone; 100 right after reaching one.
    pub to_next: u64,
}

impl MilestoneProgress {
    #[must_use]
    pub fn from_total(grand_total: u64) -> Self {
        let progress = grand_total % MILESTONE_SPAN;
        let percent = u8::try_from(progress.min(100)).unwrap_or(100);
        let to_next = match (MILESTONE_SPAN - progress) % MILESTONE_SPAN {
            0 => MILESTONE_SPAN,
            n => n,
        };
        Self {
            progress,
            percent,
            to_next,
        }
    }
}

/// Explicit counter store; construct one per backend.
#[derive(Debug, Clone)]
pub struct CounterStore<S, C = LocalClock> {
    store: S,
    keys: StorageKeys,
    clock: C,
}

impl<S: KeyValueStore> CounterStore<S, LocalClock> {
    /// Store with the default keys and the local wall clock.
    pub fn with_local_clock(store: S) -> Self {
        Self::new(store, StorageKeys::default(), LocalClock)
    }
}

impl<S, C> CounterStore<S, C>
where
    S: KeyValueStore,
    C: Clock,
{
    pub const fn new(store: S, keys: StorageKeys, clock: C) -> Self {
        Self { store, keys, clock }
    }

    pub const fn keys(&self) -> &StorageKeys {
        &self.keys
    }

    pub const fn backend(&self) -> &S {
        &self.store
    }

    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Key for today's counter, computed from the clock at call time.
    pub fn today_key(&self) -> String {
        self.keys.day_key(self.clock.today())
    }

    /// Add `n` cards to both counters and persist them.
    pub fn add_cards(&self, n: u64) -> CounterSnapshot {
        let day_key = self.today_key();
        let total_key = self.keys.total_key();
        let daily_total = self.read_count(&day_key).saturating_add(n);
        let grand_total = self.read_count(&total_key).saturating_add(n);
        self.write_count(&day_key, daily_total);
        self.write_count(&total_key, grand_total);
        CounterSnapshot {
            daily_total,
            grand_total,
        }
    }

    /// Zero today's counter only; the grand total is untouched.
    ///
    /// The returned daily total is always 0, even when the write is dropped.
    pub fn reset_daily(&self) -> CounterSnapshot {
        let day_key = self.today_key();
        self.write_count(&day_key, 0);
        log::debug!("reset daily counter {day_key}");
        CounterSnapshot {
            daily_total: 0,
            grand_total: self.read_count(&self.keys.total_key()),
        }
    }

    /// Current values; same as adding zero cards.
    pub fn snapshot(&self) -> CounterSnapshot {
        self.add_cards(0)
    }

    fn read_count(&self, key: &str) -> u64 {
        match self.store.get_item(key) {
            Ok(None) => 0,
            Ok(Some(raw)) if raw.is_empty() => 0,
            Ok(Some(raw)) => raw.trim().parse::<u64>().unwrap_or_else(|_| {
                log::warn!("ignoring unparsable counter {key}={raw:?}");
                0
            }),
            Err(err) => {
                log::warn!("counter read failed for {key}: {err}");
                0
            }
        }
    }

    fn write_count(&self, key: &str, value: u64) {
        if let Err(err) = self.store.set_item(key, &value.to_string()) {
            log::warn!("counter write failed for {key}: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::storage::MemoryStore;
    use chrono::NaiveDate;
    use std::cell::Cell;
    use thiserror::Error;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    fn fixture() -> (CounterStore<MemoryStore, FixedClock>, MemoryStore, FixedClock) {
        let backend = MemoryStore::new();
        let clock = FixedClock::new(day(1));
        let store = CounterStore::new(backend.clone(), StorageKeys::default(), clock.clone());
        (store, backend, clock)
    }

    #[derive(Debug, Error)]
    #[error("storage unavailable")]
    struct Unavailable;

    /// Backend whose reads and writes always fail.
    #[derive(Default)]
    struct BrokenStore {
        writes: Cell<usize>,
    }

    impl KeyValueStore for BrokenStore {
        type Error = Unavailable;

        fn get_item(&self, _key: &str) -> Result<Option<String>, Self::Error> {
            Err(Unavailable)
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<(), Self::Error> {
            self.writes.set(self.writes.get() + 1);
            Err(Unavailable)
        }
    }

    #[test]
    fn empty_storage_reads_as_zero() {
        let (store, _, _) = fixture();
        assert_eq!(store.snapshot(), CounterSnapshot::default());
    }

    #[test]
    fn add_then_add_then_reset() {
        let (store, backend, _) = fixture();
        assert_eq!(
            store.add_cards(10),
            CounterSnapshot {
                daily_total: 10,
                grand_total: 10
            }
        );
        assert_eq!(
            store.add_cards(5),
            CounterSnapshot {
                daily_total: 15,
                grand_total: 15
            }
        );
        assert_eq!(
            store.reset_daily(),
            CounterSnapshot {
                daily_total: 0,
                grand_total: 15
            }
        );
        assert_eq!(backend.raw("cardkkang:v1:day:2024-05-01").as_deref(), Some("0"));
        assert_eq!(backend.raw("cardkkang:v1:total").as_deref(), Some("15"));
    }

    #[test]
    fn adding_zero_changes_nothing() {
        let (store, _, _) = fixture();
        let before = store.add_cards(7);
        assert_eq!(store.add_cards(0), before);
    }

    #[test]
    fn rollover_starts_a_fresh_daily_key() {
        let (store, backend, clock) = fixture();
        store.add_cards(10);
        clock.advance_days(1);
        let after = store.add_cards(3);
        assert_eq!(after.daily_total, 3);
        assert_eq!(after.grand_total, 13);
        assert_eq!(backend.raw("cardkkang:v1:day:2024-05-01").as_deref(), Some("10"));
        assert_eq!(backend.raw("cardkkang:v1:day:2024-05-02").as_deref(), Some("3"));
    }

    #[test]
    fn corrupt_values_count_as_zero() {
        let (store, backend, _) = fixture();
        backend.insert_raw("cardkkang:v1:total", "lots");
        backend.insert_raw("cardkkang:v1:day:2024-05-01", "-4");
        let snap = store.add_cards(2);
        assert_eq!(snap.daily_total, 2);
        assert_eq!(snap.grand_total, 2);
    }

    #[test]
    fn failing_backend_degrades_without_error() {
        let backend = BrokenStore::default();
        let store = CounterStore::new(&backend, StorageKeys::default(), FixedClock::new(day(9)));
        let snap = store.add_cards(10);
        assert_eq!(snap.daily_total, 10);
        assert_eq!(snap.grand_total, 10);
        assert_eq!(store.reset_daily().daily_total, 0);
        assert!(backend.writes.get() >= 2);
    }

    /// Backend that reads normally but can be switched to reject writes.
    #[derive(Default)]
    struct QuotaStore {
        inner: MemoryStore,
        full: Cell<bool>,
    }

    #[derive(Debug, Error)]
    #[error("quota exceeded")]
    struct QuotaExceeded;

    impl KeyValueStore for QuotaStore {
        type Error = QuotaExceeded;

        fn get_item(&self, key: &str) -> Result<Option<String>, Self::Error> {
            Ok(self.inner.raw(key))
        }

        fn set_item(&self, key: &str, value: &str) -> Result<(), Self::Error> {
            if self.full.get() {
                return Err(QuotaExceeded);
            }
            self.inner.insert_raw(key, value);
            Ok(())
        }
    }

    #[test]
    fn reset_reports_zero_when_the_write_is_rejected() {
        let backend = QuotaStore::default();
        let store = CounterStore::new(&backend, StorageKeys::default(), FixedClock::new(day(3)));
        store.add_cards(15);
        backend.full.set(true);

        let reset = store.reset_daily();
        assert_eq!(
            reset,
            CounterSnapshot {
                daily_total: 0,
                grand_total: 15
            }
        );
        // The stored value is unchanged; the next read sees it again.
        assert_eq!(
            backend.inner.raw("cardkkang:v1:day:2024-05-03").as_deref(),
            Some("15")
        );
    }

    #[test]
    fn totals_saturate_instead_of_wrapping() {
        let (store, backend, _) = fixture();
        backend.insert_raw("cardkkang:v1:total", u64::MAX.to_string());
        assert_eq!(store.add_cards(5).grand_total, u64::MAX);
    }

    #[test]
    fn milestone_progress_matches_display_rules() {
        let zero = MilestoneProgress::from_total(0);
        assert_eq!((zero.progress, zero.percent, zero.to_next), (0, 0, 100));

        let mid = MilestoneProgress::from_total(137);
        assert_eq!((mid.progress, mid.percent, mid.to_next), (37, 37, 63));

        let edge = MilestoneProgress::from_total(199);
        assert_eq!((edge.progress, edge.percent, edge.to_next), (99, 99, 1));

        let reached = CounterSnapshot {
            daily_total: 0,
            grand_total: 300,
        }
        .milestone();
        assert_eq!(reached.to_next, 100);
    }
}
