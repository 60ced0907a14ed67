use std::sync::atomic::{AtomicU64, Ordering};

use crate::output::{StatsSnapshot, TallyReport};
use crate::subject::Subject;

/// Running counters for a single subject.
///
/// All updates use `Relaxed` ordering - these are sampling metrics, not
/// synchronisation. `fetch_add` wraps on overflow.
#[derive(Debug)]
pub struct SubjectStats {
    accumulated_ns: AtomicU64,
    count: AtomicU64,
}

impl SubjectStats {
    pub const fn new() -> Self {
        Self {
            accumulated_ns: AtomicU64::new(0),
            count: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn record(&self, ns: u64) {
        self.accumulated_ns.fetch_add(ns, Ordering::Relaxed);
        self.count.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn accumulated_ns(&self) -> u64 {
        self.accumulated_ns.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn count(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }

    pub fn reset(&self) {
        self.accumulated_ns.store(0, Ordering::Relaxed);
        self.count.store(0, Ordering::Relaxed);
    }
}

impl Default for SubjectStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Tally storage with one slot per registered subject, indexed by ordinal.
///
/// `const`-constructible so it can back the process-wide static; tests and
/// embedders can also hold private stores.
#[derive(Debug)]
pub struct TallyStore {
    stats: [SubjectStats; Subject::COUNT],
}

impl TallyStore {
    pub const fn new() -> Self {
        Self {
            stats: [const { SubjectStats::new() }; Subject::COUNT],
        }
    }

    #[inline]
    fn slot(&self, subject: Subject) -> &SubjectStats {
        &self.stats[subject.ordinal() as usize]
    }

    #[inline]
    pub fn record(&self, subject: Subject, ns: u64) {
        self.slot(subject).record(ns);
    }

    #[inline]
    pub fn accumulated_metric(&self, subject: Subject) -> u64 {
        self.slot(subject).accumulated_ns()
    }

    #[inline]
    pub fn counter(&self, subject: Subject) -> u64 {
        self.slot(subject).count()
    }

    /// Ordinal-keyed recording. Unknown ordinals are a silent no-op; this
    /// surface exists for callers that carry the subject as a raw integer.
    #[inline]
    pub fn record_by_ordinal(&self, subject: u64, ns: u64) {
        if let Some(subject) = Subject::from_ordinal(subject) {
            self.record(subject, ns);
        }
    }

    #[inline]
    pub fn accumulated_metric_by_ordinal(&self, subject: u64) -> u64 {
        Subject::from_ordinal(subject)
            .map(|s| self.accumulated_metric(s))
            .unwrap_or(0)
    }

    #[inline]
    pub fn counter_by_ordinal(&self, subject: u64) -> u64 {
        Subject::from_ordinal(subject)
            .map(|s| self.counter(s))
            .unwrap_or(0)
    }

    /// Zeroes one subject's counters. Not part of the original surface;
    /// added for per-session measurement windows.
    pub fn reset(&self, subject: Subject) {
        self.slot(subject).reset();
    }

    pub fn reset_all(&self) {
        for stats in &self.stats {
            stats.reset();
        }
    }

    pub fn snapshot(&self, subject: Subject) -> StatsSnapshot {
        let slot = self.slot(subject);
        StatsSnapshot::new(subject, slot.accumulated_ns(), slot.count())
    }

    pub fn report(&self) -> TallyReport {
        TallyReport {
            subjects: Subject::ALL.iter().map(|&s| self.snapshot(s)).collect(),
        }
    }
}

impl Default for TallyStore {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL_STORE: TallyStore = TallyStore::new();

/// Process-wide store backing the free functions and [`MeasurementGuard`].
///
/// [`MeasurementGuard`]: crate::MeasurementGuard
pub fn global() -> &'static TallyStore {
    &GLOBAL_STORE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replay_sums_and_counts() {
        let store = TallyStore::new();
        let values = [5u64, 17, 0, 123_456, 1];

        for v in values {
            store.record(Subject::TypedStoreSetValue, v);
        }

        assert_eq!(
            store.accumulated_metric(Subject::TypedStoreSetValue),
            values.iter().sum::<u64>()
        );
        assert_eq!(
            store.counter(Subject::TypedStoreSetValue),
            values.len() as u64
        );
    }

    #[test]
    fn never_recorded_reads_zero() {
        let store = TallyStore::new();
        assert_eq!(store.accumulated_metric(Subject::RawStoreFromTSD), 0);
        assert_eq!(store.counter(Subject::RawStoreFromTSD), 0);
    }

    #[test]
    fn subjects_are_isolated() {
        let store = TallyStore::new();
        store.record(Subject::RawStoreSubscriptSet, 42);

        for &subject in Subject::ALL {
            if subject == Subject::RawStoreSubscriptSet {
                continue;
            }
            assert_eq!(store.accumulated_metric(subject), 0, "{subject}");
            assert_eq!(store.counter(subject), 0, "{subject}");
        }
    }

    #[test]
    fn unknown_ordinal_is_a_no_op() {
        let store = TallyStore::new();
        let bad = Subject::COUNT as u64;

        store.record_by_ordinal(bad, 999);
        store.record_by_ordinal(u64::MAX, 999);

        assert_eq!(store.accumulated_metric_by_ordinal(bad), 0);
        assert_eq!(store.counter_by_ordinal(bad), 0);
        for &subject in Subject::ALL {
            assert_eq!(store.counter(subject), 0, "{subject}");
        }
    }

    #[test]
    fn known_ordinal_dispatches() {
        let store = TallyStore::new();
        let ordinal = Subject::RawStoreCurrent.ordinal();

        store.record_by_ordinal(ordinal, 300);

        assert_eq!(store.accumulated_metric_by_ordinal(ordinal), 300);
        assert_eq!(store.counter_by_ordinal(ordinal), 1);
        assert_eq!(store.accumulated_metric(Subject::RawStoreCurrent), 300);
    }

    #[test]
    fn reads_are_idempotent() {
        let store = TallyStore::new();
        store.record(Subject::Control, 777);

        let first = store.accumulated_metric(Subject::Control);
        let second = store.accumulated_metric(Subject::Control);
        assert_eq!(first, second);
        assert_eq!(store.counter(Subject::Control), store.counter(Subject::Control));
    }

    #[test]
    fn reset_zeroes_counters() {
        let store = TallyStore::new();
        store.record(Subject::RawStoreSubscriptGet, 100);
        store.record(Subject::Control, 100);

        store.reset(Subject::RawStoreSubscriptGet);
        assert_eq!(store.accumulated_metric(Subject::RawStoreSubscriptGet), 0);
        assert_eq!(store.counter(Subject::RawStoreSubscriptGet), 0);
        assert_eq!(store.counter(Subject::Control), 1);

        store.reset_all();
        assert_eq!(store.counter(Subject::Control), 0);
    }

    #[test]
    fn concurrent_recording_sums_exactly() {
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(TallyStore::new());
        let threads = 8;
        let per_thread = 1_000u64;

        let handles: Vec<_> = (0..threads)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for _ in 0..per_thread {
                        store.record(Subject::RawStoreOnRootScopeEnd, 3);
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        let expected = threads as u64 * per_thread;
        assert_eq!(store.counter(Subject::RawStoreOnRootScopeEnd), expected);
        assert_eq!(
            store.accumulated_metric(Subject::RawStoreOnRootScopeEnd),
            expected * 3
        );
    }

    #[test]
    fn report_covers_all_subjects_in_order() {
        let store = TallyStore::new();
        store.record(Subject::Control, 600);

        let report = store.report();
        assert_eq!(report.subjects.len(), Subject::COUNT);
        for (snap, &subject) in report.subjects.iter().zip(Subject::ALL) {
            assert_eq!(snap.subject, subject);
        }
        assert_eq!(report.subjects[0].accumulated_ns, 600);
    }
}
