use crate::output::{StatsSnapshot, TallyReport};
use crate::subject::Subject;

#[macro_export]
macro_rules! measure_block {
    ($subject:expr, $expr:expr) => {{
        $expr
    }};
}

pub struct MeasurementGuard {}

impl MeasurementGuard {
    #[inline]
    pub fn new(_subject: Subject) -> Self {
        Self {}
    }
}

pub struct TallyStore {}

impl TallyStore {
    pub const fn new() -> Self {
        Self {}
    }

    #[inline]
    pub fn record(&self, _subject: Subject, _ns: u64) {}

    #[inline]
    pub fn accumulated_metric(&self, _subject: Subject) -> u64 {
        0
    }

    #[inline]
    pub fn counter(&self, _subject: Subject) -> u64 {
        0
    }

    #[inline]
    pub fn record_by_ordinal(&self, _subject: u64, _ns: u64) {}

    #[inline]
    pub fn accumulated_metric_by_ordinal(&self, _subject: u64) -> u64 {
        0
    }

    #[inline]
    pub fn counter_by_ordinal(&self, _subject: u64) -> u64 {
        0
    }

    pub fn reset(&self, _subject: Subject) {}

    pub fn reset_all(&self) {}

    pub fn snapshot(&self, subject: Subject) -> StatsSnapshot {
        StatsSnapshot::new(subject, 0, 0)
    }

    pub fn report(&self) -> TallyReport {
        empty_report()
    }
}

impl Default for TallyStore {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL_STORE: TallyStore = TallyStore::new();

pub fn global() -> &'static TallyStore {
    &GLOBAL_STORE
}

#[inline]
pub fn record_measurement(_subject: Subject, _ns: u64) {}

#[inline]
pub fn accumulated_metric_for(_subject: Subject) -> u64 {
    0
}

#[inline]
pub fn counter_for(_subject: Subject) -> u64 {
    0
}

#[inline]
pub fn record_measurement_by_ordinal(_subject: u64, _ns: u64) {}

#[inline]
pub fn accumulated_metric_by_ordinal(_subject: u64) -> u64 {
    0
}

#[inline]
pub fn counter_by_ordinal(_subject: u64) -> u64 {
    0
}

pub fn report() -> TallyReport {
    empty_report()
}

fn empty_report() -> TallyReport {
    TallyReport {
        subjects: Subject::ALL
            .iter()
            .map(|&s| StatsSnapshot::new(s, 0, 0))
            .collect(),
    }
}
