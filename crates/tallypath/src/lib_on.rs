mod guard;
mod state;

pub use guard::MeasurementGuard;
pub use state::{global, SubjectStats, TallyStore};

use crate::output::TallyReport;
use crate::subject::Subject;

/// Measures a code block and tallies its duration under `$subject`.
///
/// ```
/// use tallypath::Subject;
///
/// let value = tallypath::measure_block!(Subject::Control, {
///     40 + 2
/// });
/// assert_eq!(value, 42);
/// ```
#[macro_export]
macro_rules! measure_block {
    ($subject:expr, $expr:expr) => {{
        let _guard = $crate::MeasurementGuard::new($subject);

        $expr
    }};
}

/// Folds `ns` into `subject`'s accumulated total and increments its count.
///
/// Infallible and non-blocking; safe to call from hot paths.
#[inline]
pub fn record_measurement(subject: Subject, ns: u64) {
    state::global().record(subject, ns);
}

/// Returns `subject`'s accumulated nanosecond total, 0 if never recorded.
#[inline]
pub fn accumulated_metric_for(subject: Subject) -> u64 {
    state::global().accumulated_metric(subject)
}

/// Returns how many times `subject` was recorded, 0 if never recorded.
#[inline]
pub fn counter_for(subject: Subject) -> u64 {
    state::global().counter(subject)
}

/// Ordinal-keyed variant of [`record_measurement`]. Unknown ordinals are a
/// silent no-op.
#[inline]
pub fn record_measurement_by_ordinal(subject: u64, ns: u64) {
    state::global().record_by_ordinal(subject, ns);
}

/// Ordinal-keyed variant of [`accumulated_metric_for`]. Unknown ordinals
/// yield 0.
#[inline]
pub fn accumulated_metric_by_ordinal(subject: u64) -> u64 {
    state::global().accumulated_metric_by_ordinal(subject)
}

/// Ordinal-keyed variant of [`counter_for`]. Unknown ordinals yield 0.
#[inline]
pub fn counter_by_ordinal(subject: u64) -> u64 {
    state::global().counter_by_ordinal(subject)
}

/// Snapshots every subject from the process-wide store.
pub fn report() -> TallyReport {
    state::global().report()
}
