#[cfg(target_os = "linux")]
use quanta::Instant;

#[cfg(not(target_os = "linux"))]
use std::time::Instant;

use crate::subject::Subject;

/// Records the elapsed wall time for one subject when dropped.
pub struct MeasurementGuard {
    subject: Subject,
    start: Instant,
}

impl MeasurementGuard {
    #[inline]
    pub fn new(subject: Subject) -> Self {
        Self {
            subject,
            start: Instant::now(),
        }
    }
}

impl Drop for MeasurementGuard {
    #[inline]
    fn drop(&mut self) {
        let dur = self.start.elapsed();
        super::state::global().record(self.subject, dur.as_nanos() as u64);
    }
}
