//! Per-subject duration tallies for a fixed, compile-time subject registry.
//! Record nanosecond samples for any registered subject and read back its
//! running total and sample count, with zero setup and no failure modes.
//!
//! ```
//! # #[cfg(not(feature = "tallypath-off"))]
//! # {
//! use tallypath::{accumulated_metric_for, counter_for, record_measurement, Subject};
//!
//! record_measurement(Subject::Control, 100);
//! record_measurement(Subject::Control, 200);
//! record_measurement(Subject::Control, 300);
//!
//! assert_eq!(counter_for(Subject::Control), 3);
//! assert_eq!(accumulated_metric_for(Subject::Control), 600);
//! # }
//! ```

pub mod subject;
pub use subject::Subject;

pub(crate) mod output;
pub use output::{format_duration, StatsSnapshot, TallyReport};

#[cfg(not(feature = "tallypath-off"))]
#[doc(inline)]
pub use lib_on::*;
#[cfg(not(feature = "tallypath-off"))]
mod lib_on;

// When measuring is disabled with the tallypath-off feature we import methods from lib_off, which are all no-op
#[cfg(feature = "tallypath-off")]
#[doc(inline)]
pub use lib_off::*;
#[cfg(feature = "tallypath-off")]
mod lib_off;
