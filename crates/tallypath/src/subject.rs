use serde::{Serialize, Serializer};
use std::fmt;

/// Expands the subject registry into the [`Subject`] enum and its lookup
/// tables. The list passed here is the single source of truth: adding or
/// removing a subject means editing exactly this invocation.
macro_rules! subjects {
    ($($name:ident),+ $(,)?) => {
        /// Closed set of measurement subjects.
        ///
        /// Ordinals follow registry order and are only used for dispatch;
        /// they are never persisted or compared across versions.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[repr(u64)]
        pub enum Subject {
            $($name),+
        }

        impl Subject {
            /// All subjects, in registry order.
            pub const ALL: &'static [Subject] = &[$(Subject::$name),+];

            /// Number of registered subjects.
            pub const COUNT: usize = Self::ALL.len();

            pub const fn name(self) -> &'static str {
                match self {
                    $(Subject::$name => stringify!($name)),+
                }
            }
        }
    };
}

subjects! {
    Control,
    ImplicitsWithUnsafeKeys,
    RawStoreOnRootScopeCreation,
    RawStoreOnRootScopeEnd,
    RawStoreSubscriptSet,
    RawStoreSubscriptGet,
    RawStoreCurrent,
    RawStoreFromTSD,
    TypedStoreSubscriptGet,
    TypedStoreSetValue,
}

impl Subject {
    #[inline]
    pub const fn ordinal(self) -> u64 {
        self as u64
    }

    /// Looks up a subject by its registry ordinal. Out-of-range values
    /// yield `None`; callers dispatching on raw ordinals treat that as
    /// "record nothing, read zero".
    pub fn from_ordinal(ordinal: u64) -> Option<Subject> {
        Self::ALL.iter().copied().find(|s| s.ordinal() == ordinal)
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Serialize for Subject {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}
