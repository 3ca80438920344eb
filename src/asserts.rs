//! Leveled assertion macros. The active level is raised when testing or when the
//! `debug-checks` feature is enabled, so that expensive consistency checks only
//! run in builds that ask for them.

#[cfg(all(not(test), not(feature = "debug-checks")))]
pub const BOOLPROP_ASSERT_LEVEL_DEFINITION: u8 = BOOLPROP_ASSERT_SIMPLE;

#[cfg(any(test, feature = "debug-checks"))]
pub const BOOLPROP_ASSERT_LEVEL_DEFINITION: u8 = BOOLPROP_ASSERT_EXTREME;

pub const BOOLPROP_ASSERT_SIMPLE: u8 = 1;
pub const BOOLPROP_ASSERT_MODERATE: u8 = 2;
pub const BOOLPROP_ASSERT_ADVANCED: u8 = 3;
pub const BOOLPROP_ASSERT_EXTREME: u8 = 4;

#[macro_export]
#[doc(hidden)]
macro_rules! boolprop_assert_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::BOOLPROP_ASSERT_LEVEL_DEFINITION >= $crate::asserts::BOOLPROP_ASSERT_SIMPLE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! boolprop_assert_eq_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::BOOLPROP_ASSERT_LEVEL_DEFINITION >= $crate::asserts::BOOLPROP_ASSERT_SIMPLE {
            assert_eq!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! boolprop_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::BOOLPROP_ASSERT_LEVEL_DEFINITION >= $crate::asserts::BOOLPROP_ASSERT_MODERATE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! boolprop_assert_advanced {
    ($($arg:tt)*) => {
        if $crate::asserts::BOOLPROP_ASSERT_LEVEL_DEFINITION >= $crate::asserts::BOOLPROP_ASSERT_ADVANCED {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! boolprop_assert_extreme {
    ($($arg:tt)*) => {
        if $crate::asserts::BOOLPROP_ASSERT_LEVEL_DEFINITION >= $crate::asserts::BOOLPROP_ASSERT_EXTREME {
            assert!($($arg)*);
        }
    };
}
