//! Logging shim
//!
//! Enable with `--features defmt`. Without it every macro is a no-op so
//! host builds need no global logger.

// When defmt is enabled, re-export its macros.
#[cfg(feature = "defmt")]
#[allow(unused_imports)]
pub(crate) use defmt::{debug, info, warn};

// When defmt is disabled, swallow the arguments.
#[cfg(not(feature = "defmt"))]
macro_rules! debug_noop {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "defmt"))]
macro_rules! info_noop {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "defmt"))]
macro_rules! warn_noop {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "defmt"))]
#[allow(unused_imports)]
pub(crate) use debug_noop as debug;
#[cfg(not(feature = "defmt"))]
#[allow(unused_imports)]
pub(crate) use info_noop as info;
#[cfg(not(feature = "defmt"))]
pub(crate) use warn_noop as warn;
