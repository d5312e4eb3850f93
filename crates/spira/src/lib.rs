//! Release identifier for the Spira resource-mapping library.
//!
//! [`VERSION`] is the single source of truth. Use [`version_str()`] for
//! display and [`VersionInfo::triple()`] for comparisons.

#[macro_use]
extern crate lazy_static;

mod version;

pub use version::{EXTRA, MAJOR, MINOR, PATCH, VERSION, VersionError, VersionInfo};

/// Version string such as `spira v1.2.3`.
pub const SPIRA_VERSION_STRING: &str =
    concat!(env!("CARGO_PKG_NAME"), " v", env!("CARGO_PKG_VERSION"));

lazy_static! {
    static ref VERSION_STRING: String = VERSION.to_string();
}

/// Returns the canonical string for [`VERSION`], such as `0.0.13`.
///
/// The string is built on first use and shared afterwards.
pub fn version_str() -> &'static str {
    &VERSION_STRING
}
