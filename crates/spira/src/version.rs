use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Major version number of this release.
pub const MAJOR: u32 = 0;
/// Minor version number of this release.
pub const MINOR: u32 = 0;
/// Patch version number of this release.
pub const PATCH: u32 = 13;
/// Pre-release or build label of this release, if any.
pub const EXTRA: Option<&str> = None;

/// Version of this release of Spira.
pub const VERSION: VersionInfo = VersionInfo::new(MAJOR, MINOR, PATCH, EXTRA);

/// Release identifier, in the form `major.minor.patch[.extra]`.
///
/// An empty `extra` is never stored, so `0.0.13` with label `""` is the same
/// version as `0.0.13` with no label. Deserialization goes through the same
/// label validation as [`VersionInfo::try_with_extra()`].
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq, Hash)]
#[serde(try_from = "RawVersionInfo")]
pub struct VersionInfo {
    major: u32,
    minor: u32,
    patch: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    extra: Option<Cow<'static, str>>,
}

/// Unvalidated [`VersionInfo`], as it appears in serialized data.
#[derive(Deserialize)]
struct RawVersionInfo {
    major: u32,
    minor: u32,
    patch: u32,
    #[serde(default)]
    extra: Option<String>,
}
impl TryFrom<RawVersionInfo> for VersionInfo {
    type Error = VersionError;

    fn try_from(raw: RawVersionInfo) -> Result<Self, Self::Error> {
        let version = VersionInfo::from((raw.major, raw.minor, raw.patch));
        match raw.extra {
            Some(label) => version.try_with_extra(label),
            None => Ok(version),
        }
    }
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (major, minor, patch) = self.triple();
        write!(f, "{major}.{minor}.{patch}")?;
        if let Some(extra) = self.extra() {
            write!(f, ".{extra}")?;
        }
        Ok(())
    }
}

impl PartialOrd for VersionInfo {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
/// Triples compare first. A labelled build precedes the release it labels,
/// and two labels compare segment by segment.
impl Ord for VersionInfo {
    fn cmp(&self, other: &Self) -> Ordering {
        self.triple()
            .cmp(&other.triple())
            .then_with(|| match (self.extra(), other.extra()) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(a), Some(b)) => cmp_labels(a, b),
            })
    }
}

/// Compares two labels one dot-separated segment at a time.
///
/// - Numeric segments compare as numbers.
/// - Numeric segments precede alphanumeric ones.
/// - Alphanumeric segments compare lexicographically.
/// - If one label is a prefix of the other, the shorter one comes first.
fn cmp_labels(a: &str, b: &str) -> Ordering {
    let mut a_segments = a.split('.');
    let mut b_segments = b.split('.');
    loop {
        let ordering = match (a_segments.next(), b_segments.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => cmp_segments(x, y),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
}

fn cmp_segments(a: &str, b: &str) -> Ordering {
    let is_numeric = |s: &str| s.bytes().all(|c| c.is_ascii_digit());
    match (is_numeric(a), is_numeric(b)) {
        // Compare by length after stripping leading zeros, so arbitrarily
        // long numbers never overflow. Leading zeros break ties so that the
        // ordering agrees with equality.
        (true, true) => {
            let a_digits = a.trim_start_matches('0');
            let b_digits = b.trim_start_matches('0');
            a_digits
                .len()
                .cmp(&b_digits.len())
                .then_with(|| a_digits.cmp(b_digits))
                .then_with(|| a.cmp(b))
        }
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.cmp(b),
    }
}

impl From<&VersionInfo> for [u32; 3] {
    fn from(version: &VersionInfo) -> Self {
        version.to_array()
    }
}

impl From<(u32, u32, u32)> for VersionInfo {
    fn from((major, minor, patch): (u32, u32, u32)) -> Self {
        Self::new(major, minor, patch, None)
    }
}

impl VersionInfo {
    /// Constructs a version from its components.
    ///
    /// An empty `extra` is stored as no label at all.
    pub const fn new(major: u32, minor: u32, patch: u32, extra: Option<&'static str>) -> Self {
        let extra = match extra {
            Some(s) if !s.is_empty() => Some(Cow::Borrowed(s)),
            _ => None,
        };
        Self {
            major,
            minor,
            patch,
            extra,
        }
    }

    /// Returns a copy of the version with a pre-release or build label.
    ///
    /// The label may contain ASCII alphanumerics, `-`, and `.`, with dots only
    /// between non-empty segments. An empty label removes any existing label.
    pub fn try_with_extra(self, label: impl Into<String>) -> Result<Self, VersionError> {
        let label = label.into();
        if let Err(reason) = validate_extra(&label) {
            return Err(VersionError::InvalidExtra { label, reason });
        }
        let extra = (!label.is_empty()).then_some(Cow::Owned(label));
        Ok(Self { extra, ..self })
    }

    /// Major version number.
    pub const fn major(&self) -> u32 {
        self.major
    }
    /// Minor version number.
    pub const fn minor(&self) -> u32 {
        self.minor
    }
    /// Patch version number.
    pub const fn patch(&self) -> u32 {
        self.patch
    }
    /// Pre-release or build label, if there is one.
    pub fn extra(&self) -> Option<&str> {
        self.extra.as_deref()
    }

    /// Returns `(major, minor, patch)`. The label is not included.
    pub const fn triple(&self) -> (u32, u32, u32) {
        (self.major, self.minor, self.patch)
    }
    /// Returns `[major, minor, patch]`. The label is not included.
    pub const fn to_array(&self) -> [u32; 3] {
        [self.major, self.minor, self.patch]
    }

    /// Returns whether the version carries a pre-release or build label.
    pub fn is_prerelease(&self) -> bool {
        self.extra().is_some()
    }
}

fn validate_extra(label: &str) -> Result<(), &'static str> {
    if label.is_empty() {
        return Ok(());
    }
    if let Some(c) = label
        .chars()
        .find(|&c| !(c.is_ascii_alphanumeric() || c == '-' || c == '.'))
    {
        return Err(if c.is_whitespace() {
            "contains whitespace"
        } else {
            "contains a character other than ASCII alphanumerics, `-`, and `.`"
        });
    }
    if label.split('.').any(str::is_empty) {
        return Err("contains an empty dot-separated segment");
    }
    Ok(())
}

/// Error produced when constructing a [`VersionInfo`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    /// Pre-release or build label is malformed
    #[error("invalid version label {label:?}: {reason}")]
    InvalidExtra {
        /// Label that was rejected.
        label: String,
        /// Why it was rejected.
        reason: &'static str,
    },
}

#[cfg(test)]
impl proptest::arbitrary::Arbitrary for VersionInfo {
    type Parameters = ();

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        use proptest::prelude::Strategy;

        (
            proptest::prelude::any::<(u32, u32, u32)>(),
            proptest::option::of("[a-z0-9][a-z0-9-]{0,8}(\\.[a-z0-9-]{1,4}){0,2}"),
        )
            .prop_map(|(triple, extra)| match extra {
                Some(label) => VersionInfo::from(triple)
                    .try_with_extra(label)
                    .unwrap_or_else(|_| VersionInfo::from(triple)),
                None => VersionInfo::from(triple),
            })
            .boxed()
    }

    type Strategy = proptest::strategy::BoxedStrategy<Self>;
}
