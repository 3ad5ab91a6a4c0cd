use regex::Regex;
use std::fmt;

/// Semantic version with an optional beta pre-release ordinal
///
/// A version with `beta: None` is a stable release. Two versions sharing the
/// same `(major, minor, patch)` triple but differing in beta state are
/// distinct releases; stable logically follows the highest beta of the triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SemanticVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub beta: Option<u32>,
}

impl SemanticVersion {
    /// Create a new stable version
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        SemanticVersion {
            major,
            minor,
            patch,
            beta: None,
        }
    }

    /// Create a new beta version
    pub fn beta(major: u32, minor: u32, patch: u32, beta: u32) -> Self {
        SemanticVersion {
            major,
            minor,
            patch,
            beta: Some(beta),
        }
    }

    /// Parse a tag string into a version (e.g. "v1.2.3" or "v1.2.3-beta.4")
    ///
    /// Returns `None` for anything that does not match the grammar exactly.
    /// Callers treat unparsable tags as non-version tags to be ignored, so
    /// this never reports an error.
    pub fn parse(tag: &str) -> Option<Self> {
        let re = Regex::new(r"^v?(\d+)\.(\d+)\.(\d+)(?:-beta\.(\d+))?$").ok()?;
        let captures = re.captures(tag)?;

        let major = captures.get(1)?.as_str().parse::<u32>().ok()?;
        let minor = captures.get(2)?.as_str().parse::<u32>().ok()?;
        let patch = captures.get(3)?.as_str().parse::<u32>().ok()?;
        let beta = match captures.get(4) {
            Some(m) => Some(m.as_str().parse::<u32>().ok()?),
            None => None,
        };

        Some(SemanticVersion {
            major,
            minor,
            patch,
            beta,
        })
    }

    /// Render the version as a tag name
    ///
    /// Always emits `v{major}.{minor}.{patch}`; appends `-beta.{beta}` iff
    /// `as_beta` is set. Asking for the beta rendering of a version without a
    /// beta ordinal is a caller contract violation.
    pub fn format(&self, as_beta: bool) -> String {
        if as_beta {
            let beta = self
                .beta
                .expect("beta rendering requested for a version without a beta ordinal");
            format!("v{}.{}.{}-beta.{}", self.major, self.minor, self.patch, beta)
        } else {
            format!("v{}.{}.{}", self.major, self.minor, self.patch)
        }
    }

    /// Whether this version shares the `(major, minor, patch)` triple with another
    pub fn same_triple(&self, other: &SemanticVersion) -> bool {
        self.major == other.major && self.minor == other.minor && self.patch == other.patch
    }

    /// Next minor version (patch reset, beta cleared)
    pub fn bump_minor(&self) -> Self {
        SemanticVersion::new(self.major, self.minor + 1, 0)
    }

    /// Next patch version (beta cleared)
    pub fn bump_patch(&self) -> Self {
        SemanticVersion::new(self.major, self.minor, self.patch + 1)
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(beta) = self.beta {
            write!(f, "-beta.{}", beta)?;
        }
        Ok(())
    }
}
