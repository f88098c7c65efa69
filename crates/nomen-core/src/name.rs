//! # Labels and Names
//!
//! Newtypes for the two name-shaped values in the registry: a [`Label`]
//! is a single normalized segment, a [`Name`] is an ordered sequence of
//! labels read left-to-right, most-specific first
//! (`["sub", "example", "eth"]` for `sub.example.eth`).
//!
//! ## Invariants
//!
//! - Every `Label` is non-empty, normalized, and free of the `.` separator.
//! - Every `Name` used for on-chain operations terminates in a recognized
//!   top-level label; [`Name::fully_qualified`] appends the default when
//!   the caller omits one.
//! - The root is the empty `Name` — zero labels, hashing to the zero node.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::NameError;
use crate::normalize::normalize;

/// The top-level label appended when a caller omits one.
pub const DEFAULT_TLD: &str = "eth";

/// Top-level labels the registry recognizes. Names ending in any of
/// these are treated as fully qualified.
pub const RECOGNIZED_TLDS: [&str; 3] = ["eth", "reverse", "test"];

/// A single normalized name segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Label(String);

impl Label {
    /// Normalize and validate a single label.
    ///
    /// # Errors
    ///
    /// Returns [`NameError::InvalidName`] when normalization fails, when
    /// the label normalizes to empty, or when it contains the separator
    /// (some full-width code points map to `.` under UTS-46).
    pub fn new(raw: &str) -> Result<Self, NameError> {
        let normalized = normalize(raw)?;
        if normalized.is_empty() {
            return Err(NameError::InvalidName {
                name: raw.to_string(),
                reason: "label normalized to empty".to_string(),
            });
        }
        if normalized.contains('.') {
            return Err(NameError::InvalidName {
                name: raw.to_string(),
                reason: "label must not contain a separator".to_string(),
            });
        }
        Ok(Self(normalized))
    }

    /// The canonical text of this label.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A normalized dotted name: ordered labels, most-specific first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Name(Vec<Label>);

impl Name {
    /// The registry root — zero labels.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Parse and normalize a dotted name.
    ///
    /// The empty string parses to the root. Every segment must survive
    /// normalization as a non-empty label.
    ///
    /// # Errors
    ///
    /// Returns [`NameError::InvalidName`] when normalization fails or any
    /// segment is empty (`"a..b"`, leading/trailing dots).
    pub fn parse(raw: &str) -> Result<Self, NameError> {
        let normalized = normalize(raw)?;
        if normalized.is_empty() {
            return Ok(Self::root());
        }
        let labels = normalized
            .split('.')
            .map(|segment| {
                if segment.is_empty() {
                    Err(NameError::InvalidName {
                        name: raw.to_string(),
                        reason: "name contains an empty label".to_string(),
                    })
                } else {
                    // Segments of a normalized name are already canonical.
                    Ok(Label(segment.to_string()))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self(labels))
    }

    /// Build a name from already-validated labels, most-specific first.
    pub fn from_labels(labels: Vec<Label>) -> Self {
        Self(labels)
    }

    /// The labels of this name, most-specific first.
    pub fn labels(&self) -> &[Label] {
        &self.0
    }

    /// Whether this is the registry root.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of labels.
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// The least-specific (top-level) label, if any.
    pub fn tld(&self) -> Option<&Label> {
        self.0.last()
    }

    /// Qualify this name with the default top-level label when it does
    /// not already end in a recognized one. The root stays the root.
    pub fn fully_qualified(&self) -> Name {
        match self.tld() {
            None => Self::root(),
            Some(last) if RECOGNIZED_TLDS.contains(&last.as_str()) => self.clone(),
            Some(_) => {
                let mut labels = self.0.clone();
                labels.push(Label(DEFAULT_TLD.to_string()));
                Self(labels)
            }
        }
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for label in &self.0 {
            if !first {
                f.write_str(".")?;
            }
            f.write_str(label.as_str())?;
            first = false;
        }
        Ok(())
    }
}
