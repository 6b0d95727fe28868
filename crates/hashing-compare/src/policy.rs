//! String-comparison policies applied to textual values.

use std::fmt::{self, Display};
use std::str::FromStr;

use hashing_core::errors::{ErrorInfo, HashingError};
use hashing_core::native_hash;
use serde::{Deserialize, Serialize};

/// Stable code raised when a policy name cannot be parsed.
pub const UNKNOWN_POLICY: &str = "H002";

/// Rules used to compare and hash text.
///
/// There is no locale tailoring: the culture-aware policies follow the
/// invariant Unicode rules. Ignoring case differs between the two families.
/// The culture-aware policy applies full lowercase mapping (which may expand
/// a character into several), while the ordinal policy maps each character to
/// its simple uppercase form and leaves characters with multi-character
/// uppercase forms untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonPolicy {
    /// Case-sensitive, culture-aware comparison.
    CurrentCulture,
    /// Case-insensitive, culture-aware comparison.
    CurrentCultureIgnoreCase,
    /// Case-sensitive comparison of the raw bytes.
    Ordinal,
    /// Case-insensitive comparison of simple uppercase mappings.
    OrdinalIgnoreCase,
}

impl ComparisonPolicy {
    /// Every policy, in declaration order.
    pub const ALL: [ComparisonPolicy; 4] = [
        ComparisonPolicy::CurrentCulture,
        ComparisonPolicy::CurrentCultureIgnoreCase,
        ComparisonPolicy::Ordinal,
        ComparisonPolicy::OrdinalIgnoreCase,
    ];

    /// Returns the snake_case name used by serde and [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            ComparisonPolicy::CurrentCulture => "current_culture",
            ComparisonPolicy::CurrentCultureIgnoreCase => "current_culture_ignore_case",
            ComparisonPolicy::Ordinal => "ordinal",
            ComparisonPolicy::OrdinalIgnoreCase => "ordinal_ignore_case",
        }
    }

    /// Returns whether the policy ignores letter case.
    pub fn ignores_case(self) -> bool {
        matches!(
            self,
            ComparisonPolicy::CurrentCultureIgnoreCase | ComparisonPolicy::OrdinalIgnoreCase
        )
    }

    /// Compares two strings under this policy.
    pub fn text_eq(self, left: &str, right: &str) -> bool {
        match self {
            ComparisonPolicy::CurrentCulture | ComparisonPolicy::Ordinal => left == right,
            ComparisonPolicy::CurrentCultureIgnoreCase => {
                left == right || left.to_lowercase() == right.to_lowercase()
            }
            ComparisonPolicy::OrdinalIgnoreCase => left
                .chars()
                .map(simple_uppercase)
                .eq(right.chars().map(simple_uppercase)),
        }
    }

    /// Hashes a string under this policy; equal strings hash equally.
    pub fn text_hash(self, text: &str) -> i32 {
        match self {
            ComparisonPolicy::CurrentCulture | ComparisonPolicy::Ordinal => native_hash(text),
            ComparisonPolicy::CurrentCultureIgnoreCase => native_hash(text.to_lowercase().as_str()),
            ComparisonPolicy::OrdinalIgnoreCase => {
                let folded: String = text.chars().map(simple_uppercase).collect();
                native_hash(folded.as_str())
            }
        }
    }
}

fn simple_uppercase(ch: char) -> char {
    let mut upper = ch.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(mapped), None) => mapped,
        _ => ch,
    }
}

impl Display for ComparisonPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComparisonPolicy {
    type Err = HashingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComparisonPolicy::ALL
            .into_iter()
            .find(|policy| policy.as_str() == s)
            .ok_or_else(|| {
                HashingError::InvalidArgument(
                    ErrorInfo::new(UNKNOWN_POLICY, "unknown comparison policy")
                        .with_context("value", s),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_uppercase_keeps_expanding_characters() {
        assert_eq!(simple_uppercase('a'), 'A');
        assert_eq!(simple_uppercase('ß'), 'ß');
        assert_eq!(simple_uppercase('1'), '1');
    }

    #[test]
    fn culture_ignore_case_uses_full_mapping() {
        let policy = ComparisonPolicy::CurrentCultureIgnoreCase;
        assert!(policy.text_eq("ΣΑΣ", "σας"));
        assert_eq!(policy.text_hash("ΣΑΣ"), policy.text_hash("σας"));
    }
}
