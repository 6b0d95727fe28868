//! Comparer that applies a string policy only when both sides are text.

use hashing_core::{EqualityComparer, HashValue};

use crate::ComparisonPolicy;

/// Equality comparer over arbitrary values with special handling for text.
///
/// Textual values are compared and hashed under the configured
/// [`ComparisonPolicy`]; everything else, including mixed text/non-text
/// pairs, falls back to native equality and hashing. Exactly one instance
/// exists per policy.
#[derive(Debug, PartialEq, Eq)]
pub struct ConditionalComparer {
    policy: ComparisonPolicy,
}

static CURRENT_CULTURE: ConditionalComparer = ConditionalComparer {
    policy: ComparisonPolicy::CurrentCulture,
};
static CURRENT_CULTURE_IGNORE_CASE: ConditionalComparer = ConditionalComparer {
    policy: ComparisonPolicy::CurrentCultureIgnoreCase,
};
static ORDINAL: ConditionalComparer = ConditionalComparer {
    policy: ComparisonPolicy::Ordinal,
};
static ORDINAL_IGNORE_CASE: ConditionalComparer = ConditionalComparer {
    policy: ComparisonPolicy::OrdinalIgnoreCase,
};

impl ConditionalComparer {
    /// Case-sensitive, culture-aware text comparison.
    pub fn current_culture() -> &'static ConditionalComparer {
        &CURRENT_CULTURE
    }

    /// Case-insensitive, culture-aware text comparison.
    pub fn current_culture_ignore_case() -> &'static ConditionalComparer {
        &CURRENT_CULTURE_IGNORE_CASE
    }

    /// Case-sensitive ordinal text comparison.
    pub fn ordinal() -> &'static ConditionalComparer {
        &ORDINAL
    }

    /// Case-insensitive ordinal text comparison.
    pub fn ordinal_ignore_case() -> &'static ConditionalComparer {
        &ORDINAL_IGNORE_CASE
    }

    /// Returns the shared instance configured with `policy`.
    pub fn for_policy(policy: ComparisonPolicy) -> &'static ConditionalComparer {
        match policy {
            ComparisonPolicy::CurrentCulture => Self::current_culture(),
            ComparisonPolicy::CurrentCultureIgnoreCase => Self::current_culture_ignore_case(),
            ComparisonPolicy::Ordinal => Self::ordinal(),
            ComparisonPolicy::OrdinalIgnoreCase => Self::ordinal_ignore_case(),
        }
    }

    /// Returns the policy applied to text.
    pub fn policy(&self) -> ComparisonPolicy {
        self.policy
    }
}

impl EqualityComparer for ConditionalComparer {
    fn equals(&self, left: Option<&dyn HashValue>, right: Option<&dyn HashValue>) -> bool {
        let (left, right) = match (left, right) {
            (None, None) => return true,
            (Some(left), Some(right)) => (left, right),
            _ => return false,
        };
        match (left.as_text(), right.as_text()) {
            (Some(left), Some(right)) => self.policy.text_eq(left, right),
            _ => left.native_eq(right),
        }
    }

    fn hash_code(&self, value: Option<&dyn HashValue>) -> i32 {
        match value {
            None => 0,
            Some(value) => match value.as_text() {
                Some(text) => self.policy.text_hash(text),
                None => value.native_hash(),
            },
        }
    }
}
