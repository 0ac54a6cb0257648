//! Removal rules: which line positions are dropped, and when.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::core::lines::Line;

/// Positions removed only when their text contains a trigger.
pub const DEFAULT_CONDITIONAL: [usize; 2] = [410, 411];
/// Literal substrings that mark a conditional-position line as dangling.
pub const DEFAULT_TRIGGERS: [&str; 2] = ["],", "},"];
/// Positions removed regardless of content.
pub const DEFAULT_UNCONDITIONAL: [usize; 3] = [508, 509, 510];

/// Position/content rules applied to every line of the target file.
///
/// The defaults reproduce the historical fix-up of `router.tsx`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct RemovalRules {
    /// 1-based positions removed only if the text contains a trigger.
    pub conditional: BTreeSet<usize>,
    /// Literal substrings checked against conditional-position lines.
    pub triggers: Vec<String>,
    /// 1-based positions removed unconditionally, empty lines included.
    pub unconditional: BTreeSet<usize>,
}

impl Default for RemovalRules {
    fn default() -> Self {
        Self {
            conditional: DEFAULT_CONDITIONAL.into_iter().collect(),
            triggers: DEFAULT_TRIGGERS.iter().map(|t| t.to_string()).collect(),
            unconditional: DEFAULT_UNCONDITIONAL.into_iter().collect(),
        }
    }
}

/// Why a line was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalReason {
    /// Conditional position whose text contained a trigger.
    Trigger,
    /// Unconditional position.
    Unconditional,
}

/// Decision for a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    Keep,
    Remove(RemovalReason),
}

impl RemovalRules {
    /// Decide whether `line` is kept or removed.
    ///
    /// Conditional positions are checked first; a conditional line without a
    /// trigger is kept even if the same number were also unconditional
    /// (rule sets that overlap are rejected by [`RemovalRules::validate`]).
    pub fn disposition(&self, line: &Line) -> Disposition {
        if self.conditional.contains(&line.number) {
            return match self.matching_trigger(&line.text) {
                Some(_) => Disposition::Remove(RemovalReason::Trigger),
                None => Disposition::Keep,
            };
        }
        if self.unconditional.contains(&line.number) {
            return Disposition::Remove(RemovalReason::Unconditional);
        }
        Disposition::Keep
    }

    /// First trigger contained in `text`, if any.
    pub fn matching_trigger(&self, text: &str) -> Option<&str> {
        self.triggers
            .iter()
            .map(String::as_str)
            .find(|trigger| text.contains(trigger))
    }

    /// Check rule invariants:
    /// - positions are 1-based (no `0`)
    /// - conditional and unconditional sets are disjoint
    /// - triggers are non-empty and contain no line terminators
    /// - conditional positions come with at least one trigger
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.conditional.contains(&0) {
            errors.push("conditional: line numbers start at 1, found 0".to_string());
        }
        if self.unconditional.contains(&0) {
            errors.push("unconditional: line numbers start at 1, found 0".to_string());
        }

        for number in self.conditional.intersection(&self.unconditional) {
            errors.push(format!(
                "line {} is listed as both conditional and unconditional",
                number
            ));
        }

        for trigger in &self.triggers {
            if trigger.is_empty() {
                errors.push("triggers: empty trigger would match every line".to_string());
            } else if trigger.contains(['\n', '\r']) {
                errors.push(format!(
                    "triggers: {:?} must not contain line terminators",
                    trigger
                ));
            }
        }

        if !self.conditional.is_empty() && self.triggers.is_empty() {
            errors.push("conditional positions require at least one trigger".to_string());
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::line;

    #[test]
    fn default_rules_match_historical_fixup() {
        let rules = RemovalRules::default();
        assert_eq!(rules.conditional, BTreeSet::from([410, 411]));
        assert_eq!(rules.triggers, vec!["],", "},"]);
        assert_eq!(rules.unconditional, BTreeSet::from([508, 509, 510]));
        assert!(rules.validate().is_empty());
    }

    #[test]
    fn conditional_line_with_trigger_is_removed() {
        let rules = RemovalRules::default();
        assert_eq!(
            rules.disposition(&line(410, "  ],")),
            Disposition::Remove(RemovalReason::Trigger)
        );
        assert_eq!(
            rules.disposition(&line(411, "    },")),
            Disposition::Remove(RemovalReason::Trigger)
        );
    }

    #[test]
    fn conditional_line_without_trigger_is_kept() {
        let rules = RemovalRules::default();
        assert_eq!(rules.disposition(&line(410, "  ]")), Disposition::Keep);
        assert_eq!(rules.disposition(&line(411, "")), Disposition::Keep);
    }

    #[test]
    fn unconditional_line_is_removed_even_when_empty() {
        let rules = RemovalRules::default();
        assert_eq!(
            rules.disposition(&line(508, "")),
            Disposition::Remove(RemovalReason::Unconditional)
        );
        assert_eq!(
            rules.disposition(&line(510, "export default router;")),
            Disposition::Remove(RemovalReason::Unconditional)
        );
    }

    #[test]
    fn untargeted_line_is_kept_even_with_trigger() {
        let rules = RemovalRules::default();
        assert_eq!(rules.disposition(&line(1, "  ],")), Disposition::Keep);
        assert_eq!(rules.disposition(&line(507, "  },")), Disposition::Keep);
    }

    #[test]
    fn validate_reports_errors() {
        let rules = RemovalRules {
            conditional: BTreeSet::from([0, 5]),
            triggers: vec![String::new(), "a\nb".to_string()],
            unconditional: BTreeSet::from([5, 6]),
        };
        let errors = rules.validate();
        assert!(errors.iter().any(|err| err.contains("found 0")));
        assert!(
            errors
                .iter()
                .any(|err| err.contains("line 5 is listed as both"))
        );
        assert!(errors.iter().any(|err| err.contains("empty trigger")));
        assert!(errors.iter().any(|err| err.contains("line terminators")));
    }

    #[test]
    fn validate_requires_trigger_for_conditional_positions() {
        let rules = RemovalRules {
            conditional: BTreeSet::from([3]),
            triggers: Vec::new(),
            unconditional: BTreeSet::new(),
        };
        assert_eq!(
            rules.validate(),
            vec!["conditional positions require at least one trigger".to_string()]
        );
    }
}
