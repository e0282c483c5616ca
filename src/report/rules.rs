//! Shadow-warning rules.
//!
//! An ordered list of `(predicate, warning)` pairs.  Rules are evaluated
//! top to bottom and the first match wins, so the list order is part of the
//! report contract.

use crate::persona::shadow::{AttachmentStyle, RegulationMethod, ShadowProfile};

/// Warning used when no rule matches.
pub const STABLE_WARNING: &str = "Stable";

/// Clause appended to any warning when the person self-regulates alone.
pub const AUTO_REGULATION_NOTE: &str = " (Needs time alone to calm down).";

/// One entry of the shadow-warning rule list.
#[derive(Debug, Clone, Copy)]
pub struct ShadowRule {
    pub name: &'static str,
    pub applies: fn(&ShadowProfile) -> bool,
    pub warning: &'static str,
}

/// Built-in rules: AVOIDANT, then ANXIOUS, then DISORGANIZED.
pub const SHADOW_RULES: [ShadowRule; 3] = [
    ShadowRule {
        name: "avoidant",
        applies: |p| p.attachment_style == AttachmentStyle::Avoidant,
        warning: "⚠️ Tends to withdraw under stress. A partner may feel abandoned.",
    },
    ShadowRule {
        name: "anxious",
        applies: |p| p.attachment_style == AttachmentStyle::Anxious,
        warning: "⚠️ Needs constant contact. A threat of separation triggers panic.",
    },
    ShadowRule {
        name: "disorganized",
        applies: |p| p.attachment_style == AttachmentStyle::Disorganized,
        warning: "⚠️ Chaotic response to closeness (fear + desire). Requires patience.",
    },
];

/// Pick the first matching warning, falling back to [`STABLE_WARNING`], and
/// append the auto-regulation clause when it applies.
pub fn select_warning(rules: &[ShadowRule], profile: &ShadowProfile) -> String {
    let mut warning = match rules.iter().find(|rule| (rule.applies)(profile)) {
        Some(rule) => {
            log::debug!("Shadow rule '{}' matched", rule.name);
            rule.warning.to_string()
        }
        None => STABLE_WARNING.to_string(),
    };
    if profile.regulation_method == RegulationMethod::AutoRegulation {
        warning.push_str(AUTO_REGULATION_NOTE);
    }
    warning
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persona::shadow::ConflictResponse;

    fn profile(style: AttachmentStyle, regulation: RegulationMethod) -> ShadowProfile {
        ShadowProfile::manual(style, ConflictResponse::Fawn, regulation)
    }

    #[test]
    fn test_each_style_has_its_warning() {
        let co = RegulationMethod::CoRegulation;
        assert_eq!(
            select_warning(&SHADOW_RULES, &profile(AttachmentStyle::Avoidant, co)),
            SHADOW_RULES[0].warning
        );
        assert_eq!(
            select_warning(&SHADOW_RULES, &profile(AttachmentStyle::Anxious, co)),
            SHADOW_RULES[1].warning
        );
        assert_eq!(
            select_warning(&SHADOW_RULES, &profile(AttachmentStyle::Disorganized, co)),
            SHADOW_RULES[2].warning
        );
        assert_eq!(
            select_warning(&SHADOW_RULES, &profile(AttachmentStyle::Secure, co)),
            STABLE_WARNING
        );
    }

    #[test]
    fn test_first_match_wins() {
        // a catch-all after the avoidant rule also matches an avoidant profile
        let rules = [
            SHADOW_RULES[0],
            ShadowRule {
                name: "any",
                applies: |_| true,
                warning: "catch-all",
            },
        ];
        let avoidant = profile(AttachmentStyle::Avoidant, RegulationMethod::CoRegulation);
        assert_eq!(select_warning(&rules, &avoidant), SHADOW_RULES[0].warning);

        let secure = profile(AttachmentStyle::Secure, RegulationMethod::CoRegulation);
        assert_eq!(select_warning(&rules, &secure), "catch-all");
    }

    #[test]
    fn test_auto_regulation_clause_appended() {
        let p = profile(AttachmentStyle::Avoidant, RegulationMethod::AutoRegulation);
        let w = select_warning(&SHADOW_RULES, &p);
        assert!(w.starts_with(SHADOW_RULES[0].warning));
        assert!(w.ends_with(AUTO_REGULATION_NOTE));

        // the clause is added even to the stable fallback
        let p = profile(AttachmentStyle::Secure, RegulationMethod::AutoRegulation);
        assert_eq!(
            select_warning(&SHADOW_RULES, &p),
            format!("{STABLE_WARNING}{AUTO_REGULATION_NOTE}")
        );
    }

    #[test]
    fn test_empty_rule_list_is_stable() {
        let p = profile(AttachmentStyle::Anxious, RegulationMethod::CoRegulation);
        assert_eq!(select_warning(&[], &p), STABLE_WARNING);
    }
}
