//! Meta-statement filters.
//!
//! The model sometimes fills an empty section with a bullet saying there is
//! nothing to report ("Nu există criterii refuzate", "Toate informațiile sunt
//! disponibile"). Left in place, such a bullet renders as a spurious rejection
//! or open question. Rules are evaluated top to bottom; the first match wins.
//! Character classes accept Romanian letters with or without diacritics,
//! including the legacy cedilla forms (ş, ţ).

use std::sync::LazyLock;

use regex::Regex;

use crate::eligibility::analysis::CriterionCategory;

/// One tagged filter rule.
#[derive(Debug)]
pub struct MetaStatementRule {
    pub category: CriterionCategory,
    pub label: &'static str,
    pub pattern: Regex,
}

const RULE_SOURCES: &[(CriterionCategory, &str, &str)] = &[
    // Rejected: "nothing was rejected" / "everything is accepted"
    (
        CriterionCategory::Rejected,
        "no_rejected_criteria",
        r"nu exist[aă] .* criterii .* (refuz|respins)",
    ),
    (
        CriterionCategory::Rejected,
        "no_rejected_criteria_sunt",
        r"nu sunt .* criterii .* (refuz|respins)",
    ),
    (
        CriterionCategory::Rejected,
        "no_rejected_criteria_avem",
        r"nu avem .* criterii .* (refuz|respins)",
    ),
    (
        CriterionCategory::Rejected,
        "no_rejected_criteria_identified",
        r"nu se identific[aă] .* criterii .* (refuz|respins)",
    ),
    (
        CriterionCategory::Rejected,
        "all_criteria_accepted",
        r"toate criteriile sunt (acceptate|[iî]ndeplinite)",
    ),
    (
        CriterionCategory::Rejected,
        "no_rejection_reasons",
        r"nu exist[aă] .* motive .* (refuz|respins)",
    ),
    (
        CriterionCategory::Rejected,
        "no_specific_rejected_criteria",
        r"nu sunt criterii specifice (refuz|respins)",
    ),
    (
        CriterionCategory::Rejected,
        "no_criteria_specified",
        r"nu exist[aă] criterii specificate",
    ),
    (
        CriterionCategory::Rejected,
        "no_rejected_criteria_because",
        r"nu exist[aă] criterii refuzate.*[iî]ntruc[aâ]t",
    ),
    (
        CriterionCategory::Rejected,
        "no_clear_requirements",
        r"nu sunt specificate cerin[tțţ]e clare",
    ),
    // Unvalidated: "nothing is missing" / "all information is available"
    (
        CriterionCategory::Unvalidated,
        "no_missing_information",
        r"nu exist[aă] .* informa[tțţ]ii .* lips[aă]",
    ),
    (
        CriterionCategory::Unvalidated,
        "no_missing_information_sunt",
        r"nu sunt .* informa[tțţ]ii .* lips[aă]",
    ),
    (
        CriterionCategory::Unvalidated,
        "all_information_available_qualified",
        r"toate informa[tțţ]iile sunt .* disponibile",
    ),
    (
        CriterionCategory::Unvalidated,
        "no_missing_information_identified",
        r"nu se identific[aă] .* informa[tțţ]ii .* lips[aă]",
    ),
    (
        CriterionCategory::Unvalidated,
        "no_missing_information_plain",
        r"nu exist[aă] informa[tțţ]ii lips[aă]",
    ),
    (
        CriterionCategory::Unvalidated,
        "all_information_available",
        r"toate informa[tțţ]iile sunt disponibile",
    ),
];

pub static META_STATEMENT_RULES: LazyLock<Vec<MetaStatementRule>> = LazyLock::new(|| {
    RULE_SOURCES
        .iter()
        .map(|&(category, label, source)| MetaStatementRule {
            category,
            label,
            pattern: Regex::new(&format!("(?i){source}")).expect("static regex must compile"),
        })
        .collect()
});

/// First rule for `category` that matches `raw_line`, if any.
pub fn matching_rule(category: CriterionCategory, raw_line: &str) -> Option<&'static MetaStatementRule> {
    META_STATEMENT_RULES
        .iter()
        .filter(|rule| rule.category == category)
        .find(|rule| rule.pattern.is_match(raw_line))
}

pub fn is_meta_statement(category: CriterionCategory, raw_line: &str) -> bool {
    matching_rule(category, raw_line).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejected_rule(line: &str) -> Option<&'static str> {
        matching_rule(CriterionCategory::Rejected, line).map(|r| r.label)
    }

    fn unvalidated_rule(line: &str) -> Option<&'static str> {
        matching_rule(CriterionCategory::Unvalidated, line).map(|r| r.label)
    }

    #[test]
    fn test_all_rules_compile() {
        assert_eq!(META_STATEMENT_RULES.len(), RULE_SOURCES.len());
    }

    #[test]
    fn test_rule_labels_are_unique() {
        let mut labels: Vec<_> = RULE_SOURCES.iter().map(|(_, label, _)| *label).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), RULE_SOURCES.len());
    }

    #[test]
    fn test_no_criteria_specified() {
        assert_eq!(
            rejected_rule("Nu există criterii specificate care să poată fi refuzate"),
            Some("no_criteria_specified")
        );
        assert_eq!(
            rejected_rule("Nu exista criterii specificate in documentatie"),
            Some("no_criteria_specified")
        );
    }

    #[test]
    fn test_rejected_paraphrases() {
        assert_eq!(
            rejected_rule("Nu există niciun fel de criterii care să fie refuzate"),
            Some("no_rejected_criteria")
        );
        assert_eq!(
            rejected_rule("Nu sunt identificate criterii care să fie respinse"),
            Some("no_rejected_criteria_sunt")
        );
        assert_eq!(
            rejected_rule("Nu avem niciun fel de criterii care trebuie refuzate"),
            Some("no_rejected_criteria_avem")
        );
        assert_eq!(
            rejected_rule("Nu se identifică astfel de criterii pentru refuz"),
            Some("no_rejected_criteria_identified")
        );
        assert_eq!(
            rejected_rule("Nu există suficiente motive de refuz"),
            Some("no_rejection_reasons")
        );
        assert_eq!(
            rejected_rule("Nu sunt criterii specifice respinse"),
            Some("no_specific_rejected_criteria")
        );
        assert_eq!(
            rejected_rule("Nu sunt specificate cerinte clare de eligibilitate"),
            Some("no_clear_requirements")
        );
    }

    #[test]
    fn test_all_criteria_accepted_with_and_without_diacritics() {
        assert_eq!(
            rejected_rule("Toate criteriile sunt îndeplinite"),
            Some("all_criteria_accepted")
        );
        assert_eq!(
            rejected_rule("TOATE CRITERIILE SUNT INDEPLINITE"),
            Some("all_criteria_accepted")
        );
        assert_eq!(
            rejected_rule("Toate criteriile sunt acceptate"),
            Some("all_criteria_accepted")
        );
    }

    #[test]
    fn test_rejected_rules_do_not_touch_real_rejections() {
        assert_eq!(
            rejected_rule("Criteriul IMM: Compania are 312 angajați, peste limita de 250"),
            None
        );
        assert_eq!(
            rejected_rule("Vechime: Compania există de mai puțin de 2 ani"),
            None
        );
    }

    #[test]
    fn test_missing_information_paraphrases() {
        assert_eq!(
            unvalidated_rule("Nu există informații lipsă"),
            Some("no_missing_information_plain")
        );
        assert_eq!(
            unvalidated_rule("Nu exista alte informatii care sa fie lipsa"),
            Some("no_missing_information")
        );
        assert_eq!(
            unvalidated_rule("Nu sunt alte informaţii care să fie lipsă"),
            Some("no_missing_information_sunt")
        );
        assert_eq!(
            unvalidated_rule("Toate informațiile sunt disponibile"),
            Some("all_information_available")
        );
        assert_eq!(
            unvalidated_rule("Toate informațiile necesare sunt disponibile"),
            None
        );
        assert_eq!(
            unvalidated_rule("Toate informațiile sunt deja disponibile"),
            Some("all_information_available_qualified")
        );
        assert_eq!(
            unvalidated_rule("Nu se identifică alte informații care să fie lipsă"),
            Some("no_missing_information_identified")
        );
    }

    #[test]
    fn test_unvalidated_rules_do_not_touch_real_gaps() {
        assert_eq!(
            unvalidated_rule(
                "Certificări de mediu: Nu există informații despre eventuale certificări relevante"
            ),
            None
        );
        assert_eq!(
            unvalidated_rule("Capacitatea tehnică specifică: Nu sunt disponibile date"),
            None
        );
    }

    #[test]
    fn test_rules_are_scoped_to_their_category() {
        assert!(!is_meta_statement(
            CriterionCategory::Unvalidated,
            "Nu există criterii specificate"
        ));
        assert!(!is_meta_statement(
            CriterionCategory::Rejected,
            "Toate informațiile sunt disponibile"
        ));
        assert!(!is_meta_statement(
            CriterionCategory::Accepted,
            "Toate criteriile sunt acceptate"
        ));
    }
}
