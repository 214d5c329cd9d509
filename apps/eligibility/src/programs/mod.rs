pub mod prompts;
pub mod rule_extraction;

pub use rule_extraction::{extract_rules, parse_rule_sections, ExtractedRules};
