// Rule-extraction prompts. COMPANY_RULES / PROJECT_RULES are the section
// labels `parse_rule_sections` switches on.

use crate::llm_client::prompts::FUNDING_EXPERT_SYSTEM;

pub const RULE_EXTRACTION_SYSTEM: &str = FUNDING_EXPERT_SYSTEM;

/// Placeholder used when a category has no rules.
pub const NO_REQUIREMENTS_BULLET: &str = "- No specific requirements mentioned";

/// Replace: {content}, {no_requirements}
pub const RULE_EXTRACTION_PROMPT_TEMPLATE: &str = r#"Analyze the following EU funding program documentation carefully and extract its eligibility rules into two distinct categories.

CRITICAL INSTRUCTIONS:
1. Extract ONLY explicit eligibility requirements mentioned in the text
2. Categorize them into:
   - COMPANY RULES: Requirements that can be verified from company registry data (size, age, legal status, location, financial metrics, employees, NACE codes, etc.)
   - PROJECT RULES: Requirements that need project-specific information or manual review (innovation type, project timeline, research focus, etc.)
3. Format each rule as a bullet point starting with "-"
4. Be specific and precise; don't add requirements not explicitly mentioned
5. Use clear, actionable language

FUNDING PROGRAM CONTENT:
{content}

Please respond in this exact format:

COMPANY_RULES:
[List company-related requirements here]

PROJECT_RULES:
[List project-related requirements here]

If no rules are found in a category, write "{no_requirements}""#;
