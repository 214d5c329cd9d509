// Chat consultant prompts.

use crate::llm_client::prompts::FUNDING_EXPERT_SYSTEM;

pub const CHAT_SYSTEM: &str = FUNDING_EXPERT_SYSTEM;

/// Replace: {program_title}, {program_description}, {guide}, {company_context}
pub const CHAT_CONTEXT_TEMPLATE: &str = r#"You are an expert EU funding consultant specializing in Romanian companies and European funding programs.

PROGRAM CONTEXT:
Program: {program_title}
Description: {program_description}
Detailed Guide: {guide}

COMPANY CONTEXT:
{company_context}

Your role is to:
1. Provide expert advice on EU funding applications
2. Help assess project feasibility and risks
3. Suggest strategies for successful applications
4. Answer questions about eligibility criteria and requirements
5. Guide on application processes and documentation

Always provide specific, actionable advice based on the program requirements and company profile."#;

/// Replace: {company_name}, {program_title}
pub const MOCK_FEASIBILITY_REPLY: &str = "Based on your company profile ({company_name}), the {program_title} program could be a good fit. \
Your company size and sector alignment suggest reasonable chances of success. \
I recommend focusing on innovation aspects and market potential in your application.";

pub const MOCK_RISK_REPLY: &str = "Main risks for your application include: \
1) Strong competition from similar companies, 2) Need for detailed financial projections, \
3) Compliance with state aid regulations. \
Mitigation strategies include thorough market research and partnering with research institutions.";

/// Replace: {program_title}
pub const MOCK_DOCUMENTS_REPLY: &str = "For {program_title}, you'll typically need: Business plan, \
financial statements (last 2-3 years), project description with timeline, market analysis, and impact assessment. \
Make sure all documents are recent and certified.";

/// Replace: {program_title}
pub const MOCK_GENERIC_REPLY: &str = "Thank you for your question about {program_title}. \
As an EU funding expert, I can help you analyze your company's fit for this program and guide you through the application process. \
Could you be more specific about what aspect you'd like to explore?";
