//! Chat assistant: free-form questions about one program for one company.
//! Replies are not stored.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::eligibility::checker::CheckerConfig;
use crate::errors::AppError;
use crate::llm_client::TextGenerator;
use crate::models::company::CompanySnapshot;
use crate::models::program::FundingProgram;

pub mod prompts;

use prompts::{
    CHAT_CONTEXT_TEMPLATE, CHAT_SYSTEM, MOCK_DOCUMENTS_REPLY, MOCK_FEASIBILITY_REPLY,
    MOCK_GENERIC_REPLY, MOCK_RISK_REPLY,
};

/// Characters of the program guide included in the context.
pub const GUIDE_EXCERPT_CHARS: usize = 2000;
const NO_GUIDE: &str = "No detailed guide available";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub user_message: String,
    pub ai_response: String,
    /// HH:MM
    pub timestamp: String,
}

#[derive(Clone)]
pub struct ChatService {
    generator: Arc<dyn TextGenerator>,
    config: CheckerConfig,
}

impl ChatService {
    pub fn new(generator: Arc<dyn TextGenerator>, config: CheckerConfig) -> Self {
        Self { generator, config }
    }

    /// Answers `message`. Only a blank message is an error; generator failures
    /// come back as an apology in `ai_response`.
    pub async fn ask(
        &self,
        program: &FundingProgram,
        company: &CompanySnapshot,
        message: &str,
    ) -> Result<ChatReply, AppError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(AppError::Validation("Message cannot be empty".to_string()));
        }

        let ai_response = if self.config.use_mock_responses {
            mock_reply(program, company, message)
        } else {
            info!("Chat question about '{}' from {}", program.title, company.tax_code);
            let prompt = format!("{}\n\nUser Question: {message}", build_context(program, company));
            match self.generator.generate(&prompt, CHAT_SYSTEM).await {
                Ok(text) => text,
                Err(e) => {
                    warn!("Chat generation failed: {e}");
                    format!("I'm sorry, I encountered an error while processing your question: {e}")
                }
            }
        };

        Ok(ChatReply {
            user_message: message.to_string(),
            ai_response,
            timestamp: Utc::now().format("%H:%M").to_string(),
        })
    }
}

pub fn build_context(program: &FundingProgram, company: &CompanySnapshot) -> String {
    let guide: String = match program.guide() {
        Some(guide) => guide.chars().take(GUIDE_EXCERPT_CHARS).collect(),
        None => NO_GUIDE.to_string(),
    };

    CHAT_CONTEXT_TEMPLATE
        .replace("{program_title}", &program.title)
        .replace("{program_description}", &program.description)
        .replace("{company_context}", &company_context(company))
        .replace("{guide}", &guide)
}

fn company_context(company: &CompanySnapshot) -> String {
    [
        format!("Company: {} (CUI: {})", company.company_name(), company.tax_code),
        format!("Legal Form: {}", company.legal_form),
        format!("Activity: NACE {}", company.nace),
        format!("Size: {} employees", company.employees),
        format!(
            "Financial: {} lei turnover, {} lei profit",
            company.turnover, company.profit
        ),
        format!("Location: {}, {}", company.city, company.county),
        format!("Status: {} ({})", company.status, company.fiscal_activity),
    ]
    .join("\n")
}

fn mock_reply(program: &FundingProgram, company: &CompanySnapshot, message: &str) -> String {
    let message = message.to_lowercase();
    let mentions = |words: &[&str]| words.iter().any(|w| message.contains(w));

    let template = if mentions(&["feasibility", "viable", "chance"]) {
        MOCK_FEASIBILITY_REPLY
    } else if mentions(&["risk", "challenge"]) {
        MOCK_RISK_REPLY
    } else if mentions(&["document", "requirement"]) {
        MOCK_DOCUMENTS_REPLY
    } else {
        MOCK_GENERIC_REPLY
    };

    template
        .replace("{company_name}", company.company_name())
        .replace("{program_title}", &program.title)
}
