//! Ticket analysis prompts — renders the system/user prompt pair that asks a
//! hosted model to summarize, categorize and gauge the sentiment of a support
//! ticket. Invoking the model and reading its reply happen elsewhere.

pub mod contract;
pub mod handlers;
pub mod prompts;

use serde::{Deserialize, Serialize};

use crate::prompts::{check_placeholders, render_template, TemplateError};
use crate::ticket_analysis::prompts::{
    TICKET_ANALYSIS_PLACEHOLDERS, TICKET_ANALYSIS_PROMPT_TEMPLATE, TICKET_ANALYSIS_SYSTEM_PROMPT,
};

/// The two ticket fields the template consumes. Neither is trimmed nor checked
/// for emptiness.
#[derive(Debug, Clone, Deserialize)]
pub struct TicketInput {
    pub subject: String,
    pub description: String,
}

/// System turn plus rendered user turn, ready for a model-invocation client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketAnalysisPrompt {
    pub system: &'static str,
    pub user: String,
}

/// Wire shape of a rendered prompt: a system string and a single user message.
#[derive(Debug, Serialize)]
pub struct PromptMessages<'a> {
    pub system: &'a str,
    pub messages: Vec<PromptMessage<'a>>,
}

#[derive(Debug, Serialize)]
pub struct PromptMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

impl TicketAnalysisPrompt {
    pub fn messages(&self) -> PromptMessages<'_> {
        PromptMessages {
            system: self.system,
            messages: vec![PromptMessage {
                role: "user",
                content: &self.user,
            }],
        }
    }
}

/// Renders the ticket analysis prompt. Pure; the inputs are inserted verbatim.
pub fn render_ticket_analysis_prompt(subject: &str, description: &str) -> TicketAnalysisPrompt {
    TicketAnalysisPrompt {
        system: TICKET_ANALYSIS_SYSTEM_PROMPT,
        user: render_template(
            TICKET_ANALYSIS_PROMPT_TEMPLATE,
            &[("subject", subject), ("description", description)],
        ),
    }
}

/// Checks the template still carries exactly the expected placeholders.
/// Run once at startup.
pub fn verify_template() -> Result<(), TemplateError> {
    check_placeholders(TICKET_ANALYSIS_PROMPT_TEMPLATE, TICKET_ANALYSIS_PLACEHOLDERS)
}
