//! Ticket analysis prompt rendering, exposed as a library and as a small HTTP service.

pub mod config;
pub mod errors;
pub mod prompts;
pub mod routes;
pub mod ticket_analysis;

pub use ticket_analysis::prompts::{
    TICKET_ANALYSIS_PROMPT_TEMPLATE, TICKET_ANALYSIS_SYSTEM_PROMPT,
};
pub use ticket_analysis::{render_ticket_analysis_prompt, TicketAnalysisPrompt};
