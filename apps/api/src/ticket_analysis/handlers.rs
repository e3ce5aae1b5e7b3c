use axum::{extract::rejection::JsonRejection, Json};
use serde_json::Value;
use tracing::debug;

use crate::errors::AppError;
use crate::ticket_analysis::contract::{describe_contract, ContractDescription};
use crate::ticket_analysis::{render_ticket_analysis_prompt, TicketInput};

/// POST /api/v1/prompts/ticket-analysis
/// Renders the system/user prompt pair for one ticket. Ticket text is not logged.
pub async fn handle_render_prompt(
    payload: Result<Json<TicketInput>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(input) = payload?;

    debug!(
        subject_len = input.subject.len(),
        description_len = input.description.len(),
        "Rendering ticket analysis prompt"
    );

    let prompt = render_ticket_analysis_prompt(&input.subject, &input.description);
    let body = serde_json::to_value(prompt.messages())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize prompt: {e}")))?;

    Ok(Json(body))
}

/// GET /api/v1/prompts/ticket-analysis/contract
pub async fn handle_contract() -> Json<ContractDescription> {
    Json(describe_contract())
}
