use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::AppError;
use crate::models::chat::{ChatMessage, ReplyKind, Transcript};
use crate::state::AppState;

pub const SERVER_ERROR_REPLY: &str = "⚠️ Server error. Please try later.";
pub const EMPTY_REPLY: &str = "🤖 No response.";

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
    /// Conversation so far; a fresh transcript (with greeting) when absent.
    #[serde(default)]
    pub history: Option<Transcript>,
}

#[derive(Serialize)]
pub struct ChatResponse {
    #[serde(rename = "type")]
    pub kind: ReplyKind,
    pub transcript: Transcript,
}

/// POST /api/v1/chat
/// Upstream failures never fail the request; they become a bot message.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let message = req.message.trim();
    if message.is_empty() {
        return Err(AppError::Validation("message must not be empty".to_string()));
    }

    let mut transcript = req.history.unwrap_or_else(Transcript::new);
    transcript.push(ChatMessage::user(message));

    let (kind, reply) = match state.upstream.chat(message).await {
        Ok(reply) => {
            let text = reply
                .response
                .filter(|r| !r.trim().is_empty())
                .unwrap_or_else(|| EMPTY_REPLY.to_string());
            (reply.kind, text)
        }
        Err(e) => {
            warn!("chat upstream failed: {e}");
            (ReplyKind::Chat, SERVER_ERROR_REPLY.to_string())
        }
    };
    transcript.push(ChatMessage::bot(reply));

    Ok(Json(ChatResponse { kind, transcript }))
}
