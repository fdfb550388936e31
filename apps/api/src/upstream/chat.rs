use serde::{Deserialize, Serialize};

use super::{check, read_json, UpstreamClient, UpstreamError};
use crate::models::chat::ReplyKind;

#[derive(Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatReply {
    #[serde(rename = "type", default)]
    pub kind: ReplyKind,
    #[serde(default)]
    pub response: Option<String>,
}

impl UpstreamClient {
    /// POST /chat
    pub async fn chat(&self, message: &str) -> Result<ChatReply, UpstreamError> {
        let url = Self::url(&self.endpoints.chat, &["chat"])?;
        let response = self
            .client
            .post(url)
            .json(&ChatRequest { message })
            .send()
            .await?;
        let response = check(response, "Chat service unavailable").await?;
        read_json(response).await
    }
}

#[cfg(test)]
mod tests {
    use mockito::{Matcher, Server};
    use serde_json::json;

    use super::*;
    use crate::upstream::tests::client_for;

    #[tokio::test]
    async fn test_chat_reply_kinds() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/chat")
            .match_body(Matcher::Json(json!({"message": "open settings"})))
            .with_status(200)
            .with_body(r#"{"type":"navigation","response":"Opening Settings..."}"#)
            .create_async()
            .await;

        let reply = client_for(&server.url()).chat("open settings").await.unwrap();
        assert_eq!(reply.kind, ReplyKind::Navigation);
        assert_eq!(reply.response.as_deref(), Some("Opening Settings..."));
    }

    #[tokio::test]
    async fn test_chat_reply_without_fields() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/chat")
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let reply = client_for(&server.url()).chat("hello").await.unwrap();
        assert_eq!(reply.kind, ReplyKind::Chat);
        assert!(reply.response.is_none());
    }
}
