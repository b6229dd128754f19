use crate::{
    config::Config,
    errors::{SidekickError, SidekickResult},
    language::Language,
};
use log::{debug, warn};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Shown when the backend answers but the reply field is absent or empty.
pub const FALLBACK_REPLY: &str = "Sorry, I couldn't process that.";

/// Shown for every failed send: connect errors, non-2xx statuses and
/// unparseable bodies all collapse into this one string. The causes are
/// only distinguished in the log.
pub const ERROR_REPLY: &str = "Error connecting to the service. Please try again.";

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
    lang: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub response: Option<String>,
}

/// Client for the chat backend. The endpoint comes from configuration so
/// the widget can be pointed at any environment, including a mock server
/// in tests.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    chat_url: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> SidekickResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            chat_url: config.chat_url.clone(),
        })
    }

    /// Posts one message to the backend and returns the parsed reply.
    pub async fn send_message(&self, message: &str, lang: Language) -> SidekickResult<ChatReply> {
        let payload = ChatRequest {
            message,
            lang: lang.code(),
        };

        let response = self
            .client
            .post(&self.chat_url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| SidekickError::api_error(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(SidekickError::api_error(format!(
                "Service returned error: {} - {}",
                status, error_text
            )));
        }

        let reply: ChatReply = response
            .json()
            .await
            .map_err(|e| SidekickError::api_error(format!("Failed to parse response: {}", e)))?;

        Ok(reply)
    }

    /// Resolves a send to the text that goes into the conversation log.
    /// Never fails: a missing or empty reply becomes the fallback string
    /// and any error becomes the fixed error string.
    pub async fn resolve_reply(&self, message: &str, lang: Language) -> String {
        match self.send_message(message, lang).await {
            Ok(reply) => match reply.response {
                // A whitespace-only reply counts as empty here; the
                // original widget would render it verbatim as a blank
                // bubble, which is useless in a terminal.
                Some(text) if !text.trim().is_empty() => {
                    debug!("reply received ({} chars)", text.len());
                    text
                }
                _ => {
                    warn!("reply body had no usable response field");
                    FALLBACK_REPLY.to_string()
                }
            },
            Err(e) => {
                warn!("chat request failed: {}", e);
                ERROR_REPLY.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::{
        matchers::{body_json, header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn test_client(uri: &str) -> ApiClient {
        let mut config = Config::default();
        config.chat_url = format!("{}/chat", uri);
        config.request_timeout_secs = 5;
        ApiClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_send_message_posts_message_and_lang() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({"message": "What is 2+2?", "lang": "en"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": "4"})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let reply = client
            .send_message("What is 2+2?", Language::English)
            .await
            .unwrap();

        assert_eq!(reply.response.as_deref(), Some("4"));
    }

    #[tokio::test]
    async fn test_language_selection_changes_lang_field() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat"))
            .and(body_json(json!({"message": "hola", "lang": "es"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": "hola!"})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let text = client.resolve_reply("hola", Language::Spanish).await;

        assert_eq!(text, "hola!");
    }

    #[tokio::test]
    async fn test_resolve_reply_missing_field_uses_fallback() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"other": "data"})))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let text = client.resolve_reply("ping", Language::English).await;

        assert_eq!(text, FALLBACK_REPLY);
    }

    #[tokio::test]
    async fn test_resolve_reply_empty_field_uses_fallback() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": "   "})))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let text = client.resolve_reply("ping", Language::English).await;

        assert_eq!(text, FALLBACK_REPLY);
    }

    #[tokio::test]
    async fn test_resolve_reply_server_error_uses_error_string() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let text = client.resolve_reply("ping", Language::English).await;

        assert_eq!(text, ERROR_REPLY);
    }

    #[tokio::test]
    async fn test_resolve_reply_non_json_body_uses_error_string() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let text = client.resolve_reply("ping", Language::English).await;

        assert_eq!(text, ERROR_REPLY);
    }

    #[tokio::test]
    async fn test_full_send_cycle_appends_user_then_reply() {
        use crate::app::{App, SendState, GREETING};

        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat"))
            .and(body_json(json!({"message": "What is 2+2?", "lang": "en"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": "4"})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let mut app = App::new();
        app.draft = "What is 2+2?".to_string();

        let outbound = app.begin_send().unwrap();
        let text = client.resolve_reply(&outbound.message, outbound.lang).await;
        app.finish_send(text);

        let log: Vec<&str> = app.messages.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(log, vec![GREETING, "What is 2+2?", "4"]);
        assert_eq!(app.send_state, SendState::Idle);
        assert!(app.draft.is_empty());
    }

    #[tokio::test]
    async fn test_resolve_reply_connection_refused_uses_error_string() {
        // Nothing listens here
        let client = test_client("http://127.0.0.1:1");
        let text = client.resolve_reply("ping", Language::English).await;

        assert_eq!(text, ERROR_REPLY);
    }
}
