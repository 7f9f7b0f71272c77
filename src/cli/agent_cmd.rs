//! Client commands against a running agent via the delivery socket

use serde_json::json;

use crate::infrastructure::{PushSocketClient, SocketPath};

use super::presenter::Presenter;

/// Fields of a push assembled from CLI flags
#[derive(Debug, Clone)]
pub struct SendFields {
    pub title: String,
    pub body: String,
    pub icon: Option<String>,
    pub url: Option<String>,
}

/// What the send subcommand should deliver
#[derive(Debug, Clone)]
pub enum SendRequest {
    /// A payload assembled from the field flags
    Fields(SendFields),
    /// A raw payload passed through untouched
    Raw(String),
    /// A push event with no payload at all
    Empty,
}

/// Handle the send subcommand
pub async fn handle_send_command(
    request: SendRequest,
    presenter: &Presenter,
) -> Result<(), String> {
    let client = PushSocketClient::new(SocketPath::new());

    if !client.is_agent_running() {
        return Err("No agent running. Start with: push-herald".to_string());
    }

    let payload = match request {
        SendRequest::Fields(fields) => {
            let mut payload = json!({
                "title": fields.title,
                "body": fields.body,
            });
            if let Some(icon) = fields.icon {
                payload["icon"] = json!(icon);
            }
            if let Some(url) = fields.url {
                payload["url"] = json!(url);
            }
            Some(payload.to_string())
        }
        SendRequest::Raw(raw) => Some(raw),
        SendRequest::Empty => None,
    };

    let response = client
        .send_push(payload.as_deref())
        .await
        .map_err(|e| format!("Failed to communicate with agent: {}", e))?;

    let response = response.trim();
    if let Some(stripped) = response.strip_prefix("error:") {
        return Err(stripped.trim().to_string());
    }

    presenter.success("Push delivered");
    Ok(())
}

/// Handle the status subcommand
pub async fn handle_status_command(presenter: &Presenter) -> Result<(), String> {
    let client = PushSocketClient::new(SocketPath::new());

    if !client.is_agent_running() {
        return Err("No agent running. Start with: push-herald".to_string());
    }

    let response = client
        .status()
        .await
        .map_err(|e| format!("Failed to communicate with agent: {}", e))?;

    presenter.agent_status(response.trim());
    Ok(())
}
