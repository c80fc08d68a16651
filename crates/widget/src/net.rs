use gloo_net::http::Request;
use starship_chat::{ApiErrorBody, ChatError, ChatRequest, ChatResponse, ChatResult};

/// Issues the one POST of a user turn and maps its three outcomes.
///
/// Success statuses decode to [`ChatResponse`]; non-success statuses carry
/// the server's `detail` when the body parses; everything else (transport
/// failure, malformed JSON) surfaces generically via [`ChatError`].
pub async fn send_chat(
    endpoint: &str,
    client_key: &str,
    request: &ChatRequest,
) -> ChatResult<ChatResponse> {
    let response = Request::post(endpoint)
        .header("Content-Type", "application/json")
        .header("Authorization", &format!("Bearer {client_key}"))
        .json(request)
        .map_err(|error| ChatError::BuildRequest {
            message: error.to_string(),
        })?
        .send()
        .await
        .map_err(|error| ChatError::Network {
            message: error.to_string(),
        })?;

    let status = response.status();
    let raw = response.text().await.map_err(|error| ChatError::Network {
        message: error.to_string(),
    })?;

    if !(200..=299).contains(&status) {
        let detail = serde_json::from_str::<ApiErrorBody>(&raw)
            .ok()
            .and_then(|body| body.detail);
        return Err(ChatError::Server { status, detail });
    }

    serde_json::from_str(&raw).map_err(|error| ChatError::Decode {
        status,
        message: error.to_string(),
    })
}
