use serde::{Deserialize, Serialize};

/// Body of `POST {base}/api/v1/chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub question: String,
    pub session_id: String,
}

/// Successful chat response.
///
/// Only `answer` is guaranteed. The remaining fields mirror the backend's
/// full response schema; rendering uses `source_url` and ignores the rest
/// so schema growth server-side never breaks deployed widgets.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatResponse {
    pub answer: String,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub source_topic: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub matched_by: Option<String>,
}

/// Error payload attached to non-success statuses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_exactly_two_fields() {
        let request = ChatRequest {
            question: "where is my order?".to_string(),
            session_id: "abc-123".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"question": "where is my order?", "session_id": "abc-123"})
        );
    }

    #[test]
    fn response_decodes_with_answer_alone() {
        let response: ChatResponse = serde_json::from_str(r#"{"answer":"Hello"}"#).unwrap();
        assert_eq!(response.answer, "Hello");
        assert_eq!(response.source_url, None);
    }

    #[test]
    fn response_decodes_full_backend_schema() {
        let raw = r#"{
            "answer": "Within 3 days.",
            "confidence": 0.91,
            "source_topic": "Shipping",
            "source_url": "https://ex.com/shipping",
            "session_id": "s-1",
            "matched_by": "v3_gemini_qa"
        }"#;
        let response: ChatResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.source_url.as_deref(), Some("https://ex.com/shipping"));
        assert_eq!(response.confidence, Some(0.91));
    }

    #[test]
    fn response_without_answer_is_rejected() {
        assert!(serde_json::from_str::<ChatResponse>(r#"{"source_url":"x"}"#).is_err());
    }

    #[test]
    fn error_body_detail_is_optional() {
        let with: ApiErrorBody = serde_json::from_str(r#"{"detail":"Invalid key"}"#).unwrap();
        let without: ApiErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(with.detail.as_deref(), Some("Invalid key"));
        assert_eq!(without.detail, None);
    }
}
