use snafu::Snafu;

/// Inline fallback shown when the server gives no usable detail.
pub const GENERIC_ERROR_MESSAGE: &str = "Sorry, something went wrong. Please try again.";

/// Failure modes of one request/response exchange.
///
/// None of these are fatal to the widget; every one is recoverable by
/// resubmitting the question.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ChatError {
    #[snafu(display("chat request was rejected with status {status}"))]
    Server { status: u16, detail: Option<String> },
    #[snafu(display("chat request failed in transit: {message}"))]
    Network { message: String },
    #[snafu(display("chat response body could not be decoded (status {status}): {message}"))]
    Decode { status: u16, message: String },
    #[snafu(display("chat request could not be built: {message}"))]
    BuildRequest { message: String },
    #[snafu(display("session token '{raw}' is not a valid UUID"))]
    InvalidSession { raw: String, source: uuid::Error },
}

impl ChatError {
    /// Text surfaced inline in the message log.
    ///
    /// Server-supplied detail is shown verbatim; everything else collapses
    /// to the generic fallback so transport internals never reach end users.
    pub fn user_message(&self) -> &str {
        match self {
            Self::Server {
                detail: Some(detail),
                ..
            } if !detail.trim().is_empty() => detail,
            _ => GENERIC_ERROR_MESSAGE,
        }
    }
}

pub type ChatResult<T> = Result<T, ChatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_detail_is_surfaced_verbatim() {
        let error = ChatError::Server {
            status: 401,
            detail: Some("Invalid key".to_string()),
        };
        assert_eq!(error.user_message(), "Invalid key");
    }

    #[test]
    fn missing_or_blank_detail_falls_back_to_generic_text() {
        let missing = ChatError::Server {
            status: 500,
            detail: None,
        };
        let blank = ChatError::Server {
            status: 500,
            detail: Some("   ".to_string()),
        };
        assert_eq!(missing.user_message(), GENERIC_ERROR_MESSAGE);
        assert_eq!(blank.user_message(), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn transport_errors_never_leak_internals() {
        let error = ChatError::Network {
            message: "dns lookup failed".to_string(),
        };
        assert_eq!(error.user_message(), GENERIC_ERROR_MESSAGE);
    }
}
