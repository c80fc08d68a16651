/// Chat speaker role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    User,
    Bot,
}

/// Core immutable message model.
///
/// Messages are created on submission or response arrival, never mutated
/// or deleted, and live only for the page lifetime. Ordering is implicit
/// in append order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub text: String,
    pub source_url: Option<String>,
}

impl Message {
    /// Creates a user message from submitted text.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
            source_url: None,
        }
    }

    /// Creates a bot message with an optional source citation.
    pub fn bot(text: impl Into<String>, source_url: Option<String>) -> Self {
        Self {
            role: Role::Bot,
            text: text.into(),
            source_url,
        }
    }
}

/// Append-only log of rendered messages.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Submission precondition: non-empty after trimming, and nothing in flight.
///
/// Returns the trimmed question, or `None` for the silent no-op cases.
pub fn compose_question(raw: &str, in_flight: bool) -> Option<String> {
    if in_flight {
        return None;
    }

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_input_is_a_no_op() {
        assert_eq!(compose_question("", false), None);
        assert_eq!(compose_question("   \n\t", false), None);
    }

    #[test]
    fn in_flight_request_drops_the_submission() {
        assert_eq!(compose_question("hello", true), None);
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(
            compose_question("  where do you ship?  \n", false),
            Some("where do you ship?".to_string())
        );
    }

    #[test]
    fn transcript_preserves_append_order() {
        let mut transcript = Transcript::default();
        transcript.push(Message::user("hi"));
        transcript.push(Message::bot("hello", Some("https://ex.com".to_string())));

        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.messages()[0].role, Role::User);
        assert_eq!(transcript.messages()[1].role, Role::Bot);
        assert_eq!(
            transcript.messages()[1].source_url.as_deref(),
            Some("https://ex.com")
        );
    }
}
