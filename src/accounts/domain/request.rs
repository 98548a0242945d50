//! Identity lookup requests.

/// Free-text identity lookup as received from a chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    text: String,
    sender: String,
    formatted_body: Option<String>,
}

impl LookupRequest {
    /// Creates a request from the argument text and the sender's identity.
    ///
    /// The sender identity is used when `text` is blank.
    #[must_use]
    pub fn new(text: impl Into<String>, sender: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: sender.into(),
            formatted_body: None,
        }
    }

    /// Attaches the rich-text body of the message for mention extraction.
    #[must_use]
    pub fn with_formatted_body(mut self, formatted_body: impl Into<String>) -> Self {
        self.formatted_body = Some(formatted_body.into());
        self
    }

    /// Returns the argument text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the sender's chat identity.
    #[must_use]
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the rich-text body, when the message had one.
    #[must_use]
    pub fn formatted_body(&self) -> Option<&str> {
        self.formatted_body.as_deref()
    }

    /// Returns the text to resolve: the argument, or the sender when blank.
    #[must_use]
    pub fn effective_text(&self) -> &str {
        let trimmed = self.text.trim();
        if trimmed.is_empty() {
            self.sender.trim()
        } else {
            trimmed
        }
    }
}
