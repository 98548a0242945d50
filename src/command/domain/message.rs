//! Incoming chat messages.

/// A chat message as delivered by the hosting framework.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    sender: String,
    body: String,
    formatted_body: Option<String>,
}

impl ChatMessage {
    /// Creates a plain-text message from `sender` (an `@localpart:domain`
    /// identity).
    #[must_use]
    pub fn new(sender: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            body: body.into(),
            formatted_body: None,
        }
    }

    /// Attaches the HTML rendering of the message.
    #[must_use]
    pub fn with_formatted_body(mut self, formatted_body: impl Into<String>) -> Self {
        self.formatted_body = Some(formatted_body.into());
        self
    }

    /// Returns the sender's chat identity.
    #[must_use]
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the plain-text body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the HTML body, if any.
    #[must_use]
    pub fn formatted_body(&self) -> Option<&str> {
        self.formatted_body.as_deref()
    }
}
