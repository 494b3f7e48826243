/// A modal error message. While one is showing, every key other than the dismiss keys is ignored.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ErrorDialog {
    message: String,
}

impl ErrorDialog {
    pub const TITLE: &'static str = "Error";

    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn title(&self) -> &str {
        Self::TITLE
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
