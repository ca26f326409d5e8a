use chrono::{DateTime, Utc};

/// Point-in-time copy of a [`crate::TextBox`]'s text. Only a text box can create one, and nothing
/// can change it afterward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    text: String,
    captured_at: DateTime<Utc>,
}

impl Snapshot {
    pub(crate) fn capture(text: &str) -> Self {
        Self {
            text: text.to_string(),
            captured_at: Utc::now(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }
}
