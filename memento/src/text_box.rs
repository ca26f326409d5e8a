use patterns_core::{PatternsError, Result};
use tracing::{debug, instrument};

use crate::snapshot::Snapshot;

/// Holder of a single mutable string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBox {
    text: String,
}

impl TextBox {
    /// Creates a text box with empty text.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current text.
    pub fn set_text(&mut self, value: impl Into<String>) {
        self.text = value.into();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Copies the current text into a new snapshot. The text box is unchanged.
    pub fn create_snapshot(&self) -> Snapshot {
        let snapshot = Snapshot::capture(&self.text);
        debug!(
            text_len = self.text.len(),
            captured_at = %snapshot.captured_at(),
            "snapshot created"
        );
        snapshot
    }

    /// Restores the text held by `snapshot`.
    ///
    /// Passing `None` (e.g. an empty caretaker) is an `InvalidArgument` error and leaves the text
    /// as it was.
    #[instrument(skip(self, snapshot))]
    pub fn restore(&mut self, snapshot: Option<&Snapshot>) -> Result<()> {
        let snapshot = snapshot.ok_or_else(|| {
            PatternsError::InvalidArgument("no snapshot provided to restore".to_string())
        })?;
        self.text = snapshot.text().to_string();
        debug!(captured_at = %snapshot.captured_at(), "text restored from snapshot");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_text_box_is_empty() {
        assert_eq!(TextBox::new().text(), "");
    }

    #[test]
    fn test_set_text_replaces_value() {
        let mut text_box = TextBox::new();
        text_box.set_text("a");
        text_box.set_text(String::from("b"));
        assert_eq!(text_box.text(), "b");
    }

    #[test]
    fn test_restore_none_is_invalid_argument() {
        let mut text_box = TextBox::new();
        text_box.set_text("keep me");
        let err = text_box.restore(None).unwrap_err();
        assert!(matches!(err, PatternsError::InvalidArgument(_)));
        assert_eq!(text_box.text(), "keep me");
    }
}
