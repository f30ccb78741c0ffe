//! Staged title editing.
//!
//! Titles are edited locally while the author types and committed on blur
//! or Enter. A commit whose trimmed text is empty is discarded silently and
//! the previously committed title is restored, so blank titles never reach
//! the property list.

/// A staged edit of a property (or list) title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleDraft {
    committed: String,
    draft: String,
}

impl TitleDraft {
    /// Starts a draft from the currently committed title.
    #[must_use]
    pub fn new(committed: impl Into<String>) -> Self {
        let committed = committed.into();
        Self {
            draft: committed.clone(),
            committed,
        }
    }

    /// The last committed title.
    #[must_use]
    pub fn committed(&self) -> &str {
        &self.committed
    }

    /// The staged, uncommitted text.
    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Replaces the staged text (author keystroke).
    pub fn input(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Commits the staged text.
    ///
    /// Returns the newly committed title when the trimmed draft is
    /// non-empty. A whitespace-only draft is discarded: the draft reverts
    /// to the prior committed title and `None` is returned. This is not an
    /// error condition.
    pub fn commit(&mut self) -> Option<&str> {
        let trimmed = self.draft.trim();
        if trimmed.is_empty() {
            self.draft.clone_from(&self.committed);
            return None;
        }
        self.committed = trimmed.to_owned();
        self.draft.clone_from(&self.committed);
        Some(&self.committed)
    }

    /// Abandons the staged text (Escape), restoring the committed title.
    pub fn cancel(&mut self) {
        self.draft.clone_from(&self.committed);
    }
}
