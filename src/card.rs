//! Card Editing State
//!
//! In-place title/description editing for a single note card.

use crate::models::Task;

/// Payload of a text save
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextUpdate {
    pub title: String,
    pub description: String,
}

/// Edit buffer of a card. `saved_*` track the last persisted values and
/// are what cancel and a failed save fall back to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDraft {
    saved_title: String,
    saved_description: String,
    pub title: String,
    pub description: String,
    editing: bool,
    saving: bool,
}

impl TextDraft {
    pub fn from_task(task: &Task) -> Self {
        Self {
            saved_title: task.title.clone(),
            saved_description: task.description.clone(),
            title: task.title.clone(),
            description: task.description.clone(),
            editing: false,
            saving: false,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn saved_title(&self) -> &str {
        &self.saved_title
    }

    pub fn saved_description(&self) -> &str {
        &self.saved_description
    }

    /// Toggle edit mode. Leaving discards unsaved input.
    pub fn toggle_edit(&mut self) {
        if self.editing {
            self.cancel();
        } else {
            self.editing = true;
        }
    }

    pub fn cancel(&mut self) {
        self.reset_fields();
        self.editing = false;
    }

    /// Validate and start a save. None when the trimmed title is empty or a
    /// save is already running; edit mode is left untouched in that case.
    pub fn begin_save(&mut self) -> Option<TextUpdate> {
        if !self.editing || self.saving {
            return None;
        }
        let title = self.title.trim();
        if title.is_empty() {
            return None;
        }
        self.saving = true;
        Some(TextUpdate {
            title: title.to_string(),
            description: self.description.clone(),
        })
    }

    pub fn save_succeeded(&mut self, update: &TextUpdate) {
        self.saved_title = update.title.clone();
        self.saved_description = update.description.clone();
        self.reset_fields();
        self.saving = false;
        self.editing = false;
    }

    /// Failed save: fields snap back, edit mode stays open
    pub fn save_failed(&mut self) {
        self.reset_fields();
        self.saving = false;
    }

    fn reset_fields(&mut self) {
        self.title = self.saved_title.clone();
        self.description = self.saved_description.clone();
    }
}
