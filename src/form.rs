//! New Note Form State
//!
//! Draft contents, submit status and keyboard handling of the creation form.

use serde::Serialize;

/// Delay before a successful form is cleared
pub const SUCCESS_RESET_MS: u32 = 1_500;
/// How long the error state stays on the button
pub const ERROR_RESET_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmitStatus {
    pub fn label(self) -> &'static str {
        match self {
            SubmitStatus::Idle => "Add note",
            SubmitStatus::Submitting => "Adding...",
            SubmitStatus::Succeeded => "Added!",
            SubmitStatus::Failed => "Failed, try again",
        }
    }

    /// CSS modifier for the submit button
    pub fn class(self) -> &'static str {
        match self {
            SubmitStatus::Idle => "submit-btn",
            SubmitStatus::Submitting => "submit-btn pending",
            SubmitStatus::Succeeded => "submit-btn success",
            SubmitStatus::Failed => "submit-btn error",
        }
    }
}

/// Body of `POST /api/tasks`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    #[serde(rename = "isFavorite")]
    pub is_favorite: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewTaskDraft {
    pub title: String,
    pub description: String,
    pub favorite: bool,
    status: SubmitStatus,
}

impl NewTaskDraft {
    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn toggle_favorite(&mut self) {
        self.favorite = !self.favorite;
    }

    /// Build the create request. None when idle-gated or the title is blank.
    pub fn begin_submit(&mut self) -> Option<NewTask> {
        if self.status != SubmitStatus::Idle {
            return None;
        }
        let title = self.title.trim();
        if title.is_empty() {
            return None;
        }
        self.status = SubmitStatus::Submitting;
        Some(NewTask {
            title: title.to_string(),
            description: self.description.trim().to_string(),
            is_favorite: self.favorite,
        })
    }

    pub fn submit_succeeded(&mut self) {
        self.status = SubmitStatus::Succeeded;
    }

    pub fn submit_failed(&mut self) {
        self.status = SubmitStatus::Failed;
    }

    /// After the success delay: everything back to empty
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// After the error delay: idle again, input kept
    pub fn clear_error(&mut self) {
        if self.status == SubmitStatus::Failed {
            self.status = SubmitStatus::Idle;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Let the browser handle it
    None,
    FocusDescription,
    Submit,
}

/// Map a keydown in one of the form fields to an action
pub fn key_action(field: FormField, key: &str, shift: bool, draft: &NewTaskDraft) -> KeyAction {
    match (field, key) {
        (FormField::Title, "Enter") | (FormField::Title, "Tab") if !shift => {
            if draft.title.trim().is_empty() {
                KeyAction::None
            } else {
                KeyAction::FocusDescription
            }
        }
        (FormField::Description, "Enter") if !shift => {
            if draft.title.trim().is_empty() || draft.description.trim().is_empty() {
                KeyAction::None
            } else {
                KeyAction::Submit
            }
        }
        _ => KeyAction::None,
    }
}
