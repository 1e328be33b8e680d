//! UI Components
//!
//! Leptos components of the notes page.

mod color_picker;
mod new_task_form;
mod note_card;
mod search_bar;
mod task_section;

pub use color_picker::ColorPicker;
pub use new_task_form::NewTaskForm;
pub use note_card::NoteCard;
pub use search_bar::SearchBar;
pub use task_section::TaskSection;
