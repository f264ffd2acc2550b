//! Reusable UI components.

mod feedback;
mod item_buttons;
mod read_only;
mod search_box;

pub use feedback::{EmptyState, ErrorState, error_banner, loading_state};
pub use item_buttons::{add_button, copy_button, move_button};
pub use read_only::read_only_or_editable;
pub use search_box::search_box;
