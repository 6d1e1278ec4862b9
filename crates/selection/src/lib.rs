#![forbid(unsafe_code)]

pub mod box_select;
pub mod closest;
pub mod delete;
pub mod extreme;
pub mod flags;
pub mod mode;
pub mod path_move;
pub mod screen;
pub mod selection_box;

pub use box_select::select_in_box;
pub use closest::{select_closest, PickParams};
pub use delete::delete_selected;
pub use extreme::select_extreme;
pub use flags::{count_selected, deselect_all, select_all};
pub use mode::SelectionMode;
pub use path_move::move_selection;
pub use screen::project_to_screen;
pub use selection_box::SelectionBox;
