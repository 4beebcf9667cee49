pub mod filter_bar;
pub mod forms;
pub mod goal_display;
pub mod goal_input_table;
pub mod header;

pub use filter_bar::FilterBar;
pub use goal_display::GoalDisplay;
pub use header::{ActiveView, Header};
