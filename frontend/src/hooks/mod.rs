pub mod use_goal_display;
pub mod use_goal_filters;
pub mod use_goal_input_table;
pub mod use_session;
