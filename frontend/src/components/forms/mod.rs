pub mod add_goals_form;
pub mod login_form;
pub mod register_form;

pub use add_goals_form::AddGoalsForm;
pub use login_form::LoginForm;
pub use register_form::RegisterForm;
