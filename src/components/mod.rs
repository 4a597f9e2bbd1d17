//! UI Components
//!
//! Pages and reusable Leptos widgets.

mod delete_confirm_button;
mod error_text;
mod homepage;
mod list_name_form;
mod login_form;
mod logout_button;
mod register_form;
mod task_form;
mod task_list_detail;
mod task_lists_view;
mod title_bar;

pub use delete_confirm_button::DeleteConfirmButton;
pub use error_text::ErrorText;
pub use homepage::Homepage;
pub use list_name_form::ListNameForm;
pub use login_form::LoginForm;
pub use logout_button::LogoutButton;
pub use register_form::RegisterForm;
pub use task_form::TaskForm;
pub use task_list_detail::TaskListDetail;
pub use task_lists_view::TaskListsView;
pub use title_bar::TitleBar;
