//! UI Components
//!
//! Pages and the pieces of the todo page.

mod clear_completed_button;
mod login_page;
mod nav_bar;
mod new_todo_form;
mod register_page;
mod todo_list;
mod todo_page;
mod todo_row;

pub use clear_completed_button::ClearCompletedButton;
pub use login_page::LoginPage;
pub use nav_bar::NavBar;
pub use new_todo_form::NewTodoForm;
pub use register_page::RegisterPage;
pub use todo_list::TodoList;
pub use todo_page::TodoPage;
pub use todo_row::TodoRow;
