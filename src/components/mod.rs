//! UI Components
//!
//! Reusable Leptos components.

mod confirm_button;
mod filter_select;
mod list_footer;
mod new_task_form;
mod theme_switch;
mod todo_item;
mod todo_list;

pub use confirm_button::ConfirmButton;
pub use filter_select::FilterSelect;
pub use list_footer::ListFooter;
pub use new_task_form::NewTaskForm;
pub use theme_switch::ThemeSwitch;
pub use todo_item::TodoItem;
pub use todo_list::TodoList;
