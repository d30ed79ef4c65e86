//! UI Components
//!
//! Reusable Leptos components.

mod branch_panel;
mod category_panel;
mod delete_confirm_button;
mod settings_page;
mod status_badge;
mod text_field;
mod toast_list;

pub use branch_panel::BranchPanel;
pub use category_panel::CategoryPanel;
pub use delete_confirm_button::DeleteConfirmButton;
pub use settings_page::SettingsPage;
pub use status_badge::StatusBadge;
pub use text_field::TextField;
pub use toast_list::ToastList;
