//! UI Components
//!
//! Reusable Leptos components.

mod forgot_password_form;
mod login_form;
mod modal_host;
mod modals;
mod new_note_modal;
mod note_detail;
mod note_list;
mod register_form;
mod tag_sidebar;

pub use forgot_password_form::ForgotPasswordForm;
pub use login_form::LoginForm;
pub use modal_host::ModalHost;
pub use new_note_modal::NewNoteModal;
pub use note_detail::NoteDetail;
pub use note_list::NotesScreen;
pub use register_form::RegisterForm;
pub use tag_sidebar::TagSidebar;
