//! Reusable UI building blocks shared by the page sections

pub mod form;
pub mod modal;
pub mod spinner;

pub use form::{FormField, TextAreaField};
pub use modal::{AlertDialog, BaseModal};
pub use spinner::LoadingSpinner;
