//! Server-side validation of submitted HTML forms

mod errors;
mod form;

pub use errors::FormErrors;
pub use form::Form;
