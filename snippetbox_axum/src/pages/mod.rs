mod home;
mod snippet;
mod user;

pub(crate) use home::home;
pub(crate) use snippet::{create_snippet, show_snippet};
pub(crate) use user::{login, login_form, logout, signup, signup_form};
