mod auth;
mod flash;
mod session;

pub use auth::{get_authenticated_user_id, login_session, logout_session};
pub use flash::{pop_flash, put_flash};
