pub mod get;
pub mod post;

pub use get::{email_exists, get_credentials_by_email};
pub use post::create_user;
