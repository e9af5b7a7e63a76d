pub mod get;
pub mod post;
pub mod put;

pub use get::{get_all_university_applications, get_university_applications_for_user};
pub use post::create_university_application;
pub use put::process_university_application;
