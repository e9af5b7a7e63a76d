pub mod get;
pub mod post;
pub mod put;

pub use get::{get_admissions_for_representative, get_admissions_for_user};
pub use post::create_admission_application;
pub use put::update_admission_status;
