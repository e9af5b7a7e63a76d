pub mod get;
pub mod post;

pub use get::get_specialties_for_university;
pub use post::create_specialty;
