pub mod delete;
pub mod get;
pub mod post;

pub use delete::delete_review;
pub use get::get_reviews_for_university;
pub use post::create_review;
