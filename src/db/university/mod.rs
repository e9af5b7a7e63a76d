pub mod delete;
pub mod get;
pub mod post;
pub mod put;

pub use delete::delete_university;
pub use get::{
    SortKey, SortOrder, UniversityFilters, count_universities, get_random_university,
    get_top_university, get_university_by_id, list_normalization_population, list_universities,
};
pub use post::create_university;
pub use put::update_university;
