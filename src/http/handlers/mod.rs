pub mod admission;
pub mod auth;
pub mod review;
pub mod specialty;
pub mod university;
pub mod university_application;

pub use admission::{
    create_admission_handler, my_admissions_handler, university_admissions_handler,
    update_admission_status_handler,
};
pub use auth::{login_handler, logout_handler, me_handler, register_handler};
pub use review::{create_review_handler, delete_review_handler, get_reviews_handler};
pub use specialty::{create_specialty_handler, get_specialties_handler};
pub use university::{
    create_university_handler, delete_university_handler, get_university_handler,
    list_universities_handler, random_university_handler, top_university_handler,
    update_university_handler,
};
pub use university_application::{
    create_university_application_handler, list_university_applications_handler,
    process_university_application_handler,
};
