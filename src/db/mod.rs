pub mod admission;
pub mod review;
pub mod specialty;
pub mod university;
pub mod university_application;
pub mod user;
