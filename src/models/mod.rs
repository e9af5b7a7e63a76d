pub mod application;
pub mod review;
pub mod specialty;
pub mod university;
pub mod user;

pub use application::{
    AdmissionApplication, ApplicationStatus, MyAdmissionRow, UniversityAdmissionRow,
    UniversityApplication,
};
pub use review::Review;
pub use specialty::Specialty;
pub use university::{TopUniversity, University, UniversityPage};
pub use user::{User, UserRole};
