pub mod config;
pub mod courses;
pub mod errors;

pub use courses::{
    Course, CourseCatalog, CourseEngine, CourseQuery, CourseRecord, CuratedCourses, Level,
    Platform,
};
pub use errors::{ApplicationError, DomainError};
