pub mod courses;
pub mod heroes;
