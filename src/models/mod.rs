pub mod course;
pub mod hero;
pub mod payment;
pub mod request;

pub use course::{Course, CourseAvailability, CourseCreate, CourseDetail};
pub use hero::{Hero, HeroCreate};
pub use payment::{Payment, PaymentCreate};
pub use request::{Request, RequestCreate};
