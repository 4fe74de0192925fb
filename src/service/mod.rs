pub mod availability;
pub mod courses;
pub mod heroes;
pub mod payments;
pub mod requests;
pub mod validation;

pub use availability::active_courses;
pub use courses::CourseService;
pub use heroes::HeroService;
pub use payments::PaymentService;
pub use requests::RequestService;
pub use validation::{parse_id, validate, Payload, Validate};
