pub mod valid;

pub use valid::Valid;
