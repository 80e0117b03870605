pub mod day_type;
pub mod request;
pub mod result;
