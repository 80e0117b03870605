pub mod breaks;
pub mod expected;
pub mod surplus;
