pub mod convert;
pub mod probe;
pub mod vision;
pub mod wait;
