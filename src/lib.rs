pub mod bulk;
pub mod bundle;
pub mod cli;
pub mod import;
pub mod utils;
