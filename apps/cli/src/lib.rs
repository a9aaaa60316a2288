pub mod config;
pub mod console;
pub mod main_lib;

pub use main_lib::{init_tracing, run};
