pub mod sponsor_handler;

pub use sponsor_handler::*;
