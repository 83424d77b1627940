pub mod sponsorship_handler;

pub use sponsorship_handler::*;
