pub mod participant_handler;

pub use participant_handler::*;
