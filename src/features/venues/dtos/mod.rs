pub mod venue_dto;

pub use venue_dto::*;
