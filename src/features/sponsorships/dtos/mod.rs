pub mod sponsorship_dto;

pub use sponsorship_dto::*;
