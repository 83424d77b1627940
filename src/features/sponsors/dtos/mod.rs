pub mod sponsor_dto;

pub use sponsor_dto::*;
