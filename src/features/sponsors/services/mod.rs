pub mod sponsor_service;

pub use sponsor_service::SponsorService;
