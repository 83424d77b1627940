pub mod sponsorship_service;

pub use sponsorship_service::SponsorshipService;
