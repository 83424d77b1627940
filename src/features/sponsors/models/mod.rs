pub mod sponsor;

pub use sponsor::Sponsor;
