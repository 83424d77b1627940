pub mod sponsorship;

pub use sponsorship::{SponsoredEventRow, Sponsorship, SponsorshipListRow};
