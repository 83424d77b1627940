pub mod categories;
pub mod dashboard;
pub mod events;
pub mod participants;
pub mod registrations;
pub mod sponsors;
pub mod sponsorships;
pub mod venues;
