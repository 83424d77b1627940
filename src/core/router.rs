use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use crate::features::categories::{routes as categories_routes, CategoryService};
use crate::features::dashboard::{routes as dashboard_routes, DashboardService};
use crate::features::events::handlers::EventState;
use crate::features::events::{routes as events_routes, EventService};
use crate::features::participants::{routes as participants_routes, ParticipantService};
use crate::features::registrations::handlers::RegistrationState;
use crate::features::registrations::{routes as registrations_routes, RegistrationService};
use crate::features::sponsors::{routes as sponsors_routes, SponsorService};
use crate::features::sponsorships::handlers::SponsorshipState;
use crate::features::sponsorships::{routes as sponsorships_routes, SponsorshipService};
use crate::features::venues::{routes as venues_routes, VenueService};

/// HTML screens and JSON read API for every record type, sharing one pool.
pub fn record_routes(pool: PgPool, default_creator_id: i64) -> Router {
    let category_service = Arc::new(CategoryService::new(pool.clone()));
    let venue_service = Arc::new(VenueService::new(pool.clone()));
    let participant_service = Arc::new(ParticipantService::new(pool.clone()));
    let sponsor_service = Arc::new(SponsorService::new(pool.clone()));
    let event_service = Arc::new(EventService::new(pool.clone(), default_creator_id));
    let registration_service = Arc::new(RegistrationService::new(pool.clone()));
    let sponsorship_service = Arc::new(SponsorshipService::new(pool.clone()));
    let dashboard_service = Arc::new(DashboardService::new(pool));
    tracing::debug!(
        "Record services initialized (default_creator_id={})",
        default_creator_id
    );

    let event_state = EventState {
        event_service: Arc::clone(&event_service),
        category_service: Arc::clone(&category_service),
        venue_service: Arc::clone(&venue_service),
    };
    let registration_state = RegistrationState {
        registration_service,
        event_service: Arc::clone(&event_service),
        participant_service: Arc::clone(&participant_service),
    };
    let sponsorship_state = SponsorshipState {
        sponsorship_service,
        event_service,
        sponsor_service: Arc::clone(&sponsor_service),
    };

    Router::new()
        .merge(dashboard_routes(dashboard_service))
        .merge(categories_routes(category_service))
        .merge(venues_routes(venue_service))
        .merge(participants_routes(participant_service))
        .merge(sponsors_routes(sponsor_service))
        .merge(events_routes(event_state))
        .merge(registrations_routes(registration_state))
        .merge(sponsorships_routes(sponsorship_state))
}
