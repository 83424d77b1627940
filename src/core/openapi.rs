use utoipa::{Modify, OpenApi};

use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::dashboard::{dtos as dashboard_dtos, handlers as dashboard_handlers};
use crate::features::events::{dtos as events_dtos, handlers as events_handlers};
use crate::features::participants::{
    dtos as participants_dtos, handlers as participants_handlers,
};
use crate::features::registrations::{
    dtos as registrations_dtos, handlers as registrations_handlers,
};
use crate::features::sponsors::{dtos as sponsors_dtos, handlers as sponsors_handlers};
use crate::features::sponsorships::{
    dtos as sponsorships_dtos, handlers as sponsorships_handlers,
};
use crate::features::venues::{dtos as venues_dtos, handlers as venues_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Dashboard
        dashboard_handlers::get_summary,
        dashboard_handlers::get_upcoming_events,
        // Categories
        categories_handlers::list_categories,
        categories_handlers::get_category,
        // Venues
        venues_handlers::list_venues,
        venues_handlers::get_venue,
        // Participants
        participants_handlers::list_participants,
        participants_handlers::get_participant,
        // Sponsors
        sponsors_handlers::list_sponsors,
        sponsors_handlers::get_sponsor,
        // Events
        events_handlers::list_events,
        events_handlers::get_event,
        // Registrations
        registrations_handlers::list_registrations,
        registrations_handlers::get_registration,
        // Sponsorships
        sponsorships_handlers::list_sponsorships,
        sponsorships_handlers::get_sponsorship,
        sponsorships_handlers::list_event_sponsorships,
        sponsorships_handlers::list_sponsor_sponsorships,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Dashboard
            dashboard_dtos::DashboardSummaryDto,
            ApiResponse<dashboard_dtos::DashboardSummaryDto>,
            dashboard_dtos::UpcomingEventDto,
            ApiResponse<Vec<dashboard_dtos::UpcomingEventDto>>,
            // Categories
            categories_dtos::CategoryResponseDto,
            ApiResponse<Vec<categories_dtos::CategoryResponseDto>>,
            ApiResponse<categories_dtos::CategoryResponseDto>,
            // Venues
            venues_dtos::VenueResponseDto,
            ApiResponse<Vec<venues_dtos::VenueResponseDto>>,
            ApiResponse<venues_dtos::VenueResponseDto>,
            // Participants
            participants_dtos::ParticipantResponseDto,
            ApiResponse<Vec<participants_dtos::ParticipantResponseDto>>,
            ApiResponse<participants_dtos::ParticipantResponseDto>,
            // Sponsors
            sponsors_dtos::SponsorResponseDto,
            ApiResponse<Vec<sponsors_dtos::SponsorResponseDto>>,
            ApiResponse<sponsors_dtos::SponsorResponseDto>,
            // Events
            events_dtos::EventResponseDto,
            events_dtos::EventListItemDto,
            ApiResponse<Vec<events_dtos::EventListItemDto>>,
            ApiResponse<events_dtos::EventResponseDto>,
            // Registrations
            registrations_dtos::RegistrationResponseDto,
            registrations_dtos::RegistrationListItemDto,
            ApiResponse<Vec<registrations_dtos::RegistrationListItemDto>>,
            ApiResponse<registrations_dtos::RegistrationResponseDto>,
            // Sponsorships
            sponsorships_dtos::SponsorshipResponseDto,
            sponsorships_dtos::SponsorshipListItemDto,
            ApiResponse<Vec<sponsorships_dtos::SponsorshipListItemDto>>,
            ApiResponse<sponsorships_dtos::SponsorshipResponseDto>,
            sponsorships_dtos::SponsoredEventDto,
            ApiResponse<Vec<sponsorships_dtos::SponsoredEventDto>>,
        )
    ),
    tags(
        (name = "dashboard", description = "Record counts and upcoming events"),
        (name = "categories", description = "Event categories"),
        (name = "venues", description = "Event venues"),
        (name = "participants", description = "People who register for events"),
        (name = "sponsors", description = "Sponsoring organizations"),
        (name = "events", description = "Events with their category and venue"),
        (name = "registrations", description = "Participant sign-ups for events"),
        (name = "sponsorships", description = "Sponsor contributions to events"),
    ),
    info(
        title = "Etkinlik API",
        version = "0.1.0",
        description = "Read-only JSON view of the event management records",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_json_route_is_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/dashboard/summary",
            "/api/dashboard/upcoming-events",
            "/api/categories",
            "/api/venues/{id}",
            "/api/participants",
            "/api/sponsors/{id}",
            "/api/events",
            "/api/registrations/{id}",
            "/api/sponsorships",
            "/api/events/{id}/sponsorships",
            "/api/sponsors/{id}/sponsorships",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }

    #[test]
    fn test_info_modifier_overrides_title() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Etkinlik".to_string(),
            version: "2.0.0".to_string(),
            description: "Yönetim".to_string(),
        }
        .modify(&mut doc);
        assert_eq!(doc.info.title, "Etkinlik");
        assert_eq!(doc.info.version, "2.0.0");
    }
}
