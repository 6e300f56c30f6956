//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{appointments, availability, catalog, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Trimly API",
        version = "0.3.0",
        description = "Barbershop Appointment Booking REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Availability
        availability::check_availability,
        availability::list_available_slots,
        // Appointments
        appointments::book_appointment,
        // Catalog
        catalog::list_barbers,
        catalog::list_services,
    ),
    components(
        schemas(
            // Availability
            availability::AvailabilityResponse,
            availability::SlotsResponse,
            // Appointments
            appointments::BookAppointmentRequest,
            appointments::BookingResponse,
            crate::models::appointment::Appointment,
            crate::models::appointment::AppointmentStatus,
            // Catalog
            crate::models::catalog::BarberShort,
            catalog::ServiceSummary,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "availability", description = "Barber availability queries"),
        (name = "appointments", description = "Appointment booking"),
        (name = "catalog", description = "Store reference data")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
