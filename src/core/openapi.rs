use utoipa::{Modify, OpenApi};

use crate::features::producers::{dtos as producers_dtos, handlers as producers_handlers};
use crate::shared::types::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Producers
        producers_handlers::list_producers,
        producers_handlers::get_producer,
        producers_handlers::create_producer,
        producers_handlers::update_producer,
        producers_handlers::delete_producer,
        // Dashboard
        producers_handlers::get_dashboards,
    ),
    components(
        schemas(
            // Shared
            ErrorResponse,
            // Producers
            producers_dtos::CreateProducerDto,
            producers_dtos::UpdateProducerDto,
            producers_dtos::ProducerResponseDto,
            // Dashboard
            producers_dtos::DashboardEntryDto,
            producers_dtos::ProducerCountDto,
            producers_dtos::TotalAreaDto,
            producers_dtos::ByStateDto,
            producers_dtos::StateCountDto,
            producers_dtos::ByCropDto,
            producers_dtos::CropCountDto,
            producers_dtos::BySoilUseDto,
            producers_dtos::SoilUseDto,
        )
    ),
    tags(
        (name = "producer", description = "Farm producer records"),
        (name = "dashboard", description = "Aggregate statistics over all producers"),
    ),
    info(
        title = "Producer Registry API",
        version = "0.1.0",
        description = "Farm producer records and dashboards",
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
