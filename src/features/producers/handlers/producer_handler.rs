use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppQuery};
use crate::features::producers::dtos::{
    CreateProducerDto, ProducerResponseDto, UpdateProducerDto,
};
use crate::features::producers::services::ProducerService;
use crate::shared::constants::PRODUCER_NOT_FOUND_MESSAGE;
use crate::shared::types::{ErrorResponse, PaginationQuery};

/// Ids that are not UUIDs cannot name a stored producer
fn parse_producer_id(id: &str) -> Result<Uuid> {
    Uuid::parse_str(id).map_err(|_| AppError::NotFound(PRODUCER_NOT_FOUND_MESSAGE.to_string()))
}

/// List producers
#[utoipa::path(
    get,
    path = "/producer",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Page of producers in creation order", body = [ProducerResponseDto]),
        (status = 400, description = "Malformed query string", body = ErrorResponse)
    ),
    tag = "producer"
)]
pub async fn list_producers(
    State(service): State<Arc<ProducerService>>,
    AppQuery(pagination): AppQuery<PaginationQuery>,
) -> Result<Json<Vec<ProducerResponseDto>>> {
    let producers = service.list(&pagination).await?;
    Ok(Json(producers))
}

/// Get producer by id
#[utoipa::path(
    get,
    path = "/producer/{id}",
    params(
        ("id" = Uuid, Path, description = "Producer ID")
    ),
    responses(
        (status = 200, description = "Producer found", body = ProducerResponseDto),
        (status = 404, description = "Producer not found", body = ErrorResponse)
    ),
    tag = "producer"
)]
pub async fn get_producer(
    State(service): State<Arc<ProducerService>>,
    Path(id): Path<String>,
) -> Result<Json<ProducerResponseDto>> {
    let producer = service.get(parse_producer_id(&id)?).await?;
    Ok(Json(producer))
}

/// Create a producer
#[utoipa::path(
    post,
    path = "/producer",
    request_body = CreateProducerDto,
    responses(
        (status = 201, description = "Producer created", body = ProducerResponseDto),
        (status = 400, description = "Invalid body, CPF/CNPJ or total area", body = ErrorResponse)
    ),
    tag = "producer"
)]
pub async fn create_producer(
    State(service): State<Arc<ProducerService>>,
    AppJson(dto): AppJson<CreateProducerDto>,
) -> Result<(StatusCode, Json<ProducerResponseDto>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let producer = service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(producer)))
}

/// Update a producer
///
/// Only the fields present in the body are changed; unknown fields are rejected.
#[utoipa::path(
    put,
    path = "/producer/{id}",
    params(
        ("id" = Uuid, Path, description = "Producer ID")
    ),
    request_body = UpdateProducerDto,
    responses(
        (status = 200, description = "Producer updated", body = ProducerResponseDto),
        (status = 400, description = "Invalid body", body = ErrorResponse),
        (status = 404, description = "Producer not found", body = ErrorResponse)
    ),
    tag = "producer"
)]
pub async fn update_producer(
    State(service): State<Arc<ProducerService>>,
    Path(id): Path<String>,
    AppJson(dto): AppJson<UpdateProducerDto>,
) -> Result<Json<ProducerResponseDto>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let producer = service.update(parse_producer_id(&id)?, dto).await?;
    Ok(Json(producer))
}

/// Delete a producer
#[utoipa::path(
    delete,
    path = "/producer/{id}",
    params(
        ("id" = Uuid, Path, description = "Producer ID")
    ),
    responses(
        (status = 200, description = "Deleted producer", body = ProducerResponseDto),
        (status = 404, description = "Producer not found", body = ErrorResponse)
    ),
    tag = "producer"
)]
pub async fn delete_producer(
    State(service): State<Arc<ProducerService>>,
    Path(id): Path<String>,
) -> Result<Json<ProducerResponseDto>> {
    let producer = service.delete(parse_producer_id(&id)?).await?;
    Ok(Json(producer))
}
