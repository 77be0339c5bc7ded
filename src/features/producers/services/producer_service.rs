use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::producers::dtos::{
    CreateProducerDto, ProducerResponseDto, UpdateProducerDto,
};
use crate::features::producers::repositories::ProducerRepository;
use crate::shared::constants::{INVALID_TAX_ID_MESSAGE, PRODUCER_NOT_FOUND_MESSAGE};
use crate::shared::types::PaginationQuery;
use crate::shared::validation::{is_valid_tax_id, validate_area};

/// Service for producer CRUD operations
pub struct ProducerService {
    repository: Arc<dyn ProducerRepository>,
}

impl ProducerService {
    pub fn new(repository: Arc<dyn ProducerRepository>) -> Self {
        Self { repository }
    }

    /// Get a producer by id
    pub async fn get(&self, id: Uuid) -> Result<ProducerResponseDto> {
        self.repository
            .find_by_id(id)
            .await?
            .map(|p| p.into())
            .ok_or_else(not_found)
    }

    /// List producers in creation order
    pub async fn list(&self, pagination: &PaginationQuery) -> Result<Vec<ProducerResponseDto>> {
        let producers = self
            .repository
            .list(pagination.offset(), pagination.clamped_limit())
            .await?;

        Ok(producers.into_iter().map(|p| p.into()).collect())
    }

    /// Create a producer after checking the tax id and the area invariant
    pub async fn create(&self, dto: CreateProducerDto) -> Result<ProducerResponseDto> {
        if !is_valid_tax_id(&dto.tax_id) {
            return Err(AppError::Validation(INVALID_TAX_ID_MESSAGE.to_string()));
        }
        validate_area(dto.total_area, dto.agricultural_area, dto.vegetation_area)?;

        let producer = self.repository.create(&dto).await?;

        tracing::info!(
            "Producer created: id={}, state={}",
            producer.id,
            producer.state
        );

        Ok(producer.into())
    }

    /// Apply a partial update.
    ///
    /// Tax id and area invariant are only checked on create.
    pub async fn update(&self, id: Uuid, dto: UpdateProducerDto) -> Result<ProducerResponseDto> {
        let producer = self
            .repository
            .update(id, &dto)
            .await?
            .ok_or_else(not_found)?;

        tracing::info!("Producer updated: id={}", producer.id);

        Ok(producer.into())
    }

    /// Delete a producer, returning the removed record
    pub async fn delete(&self, id: Uuid) -> Result<ProducerResponseDto> {
        let producer = self.repository.delete(id).await?.ok_or_else(not_found)?;

        tracing::info!("Producer deleted: id={}", producer.id);

        Ok(producer.into())
    }
}

fn not_found() -> AppError {
    AppError::NotFound(PRODUCER_NOT_FOUND_MESSAGE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::producers::repositories::memory::InMemoryProducerRepository;
    use crate::shared::constants::INVALID_TOTAL_AREA_MESSAGE;
    use crate::shared::test_helpers::sample_create_dto;

    fn service() -> ProducerService {
        ProducerService::new(Arc::new(InMemoryProducerRepository::new()))
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_get_returns_same_record() {
        let service = service();
        let created = service.create(sample_create_dto("SP", &["Soja"])).await.unwrap();

        let fetched = service.get(created.id).await.unwrap();
        assert_eq!(fetched, created);

        // repeated reads of an unmodified record are identical
        assert_eq!(service.get(created.id).await.unwrap(), fetched);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_tax_id() {
        let service = service();

        // wrong length, then well-formed CPF and CNPJ with a bad check digit
        for tax_id in ["1234567890", "52998224724", "11222333000182"] {
            let mut dto = sample_create_dto("SP", &["Soja"]);
            dto.tax_id = tax_id.to_string();

            let err = service.create(dto).await.unwrap_err();
            assert!(
                matches!(err, AppError::Validation(ref msg) if msg == INVALID_TAX_ID_MESSAGE),
                "{} was accepted",
                tax_id
            );
        }
        assert!(service.list(&PaginationQuery::default()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_rejects_areas_above_total() {
        let service = service();
        let mut dto = sample_create_dto("SP", &["Soja"]);
        dto.total_area = 100.0;
        dto.agricultural_area = 40.0;
        dto.vegetation_area = 100.0;

        let err = service.create(dto).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(ref msg) if msg == INVALID_TOTAL_AREA_MESSAGE));
        assert_eq!(service.list(&PaginationQuery::default()).await.unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_create_accepts_cnpj() {
        let service = service();
        let mut dto = sample_create_dto("MG", &[]);
        dto.tax_id = "11.222.333/0001-81".to_string();

        let created = service.create(dto).await.unwrap();
        assert_eq!(created.tax_id, "11.222.333/0001-81");
        assert!(created.crops.is_empty());
    }

    #[tokio::test]
    async fn test_list_paginates_in_creation_order() {
        let service = service();
        let first = service.create(sample_create_dto("SP", &["Soja"])).await.unwrap();
        let second = service.create(sample_create_dto("MG", &["Milho"])).await.unwrap();

        let page_one = service.list(&PaginationQuery::new(1, 1)).await.unwrap();
        let page_two = service.list(&PaginationQuery::new(2, 1)).await.unwrap();
        let page_three = service.list(&PaginationQuery::new(3, 1)).await.unwrap();

        assert_eq!(page_one.len(), 1);
        assert_eq!(page_one[0].id, first.id);
        assert_eq!(page_two.len(), 1);
        assert_eq!(page_two[0].id, second.id);
        assert!(page_three.is_empty());

        let all = service.list(&PaginationQuery::default()).await.unwrap();
        let ids: Vec<Uuid> = all.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }

    #[tokio::test]
    async fn test_update_changes_only_given_fields() {
        let service = service();
        let created = service.create(sample_create_dto("SP", &["Soja"])).await.unwrap();

        let dto = UpdateProducerDto {
            name: Some("Renamed".to_string()),
            ..Default::default()
        };
        let updated = service.update(created.id, dto).await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Renamed");
        assert_eq!(updated.tax_id, created.tax_id);
        assert_eq!(updated.crops, created.crops);
        assert_eq!(service.get(created.id).await.unwrap().name, "Renamed");
    }

    #[tokio::test]
    async fn test_update_skips_create_time_checks() {
        let service = service();
        let created = service.create(sample_create_dto("SP", &["Soja"])).await.unwrap();

        let dto = UpdateProducerDto {
            vegetation_area: Some(created.total_area * 2.0),
            ..Default::default()
        };
        let updated = service.update(created.id, dto).await.unwrap();
        assert!(updated.agricultural_area + updated.vegetation_area > updated.total_area);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let err = service()
            .update(Uuid::new_v4(), UpdateProducerDto::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_returns_record_then_get_is_not_found() {
        let service = service();
        let created = service.create(sample_create_dto("SP", &["Soja"])).await.unwrap();

        let deleted = service.delete(created.id).await.unwrap();
        assert_eq!(deleted.id, created.id);

        assert!(matches!(service.get(created.id).await, Err(AppError::NotFound(_))));
        assert!(matches!(service.delete(created.id).await, Err(AppError::NotFound(_))));
    }
}
