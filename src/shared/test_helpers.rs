use std::sync::Arc;

use axum::Router;
use fake::faker::address::en::CityName;
use fake::faker::company::en::CompanyName;
use fake::faker::name::en::Name;
use fake::Fake;

use crate::features::producers::dtos::CreateProducerDto;
use crate::features::producers::repositories::memory::InMemoryProducerRepository;
use crate::features::producers::{routes, DashboardService, ProducerService};
use crate::shared::validation::{cpf_check_digits, is_valid_cpf};

/// Random CPF with correct check digits
pub fn generate_cpf() -> String {
    loop {
        let base: Vec<u32> = (0..9).map(|_| (0..10u32).fake()).collect();
        let cpf: String = base
            .iter()
            .chain(cpf_check_digits(&base).iter())
            .map(|d| d.to_string())
            .collect();
        if is_valid_cpf(&cpf) {
            return cpf;
        }
    }
}

/// Valid create payload (areas 100 / 40 / 10) in the given state with the given crops
pub fn sample_create_dto(state: &str, crops: &[&str]) -> CreateProducerDto {
    CreateProducerDto {
        name: Name().fake(),
        tax_id: generate_cpf(),
        farm_name: CompanyName().fake(),
        city: CityName().fake(),
        state: state.to_string(),
        total_area: 100.0,
        agricultural_area: 40.0,
        vegetation_area: 10.0,
        crops: crops.iter().map(|c| c.to_string()).collect(),
    }
}

/// Producer routes wired to a fresh in-memory repository
pub fn test_router() -> Router {
    let repository = Arc::new(InMemoryProducerRepository::new());
    routes::routes(
        Arc::new(ProducerService::new(repository.clone())),
        Arc::new(DashboardService::new(repository)),
    )
}
