pub mod dashboard_dto;
pub mod producer_dto;

pub use dashboard_dto::{
    ByCropDto, BySoilUseDto, ByStateDto, CropCountDto, DashboardEntryDto, ProducerCountDto,
    SoilUseDto, StateCountDto, TotalAreaDto,
};
pub use producer_dto::{CreateProducerDto, ProducerResponseDto, UpdateProducerDto};
