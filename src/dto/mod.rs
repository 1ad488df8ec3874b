pub mod auth_dto;
pub mod common;
pub mod notification_dto;
pub mod request_dto;
pub mod service_dto;
pub mod vehicle_dto;
