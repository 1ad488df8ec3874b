pub mod account_repository;
pub mod admin_repository;
pub mod mechanic_service_repository;
pub mod notification_repository;
pub mod request_repository;
pub mod vehicle_repository;
