pub mod auth_controller;
pub mod mechanic_service_controller;
pub mod notification_controller;
pub mod request_controller;
pub mod vehicle_controller;
