pub mod admin_routes;
pub mod auth_routes;
pub mod diagnosis_routes;
pub mod notification_routes;
pub mod request_routes;
pub mod service_routes;
pub mod vehicle_routes;
