pub mod account;
pub mod mechanic_service;
pub mod notification;
pub mod service_request;
pub mod vehicle;
