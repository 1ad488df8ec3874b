pub mod auth_service;
pub mod chat_service;
pub mod fault_estimator;
pub mod request_directory;
