//! Roadside vehicle service marketplace backend
//!
//! Library surface used by the binary in `main.rs` and by the integration
//! tests.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
