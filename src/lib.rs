// src/lib.rs

// Gestor do catálogo de um restaurante: pratos, menus, eventos e ajustes,
// cada coleção gravada no seu próprio slot.
pub mod common;
pub mod config;
pub mod db;
pub mod models;
pub mod services;

pub use config::{AppConfig, AppState};
pub use db::{JsonStore, Stored};
