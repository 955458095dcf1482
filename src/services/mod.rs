//! Business logic services

pub mod import_service;
pub mod import_validator;

pub use import_service::ImportService;
pub use import_validator::ImportValidator;
