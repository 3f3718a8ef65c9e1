//! # SocialNet Core
//!
//! The domain layer of the SocialNet backend.
//! This crate contains pure business logic with zero infrastructure dependencies:
//! validated entities, the validation rules themselves, the repository and auth
//! ports, and the services that orchestrate ownership-checked post mutations.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;
pub mod validation;

pub use error::DomainError;
