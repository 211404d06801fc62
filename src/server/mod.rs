//! Server-side API backend and business logic.
//!
//! Backend for entities, users and their ordered address lists. Addresses are completed
//! against a geocoder before they are stored. The backend uses Axum as the web framework
//! and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Address completion and transactional orchestration
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Geocoding** (`geocode/`) - Forward geocoding capability and its Google client
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database, geocoder)
//! - **Startup** (`startup`) - Database connection, migrations, HTTP client and CORS
//! - **Router** (`router`) - Axum route configuration
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** converts DTOs to params, calls service
//! 3. **Service** completes addresses, then runs the writes in one transaction
//! 4. **Data** queries database, converts entities to domain models
//! 5. **Controller** converts domain model to DTO, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod geocode;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
