//! Server-side API backend and business logic.
//!
//! This module contains the complete backend: the JSON REST API under `/api`, the
//! business rules behind it and the database access. Axum serves the API, SeaORM
//! talks to SQLite and bearer tokens (JWT) identify callers.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business rules between controllers and the data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer token guard and JSON body extraction
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool, token service)
//! - **Startup** (`startup`) - Database connection, migrations and CORS
//! - **Router** (`router`) - Route table, security headers and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** authenticates the caller through `AuthGuard`, converts DTOs to params
//! 3. **Service** applies business rules and calls repositories
//! 4. **Data** queries the database, converts entities to domain models
//! 5. **Controller** converts domain models to DTOs and returns the response
//!
//! # Feature Gates
//!
//! This module is only available with the `server` feature flag enabled.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
