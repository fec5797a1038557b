//! Server-side API backend.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, input validation and DTO conversion
//! - **Service Layer** (`service/`) - Slug resolution, orchestration and tree assembly
//! - **Data Layer** (`data/`) - Read-only SeaORM queries returning entities and entity bundles
//! - **Model Layer** (`model/`) - Domain models and listing parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Validating extractors for slugs and pagination
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database connection)
//! - **Startup** (`startup`) - Database connection, migrations and the middleware stack
//! - **Router** (`router`) - Route table and OpenAPI document
//! - **Util** (`util`) - Pagination arithmetic and parent/child forest linking
//!
//! # Request Flow
//!
//! 1. **Router** matches the request; CORS, compression, tracing and rate limiting wrap it
//! 2. **Controller** extracts and validates path and query parameters, calls a service
//! 3. **Service** resolves slugs, calls repositories, converts entities to domain models
//! 4. **Data** queries the database, restricted to published articles and pages
//! 5. **Controller** converts domain models to DTOs inside the `{success, data, meta}` envelope

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

#[cfg(test)]
mod test;
