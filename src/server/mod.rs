//! Server side of the forum.
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, access control and DTO conversion
//! - **Service Layer** (`service/`) - Business logic such as slugging, sanitizing, like toggles and auditing
//! - **Data Layer** (`data/`) - Repositories over SeaORM entities returning domain models
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session wrapper, authorization guard and extractors
//!
//! Supporting modules:
//!
//! - **Configuration** (`config`) - Environment-based configuration
//! - **State** (`state`) - Database pool and templates shared by handlers
//! - **Startup** (`startup`) - Tracing, database, sessions and bootstrap admin
//! - **Seed** (`seed`) - Optional demo content for an empty forum
//! - **Router** (`router`) - Route table and OpenAPI documentation
//! - **Templates** (`template`) - Server-rendered page templates
//!
//! # Request Flow
//!
//! 1. **Router** dispatches the request to a controller
//! 2. **Controller** authorizes through `AuthGuard`, converts DTOs to params and calls a service
//! 3. **Service** applies business rules and records audit entries
//! 4. **Data** queries the database and converts entities to domain models
//! 5. **Controller** converts the result to a DTO or renders a page

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod seed;
pub mod service;
pub mod startup;
pub mod state;
pub mod template;
pub mod util;
