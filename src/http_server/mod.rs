//! # SS-Mart HTTP Server Module
//!
//! Thin HTTP adapter over the product store. Translates requests into
//! store calls and store results into the standard response envelope;
//! no domain logic lives here.
//!
//! # Endpoints
//!
//! - `GET /` - Service banner
//! - `GET /health` - Health check
//! - `GET /api/products` - List products
//! - `GET /api/products/:id` - Get one product
//! - `POST /api/products` - Create a product
//! - `PUT /api/products/:id` - Update a product
//! - `DELETE /api/products/:id` - Delete a product

pub mod config;
pub mod errors;
pub mod health_routes;
pub mod product_routes;
pub mod response;
pub mod server;

pub use config::{ConfigError, HttpServerConfig};
pub use errors::{ApiError, ApiResult};
pub use response::ApiResponse;
pub use server::HttpServer;
