//! Hazards feature: user-submitted hazard reports with one attached file.
//!
//! The attached file lands in the local upload store; list responses rewrite
//! the stored relative path into an absolute URL per request.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/uploadHazard` | Submit a hazard report (multipart) |
//! | GET | `/hazards` | List all hazard reports, newest first |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::HazardService;
