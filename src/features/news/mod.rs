//! News feature: short geo-tagged news items submitted by users.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/uploadNews` | Submit a news item |
//! | GET | `/news` | List all news items, newest first |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::NewsService;
