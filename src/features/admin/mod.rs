//! Admin moderation dashboard: the request queue, status decisions and
//! summary counts.
//!
//! ## Endpoints (mounted under `/api/admin`)
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/requests` | Moderation queue, filter by status |
//! | GET | `/requests/{id}` | Request detail with pet and reporter |
//! | PATCH | `/requests/{id}/status` | Apply a moderation decision |
//! | GET | `/summary` | Request/pet/notification counts |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::AdminService;
