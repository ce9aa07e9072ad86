//! Moderation requests: a user's own reports and the admin state machine.
//!
//! A request is the moderation record of a report. Its owner may edit or
//! withdraw it while it is still pending; admins decide it via
//! [`services::ModerationService`].
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/requests` | Yes | List own reports |
//! | GET | `/api/requests/{id}` | Yes | Report detail (owner/admin) |
//! | PUT | `/api/requests/{id}` | Yes | Edit while pending |
//! | DELETE | `/api/requests/{id}` | Yes | Withdraw while pending |
//! | GET | `/api/requests/{id}/history` | Yes | Activity trail |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{ModerationService, RequestService};
