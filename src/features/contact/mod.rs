//! Inbound contact submissions: general messages and per-pet issue
//! reports. Each submission fans out an admin notification in the same
//! transaction.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/contact` | No | Submit a message or issue report |
//! | GET | `/api/admin/contact-submissions` | Admin | List submissions |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ContactService;
