//! Pet reports: submission, public listing and the find-pets search.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/pets/report-lost` | Yes | Submit a lost pet report |
//! | POST | `/api/pets/report-found` | Yes | Submit a found pet report |
//! | GET | `/api/pets` | No | List available pets |
//! | GET | `/api/pets/find` | No | Search found pets |
//! | GET | `/api/pets/{id}` | No | Pet detail |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{PetService, SearchService};
