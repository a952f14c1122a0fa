//! Environmental-crime reports.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/reports` | No | List reports, filtered by `type`, `status`, `urgency`, `search` |
//! | POST | `/api/reports` | No | Submit a new report |
//! | GET | `/api/reports/{id}` | No | Get a single report |
//! | PATCH | `/api/reports/{id}/status` | No | Record a review status change |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod seed;
pub mod services;

pub use services::ReportService;
