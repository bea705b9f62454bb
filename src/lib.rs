// Library root
// -----------
// Client for the LawVriksh beta programme. The binary (`main.rs`) wraps
// these modules in an interactive menu.
//
// Module responsibilities:
// - `api`: HTTP calls to the beta endpoints (signup, stats, health).
// - `mock`: in-process fake backend used when mock mode is on.
// - `config`: environment-driven client configuration.
// - `error`: normalizes every failure into one readable message.
// - `models`: request/response shapes.
// - `validation` / `share`: local input checks, name formatting and the
//   share message.
// - `ui`: terminal flows built on `dialoguer`.
pub mod api;
pub mod config;
pub mod error;
pub mod mock;
pub mod models;
pub mod share;
pub mod ui;
pub mod validation;

pub use api::BetaClient;
pub use config::ClientConfig;
pub use error::{BetaError, Result};
pub use models::{BetaStats, BetaUserCreate, BetaUserResponse, HealthStatus, ValidationReport};
