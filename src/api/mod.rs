//! # API Module
//!
//! HTTP endpoints of the Live Radio backend service, the remote side of
//! [`RemoteStorage`](crate::storage::RemoteStorage).
//!
//! ## Endpoints
//!
//! ### Sessions
//!
//! - `POST /api/auth/sign-in` ([`sign_in`]) - trades a user name and the
//!   service access key for a session token
//! - `GET /api/auth/session` ([`session_info`]) - describes the caller's session
//! - `DELETE /api/auth/session` ([`sign_out`]) - revokes the caller's session
//!
//! ### Collections
//!
//! `{collection}` is `favorites` or `recent-stations`; anything else is 404.
//!
//! - `GET /api/{collection}` ([`list_stations`])
//! - `POST /api/{collection}` ([`save_station`]) - body is a station
//! - `DELETE /api/{collection}?id=<id>` ([`delete_station`])
//!
//! ### Monitoring
//!
//! - `GET /health` ([`health`])
//!
//! ## Request Pipeline
//!
//! Collection requests pass the same checks in order: session
//! ([`AuthUser`] extractor), collection name, station validation (POST only),
//! then the handler. Each failed check answers with `{ "message": ... }` and
//! the matching status (401, 404, 400). Unmatched routes answer 404 the same
//! way.

mod error;
mod health;
mod session;
mod stations;

pub use error::ApiError;
pub use health::health;
pub use health::not_found;
pub use session::AuthUser;
pub use session::session_info;
pub use session::sign_in;
pub use session::sign_out;
pub use stations::delete_station;
pub use stations::list_stations;
pub use stations::save_station;
