//! # CLI Module
//!
//! Command implementations behind the `liveradio` binary. Each command
//! receives the already constructed [`AppStorage`](crate::storage::AppStorage)
//! or [`ApiClient`](crate::client::ApiClient) from `main`, prints its outcome
//! with the console macros, and exits non-zero on failure.
//!
//! ## Commands
//!
//! ### Sessions
//!
//! - [`sign_in`] - trades user name and access key for a server session
//! - [`sign_out`] - revokes the session and falls back to local storage
//! - [`status`] - shows which storage is in use and whether the server agrees
//!
//! ### Stations
//!
//! - [`list_stations`] - favorites or recent stations as a table
//! - [`add_station`] / [`remove_station`] - change a collection
//!
//! Station commands never pick a backend themselves; the storage facade
//! routes them to the server when signed in and to this device otherwise.
//!
//! ### Server
//!
//! - [`serve`] - runs the backend service
//!
//! ## Usage Patterns
//!
//! ```bash
//! liveradio favorites add --id s1 --name "Radio One" --url https://radio.one/live
//! liveradio favorites                     # stored on this device
//! liveradio auth sign-in --user alice     # key from LIVERADIO_ACCESS_KEY
//! liveradio favorites                     # now served by the server
//! liveradio recent remove s1
//! ```

mod auth;
mod serve;
mod stations;

pub use auth::sign_in;
pub use auth::sign_out;
pub use auth::status;
pub use serve::serve;
pub use stations::add_station;
pub use stations::list_stations;
pub use stations::remove_station;
