//! Outage records, crew status lookup, and the client-facing response.

mod crew;
mod fixtures;
mod models;
mod response;

pub use crew::*;
pub use fixtures::*;
pub use models::*;
pub use response::*;
