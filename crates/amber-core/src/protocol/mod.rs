//! Settings service wire format.
//!
//! - **`messages`** – JSON bodies returned by the service (snake_case keys, as
//!   the backend emits them).
//! - **`routes`** – URL paths of the endpoints the client calls.

pub mod messages;
pub mod routes;
