//! Remote user records and the source that fetches them.
//!
//! DESIGN
//! ======
//! `record` holds the wire shape of one user as the API returns it. `fetch`
//! owns the single outbound GET and its error taxonomy. Nothing here knows
//! about rendering or board state.

pub mod fetch;
pub mod record;

pub use fetch::{FetchError, HttpUserSource, UserSource};
pub use record::UserRecord;
