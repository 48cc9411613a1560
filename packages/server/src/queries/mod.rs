//! Reads and writes against the booking tables.
//!
//! Every function takes the persistence handle explicitly. Reads accept any
//! connection (pool or transaction); writes open their own transaction on the
//! pool and commit only when every statement succeeded.

pub mod artist;
pub mod schedule;
pub mod show;
pub mod venue;
