//! Business logic between the stats API and the Discord status message.
//!
//! - `snapshot` - Fetches rooms and players and reconciles them into a `Snapshot`
//! - `render` - Turns a `Snapshot` into a `StatusDocument`
//! - `status_message` - Keeps the single status message alive and up to date
//! - `status` - The fetch, render and publish pipeline shared by the poll loop
//!   and the manual status command

pub mod render;
pub mod snapshot;
pub mod status;
pub mod status_message;

#[cfg(test)]
mod test;
