//! Data access layer.
//!
//! Each module wraps one external store and converts its raw representation into
//! domain models at the boundary:
//!
//! - `stats` - Read-only stats API (rooms, players, room details)
//! - `message_id` - The file holding the status message's id
//! - `discord` - The Discord channel that displays the status message

pub mod discord;
pub mod message_id;
pub mod stats;

#[cfg(test)]
mod test;
