//! Domain models and stats API wire types.
//!
//! - `api` - Serde DTOs mirroring the stats API's JSON
//! - `player` - Normalized player names
//! - `room` - Rooms as listed by the API and as resolved per cycle
//! - `snapshot` - The reconciled point-in-time view consumed by the renderer
//! - `status` - The rendered status document and its Discord embed form

pub mod api;
pub mod player;
pub mod room;
pub mod snapshot;
pub mod status;
