//! Rift Status Test Utils
//!
//! Provides shared testing utilities for the rift-status bot. The crate offers JSON
//! factories shaped like the stats API's responses and a builder for scratch
//! directories used by message id file tests.
//!
//! # Overview
//!
//! The test utilities consist of these components:
//! - **stats**: JSON factories for rooms, players and room details (both shapes)
//! - **StatsFixture**: Fluent builder describing a whole stats API universe
//! - **TestBuilder**: Fluent builder for configuring a scratch directory
//! - **TestContext**: Scratch directory removed again when the test ends
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, stats::StatsFixture};
//!
//! #[tokio::test]
//! async fn test_status_cycle() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_message_id("1234").build()?;
//!     let fixture = StatsFixture::new()
//!         .with_room(1, "Lobby A", 2, 12)
//!         .with_players(&["1-Alice", "2-Bob"]);
//!
//!     // Point the code under test at test.message_id_file()...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod stats;
