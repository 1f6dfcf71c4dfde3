//! Pointer trail animator.
//!
//! A fixed pool of tiles is reused in round-robin order. Whenever the pointer
//! has travelled further than the configured threshold since the last
//! activation, the next tile pops up under the pointer, glides toward it and
//! fades away. Everything here is plain state; the DOM binding lives in
//! `components::image_trail`.

pub mod geometry;
pub mod session;
pub mod tile;

pub use geometry::{Ease, Point, Size};
pub use session::{FrameReport, TrailConfig, TrailSession, Trigger};
pub use tile::{Tile, TileEvent, TilePhase, TileStyle, TrailTiming};
