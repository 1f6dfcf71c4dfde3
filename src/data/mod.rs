pub mod motion_grid;
pub mod trail_item;

pub use motion_grid::{gallery_items, motion_grid_items, MotionGridItem};
pub use trail_item::TrailItem;
