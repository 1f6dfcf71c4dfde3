use super::geometry::{Point, Size};
use super::tile::{Tile, TileEvent, TrailTiming};

/// Tuning for a trail session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailConfig {
    /// Pointer travel (px) since the last activation that fires the next tile.
    pub threshold: f64,
    /// Per-frame smoothing factor for the cursor the tiles start from.
    pub smoothing: f64,
    pub timing: TrailTiming,
    /// Drop the z counter back to its baseline whenever every tile is at rest.
    pub reset_z_on_idle: bool,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            threshold: 80.0,
            smoothing: 0.1,
            timing: TrailTiming::default(),
            reset_z_on_idle: false,
        }
    }
}

/// A tile that fired during a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trigger {
    pub tile: usize,
    pub z_index: u32,
}

/// Outcome of one `TrailSession::frame` call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    pub trigger: Option<Trigger>,
    /// Tiles whose activation finished this frame.
    pub completed: Vec<usize>,
    /// Tiles whose style must be written back to the DOM.
    pub dirty: Vec<usize>,
}

/// Pointer trail state for one mounted container.
///
/// Pointer events only record the latest sample through `pointer_moved`.
/// All trigger decisions and tile animation happen in `frame`, which the
/// host calls once per display frame.
#[derive(Debug, Clone)]
pub struct TrailSession {
    config: TrailConfig,
    tiles: Vec<Tile>,
    cursor: usize,
    z_counter: u32,
    active_count: usize,
    idle: bool,
    running: bool,
    pointer: Point,
    last_activation: Point,
    smoothed: Point,
}

impl TrailSession {
    pub fn new(pool_size: usize, config: TrailConfig) -> Self {
        Self {
            config,
            tiles: (0..pool_size).map(Tile::new).collect(),
            cursor: 0,
            z_counter: 0,
            active_count: 0,
            idle: true,
            running: false,
            pointer: Point::default(),
            last_activation: Point::default(),
            smoothed: Point::default(),
        }
    }

    pub fn config(&self) -> &TrailConfig {
        &self.config
    }

    pub fn pool_size(&self) -> usize {
        self.tiles.len()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    /// Index of the tile the next trigger will use.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Z-index handed to the most recent activation.
    pub fn z_counter(&self) -> u32 {
        self.z_counter
    }

    pub fn active_count(&self) -> usize {
        self.active_count
    }

    pub fn is_idle(&self) -> bool {
        self.idle
    }

    /// True once the first pointer sample has arrived.
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn pointer(&self) -> Point {
        self.pointer
    }

    pub fn smoothed_pointer(&self) -> Point {
        self.smoothed
    }

    /// Records a tile's bounding box and resets its visible style.
    /// Returns false for an unknown index.
    pub fn measure(&mut self, index: usize, size: Size) -> bool {
        match self.tiles.get_mut(index) {
            Some(tile) => {
                tile.measure(size);
                true
            }
            None => false,
        }
    }

    /// Records the latest pointer sample.
    ///
    /// Returns true for the very first sample, which is when the host should
    /// start driving `frame`.
    pub fn pointer_moved(&mut self, point: Point) -> bool {
        self.pointer = point;
        if self.running {
            return false;
        }
        self.running = true;
        self.smoothed = point;
        self.last_activation = point;
        true
    }

    /// Advances the session to `now` (milliseconds, monotonic).
    pub fn frame(&mut self, now: f64) -> FrameReport {
        let mut report = FrameReport::default();
        if !self.running {
            return report;
        }

        self.smoothed = self.smoothed.lerp(self.pointer, self.config.smoothing);

        if self.pointer.distance(self.last_activation) > self.config.threshold {
            report.trigger = self.trigger_next(now);
            self.last_activation = self.pointer;
        }

        let timing = self.config.timing;
        for tile in &mut self.tiles {
            match tile.advance(now, &timing) {
                TileEvent::Unchanged => {}
                TileEvent::Updated => report.dirty.push(tile.index()),
                TileEvent::Completed => {
                    report.dirty.push(tile.index());
                    report.completed.push(tile.index());
                }
            }
        }
        for _ in &report.completed {
            self.deactivated();
        }

        report
    }

    fn trigger_next(&mut self, now: f64) -> Option<Trigger> {
        let total = self.tiles.len();
        if total == 0 {
            return None;
        }

        self.z_counter += 1;
        let index = self.cursor;
        self.cursor = (self.cursor + 1) % total;

        let replaced = self.tiles[index].activate(now, self.smoothed, self.pointer, self.z_counter);
        if !replaced {
            self.activated();
        }

        log::trace!("trail tile {} activated at z {}", index, self.z_counter);
        Some(Trigger {
            tile: index,
            z_index: self.z_counter,
        })
    }

    fn activated(&mut self) {
        self.active_count += 1;
        self.idle = false;
    }

    fn deactivated(&mut self) {
        self.active_count = self.active_count.saturating_sub(1);
        if self.active_count == 0 {
            self.idle = true;
            if self.config.reset_z_on_idle {
                self.z_counter = 0;
            }
        }
    }
}
