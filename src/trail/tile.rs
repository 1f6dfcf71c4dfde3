use super::geometry::{Ease, Point, Size};

/// Durations (milliseconds) and targets for one tile activation.
///
/// A tile glides from the smoothed cursor to the raw pointer over
/// `move_duration`, holds at full opacity until `fade_delay`, then fades and
/// shrinks toward `fade_scale` over `fade_duration`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailTiming {
    pub move_duration: f64,
    pub move_ease: Ease,
    pub fade_delay: f64,
    pub fade_duration: f64,
    pub fade_ease: Ease,
    pub fade_scale: f64,
}

impl Default for TrailTiming {
    fn default() -> Self {
        Self {
            move_duration: 400.0,
            move_ease: Ease::Power1Out,
            fade_delay: 600.0,
            fade_duration: 800.0,
            fade_ease: Ease::Power3Out,
            fade_scale: 0.2,
        }
    }
}

impl TrailTiming {
    pub fn total(&self) -> f64 {
        (self.fade_delay + self.fade_duration).max(self.move_duration)
    }
}

/// The visual state written to a tile element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileStyle {
    pub x: f64,
    pub y: f64,
    pub opacity: f64,
    pub scale: f64,
    pub z_index: u32,
}

impl TileStyle {
    /// Resting state: untransformed and invisible.
    pub const HIDDEN: TileStyle = TileStyle {
        x: 0.0,
        y: 0.0,
        opacity: 0.0,
        scale: 1.0,
        z_index: 0,
    };

    pub fn transform(&self) -> String {
        format!(
            "translate3d({:.2}px, {:.2}px, 0) scale({:.4})",
            self.x, self.y, self.scale
        )
    }
}

impl Default for TileStyle {
    fn default() -> Self {
        Self::HIDDEN
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TilePhase {
    Idle,
    Activating,
    Fading,
}

/// One in-flight activation. Positions are top-left corners, already offset
/// by half the tile size at trigger time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Activation {
    pub started_at: f64,
    pub from: Point,
    pub to: Point,
    pub z_index: u32,
}

impl Activation {
    fn sample(&self, elapsed: f64, timing: &TrailTiming) -> TileStyle {
        let travel = if timing.move_duration > 0.0 {
            timing.move_ease.apply(elapsed / timing.move_duration)
        } else {
            1.0
        };
        let fade = if elapsed < timing.fade_delay {
            0.0
        } else if timing.fade_duration > 0.0 {
            timing
                .fade_ease
                .apply((elapsed - timing.fade_delay) / timing.fade_duration)
        } else {
            1.0
        };
        TileStyle {
            x: self.from.x + (self.to.x - self.from.x) * travel,
            y: self.from.y + (self.to.y - self.from.y) * travel,
            opacity: 1.0 - fade,
            scale: 1.0 + (timing.fade_scale - 1.0) * fade,
            z_index: self.z_index,
        }
    }
}

/// What happened to a tile during one `advance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileEvent {
    Unchanged,
    Updated,
    Completed,
}

/// A pooled trail element.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    index: usize,
    size: Size,
    phase: TilePhase,
    activation: Option<Activation>,
    style: TileStyle,
}

impl Tile {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            size: Size::default(),
            phase: TilePhase::Idle,
            activation: None,
            style: TileStyle::HIDDEN,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn phase(&self) -> TilePhase {
        self.phase
    }

    pub fn style(&self) -> TileStyle {
        self.style
    }

    pub fn activation(&self) -> Option<&Activation> {
        self.activation.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.activation.is_some()
    }

    /// Stores a fresh bounding box and snaps the tile back to its hidden
    /// style. A running activation is left alone and repaints the tile on
    /// the next frame.
    pub fn measure(&mut self, size: Size) {
        self.size = size;
        self.style = TileStyle::HIDDEN;
    }

    /// Starts a new activation centred on `from`, gliding toward `to`.
    /// Returns true if an unfinished activation was replaced.
    pub fn activate(&mut self, now: f64, from: Point, to: Point, z_index: u32) -> bool {
        let half = self.size.half();
        let replaced = self.activation.is_some();
        let activation = Activation {
            started_at: now,
            from: from.offset(half),
            to: to.offset(half),
            z_index,
        };
        self.style = TileStyle {
            x: activation.from.x,
            y: activation.from.y,
            opacity: 1.0,
            scale: 1.0,
            z_index,
        };
        self.activation = Some(activation);
        self.phase = TilePhase::Activating;
        replaced
    }

    /// Samples the running activation at `now`.
    pub fn advance(&mut self, now: f64, timing: &TrailTiming) -> TileEvent {
        let Some(activation) = self.activation else {
            return TileEvent::Unchanged;
        };
        let elapsed = (now - activation.started_at).max(0.0);
        self.style = activation.sample(elapsed, timing);

        if elapsed >= timing.total() {
            self.activation = None;
            self.phase = TilePhase::Idle;
            return TileEvent::Completed;
        }

        self.phase = if elapsed < timing.fade_delay {
            TilePhase::Activating
        } else {
            TilePhase::Fading
        };
        TileEvent::Updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sized_tile() -> Tile {
        let mut tile = Tile::new(0);
        tile.measure(Size::new(100.0, 60.0));
        tile
    }

    #[test]
    fn activation_centres_tile_on_pointer() {
        let mut tile = sized_tile();
        tile.activate(0.0, Point::new(200.0, 200.0), Point::new(300.0, 200.0), 1);
        let style = tile.style();
        assert_eq!((style.x, style.y), (150.0, 170.0));
        assert_eq!(style.opacity, 1.0);
        assert_eq!(style.z_index, 1);
        assert_eq!(tile.phase(), TilePhase::Activating);
    }

    #[test]
    fn walks_through_every_phase() {
        let timing = TrailTiming::default();
        let mut tile = sized_tile();
        tile.activate(1_000.0, Point::new(0.0, 0.0), Point::new(100.0, 0.0), 3);

        assert_eq!(tile.advance(1_400.0, &timing), TileEvent::Updated);
        assert_eq!(tile.phase(), TilePhase::Activating);
        assert_eq!(tile.style().x, 50.0);
        assert_eq!(tile.style().opacity, 1.0);

        assert_eq!(tile.advance(2_000.0, &timing), TileEvent::Updated);
        assert_eq!(tile.phase(), TilePhase::Fading);
        let fading = tile.style();
        assert!(fading.opacity < 1.0 && fading.opacity > 0.0);
        assert!(fading.scale < 1.0 && fading.scale > timing.fade_scale);

        assert_eq!(tile.advance(2_400.0, &timing), TileEvent::Completed);
        assert_eq!(tile.phase(), TilePhase::Idle);
        assert_eq!(tile.style().opacity, 0.0);
        assert!((tile.style().scale - timing.fade_scale).abs() < 1e-9);
        assert!(!tile.is_active());

        assert_eq!(tile.advance(2_500.0, &timing), TileEvent::Unchanged);
    }

    #[test]
    fn retrigger_replaces_running_activation() {
        let timing = TrailTiming::default();
        let mut tile = sized_tile();
        assert!(!tile.activate(0.0, Point::new(0.0, 0.0), Point::new(10.0, 0.0), 1));
        tile.advance(900.0, &timing);
        assert_eq!(tile.phase(), TilePhase::Fading);

        assert!(tile.activate(900.0, Point::new(500.0, 500.0), Point::new(500.0, 500.0), 2));
        tile.advance(900.0, &timing);
        let style = tile.style();
        assert_eq!(style.opacity, 1.0);
        assert_eq!(style.scale, 1.0);
        assert_eq!(style.z_index, 2);
        assert_eq!((style.x, style.y), (450.0, 470.0));
        assert_eq!(tile.phase(), TilePhase::Activating);
    }

    #[test]
    fn measure_snaps_to_hidden_but_keeps_running() {
        let timing = TrailTiming::default();
        let mut tile = sized_tile();
        tile.activate(0.0, Point::new(0.0, 0.0), Point::new(0.0, 0.0), 1);
        tile.measure(Size::new(40.0, 40.0));
        assert_eq!(tile.style(), TileStyle::HIDDEN);
        assert!(tile.is_active());
        assert_eq!(tile.advance(100.0, &timing), TileEvent::Updated);
        assert_eq!(tile.style().opacity, 1.0);
    }

    #[test]
    fn transform_is_css() {
        let style = TileStyle {
            x: 1.5,
            y: -2.0,
            opacity: 1.0,
            scale: 0.2,
            z_index: 4,
        };
        assert_eq!(style.transform(), "translate3d(1.50px, -2.00px, 0) scale(0.2000)");
    }
}
