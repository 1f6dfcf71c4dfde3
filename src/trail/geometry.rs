/// A position in container-local CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Moves `self` a fraction `n` of the way toward `target`.
    pub fn lerp(self, target: Point, n: f64) -> Point {
        Point::new(lerp(self.x, target.x, n), lerp(self.y, target.y, n))
    }

    pub fn offset(self, by: Point) -> Point {
        Point::new(self.x - by.x, self.y - by.y)
    }
}

/// A measured bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn half(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

pub fn lerp(a: f64, b: f64, n: f64) -> f64 {
    (1.0 - n) * a + n * b
}

/// Easing curves used by tile activations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ease {
    Linear,
    Power1Out,
    Power3Out,
}

impl Ease {
    /// Maps linear progress `t` to eased progress. Input is clamped to `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power1Out => 1.0 - (1.0 - t).powi(2),
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(30.0, 40.0);
        assert_eq!(a.distance(b), 50.0);
        assert_eq!(b.distance(a), 50.0);
    }

    #[test]
    fn lerp_moves_a_tenth_of_the_way() {
        let p = Point::new(0.0, 100.0).lerp(Point::new(100.0, 0.0), 0.1);
        assert!((p.x - 10.0).abs() < 1e-9);
        assert!((p.y - 90.0).abs() < 1e-9);
    }

    #[test]
    fn easing_hits_both_ends() {
        for ease in [Ease::Linear, Ease::Power1Out, Ease::Power3Out] {
            assert_eq!(ease.apply(0.0), 0.0);
            assert_eq!(ease.apply(1.0), 1.0);
            assert_eq!(ease.apply(2.0), 1.0);
            assert_eq!(ease.apply(-1.0), 0.0);
        }
        // out-curves run ahead of linear progress
        assert!(Ease::Power3Out.apply(0.5) > Ease::Power1Out.apply(0.5));
        assert!(Ease::Power1Out.apply(0.5) > Ease::Linear.apply(0.5));
    }
}
