//! Rolling hills drawn behind the page.

use crate::trail::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HillLayer {
    /// Resting ridge line as a fraction of the canvas height from the top.
    pub base: f64,
    /// Peak displacement as a fraction of the canvas height.
    pub amplitude: f64,
    /// Horizontal period in CSS pixels.
    pub wavelength: f64,
    /// Radians per second.
    pub speed: f64,
    pub phase: f64,
    pub color: &'static str,
}

/// Back to front.
pub const HILL_LAYERS: [HillLayer; 4] = [
    HillLayer {
        base: 0.52,
        amplitude: 0.05,
        wavelength: 520.0,
        speed: 0.12,
        phase: 0.0,
        color: "rgba(147, 51, 234, 0.18)",
    },
    HillLayer {
        base: 0.62,
        amplitude: 0.06,
        wavelength: 410.0,
        speed: -0.16,
        phase: 1.3,
        color: "rgba(106, 77, 252, 0.24)",
    },
    HillLayer {
        base: 0.72,
        amplitude: 0.05,
        wavelength: 330.0,
        speed: 0.22,
        phase: 2.1,
        color: "rgba(79, 70, 229, 0.32)",
    },
    HillLayer {
        base: 0.84,
        amplitude: 0.04,
        wavelength: 260.0,
        speed: -0.28,
        phase: 0.7,
        color: "rgba(67, 56, 202, 0.42)",
    },
];

pub const SKY_TOP: &str = "#ffffff";
pub const SKY_BOTTOM: &str = "#efeaff";

/// Y coordinate of the ridge at `x` after `t` seconds.
pub fn ridge_height(layer: &HillLayer, x: f64, height: f64, t: f64) -> f64 {
    if layer.wavelength <= 0.0 {
        return layer.base * height;
    }
    let k = std::f64::consts::TAU / layer.wavelength;
    let primary = (x * k + t * layer.speed + layer.phase).sin();
    let secondary = 0.5 * (x * k * 2.3 - t * layer.speed * 0.7 + layer.phase * 1.7).sin();
    let wave = (primary + secondary) / 1.5;
    layer.base * height - layer.amplitude * height * wave
}

/// Ridge samples every `step` pixels, always including both edges.
pub fn ridge_points(layer: &HillLayer, width: f64, height: f64, t: f64, step: f64) -> Vec<Point> {
    if width <= 0.0 || height <= 0.0 {
        return Vec::new();
    }
    let step = step.max(1.0);
    let count = (width / step).ceil() as usize;
    (0..=count)
        .map(|i| {
            let x = (i as f64 * step).min(width);
            Point::new(x, ridge_height(layer, x, height, t))
        })
        .collect()
}
