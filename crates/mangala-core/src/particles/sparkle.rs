//! Pulsing sparkle field

use std::f64::consts::TAU;

use rand::Rng;

use crate::math::{Size, Vec2};
use crate::surface::Surface;

/// Phase advance per tick
const PULSE_STEP: f64 = 0.05;

/// Gold and orange
const HUES: [u16; 2] = [45, 30];

/// A single glint
#[derive(Clone, Debug, PartialEq)]
pub struct Sparkle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: f64,
    /// Peak opacity before pulsing
    pub opacity: f64,
    pub hue: u16,
    /// Pulse phase accumulator, in radians
    pub phase: f64,
}

impl Sparkle {
    fn spawn<R: Rng + ?Sized>(bounds: Size, rng: &mut R) -> Self {
        Self {
            position: Vec2::new(rng.gen::<f64>() * bounds.width, rng.gen::<f64>() * bounds.height),
            velocity: Vec2::new((rng.gen::<f64>() - 0.5) * 0.5, (rng.gen::<f64>() - 0.5) * 0.5),
            size: rng.gen::<f64>() * 3.0 + 1.0,
            opacity: rng.gen::<f64>() * 0.5 + 0.5,
            hue: if rng.gen_bool(0.5) { HUES[0] } else { HUES[1] },
            phase: rng.gen::<f64>() * TAU,
        }
    }

    /// Current opacity after pulsing
    #[inline]
    pub fn pulsed_opacity(&self) -> f64 {
        self.opacity * (0.5 + 0.5 * self.phase.sin())
    }

    fn advance(&mut self, bounds: Size) {
        self.position += self.velocity;
        self.phase += PULSE_STEP;

        // Leaving one edge re-enters from the opposite edge
        if self.position.x < 0.0 {
            self.position.x = bounds.width;
        }
        if self.position.x > bounds.width {
            self.position.x = 0.0;
        }
        if self.position.y < 0.0 {
            self.position.y = bounds.height;
        }
        if self.position.y > bounds.height {
            self.position.y = 0.0;
        }
    }

    fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        let opacity = self.pulsed_opacity();
        let p = self.position;
        let arm = self.size * 2.0;

        surface.save();
        surface.set_alpha(opacity);
        surface.fill_radial_glow(
            p,
            self.size,
            &format!("hsla({}, 100%, 60%, 1)", self.hue),
            &format!("hsla({}, 100%, 60%, 0)", self.hue),
        );
        surface.stroke_segments(
            &[
                (Vec2::new(p.x - arm, p.y), Vec2::new(p.x + arm, p.y)),
                (Vec2::new(p.x, p.y - arm), Vec2::new(p.x, p.y + arm)),
            ],
            &format!("hsla({}, 100%, 70%, {})", self.hue, opacity * 0.5),
            1.0,
        );
        surface.restore();
    }
}

/// Fixed-size pool of sparkles covering the surface
///
/// The pool is rebuilt on every resize and otherwise lives forever; sparkles
/// are never removed, only wrapped.
#[derive(Clone, Debug)]
pub struct SparkleField {
    count: usize,
    bounds: Size,
    sparkles: Vec<Sparkle>,
}

impl SparkleField {
    /// Create an empty field that will hold `count` sparkles once sized
    pub fn new(count: usize) -> Self {
        Self {
            count,
            bounds: Size::ZERO,
            sparkles: Vec::with_capacity(count),
        }
    }

    /// Resize the surface and respawn the whole pool
    pub fn resize<R: Rng + ?Sized>(&mut self, bounds: Size, rng: &mut R) {
        self.bounds = bounds;
        self.sparkles.clear();
        self.sparkles
            .extend((0..self.count).map(|_| Sparkle::spawn(bounds, rng)));
    }

    /// Advance every sparkle by one frame
    pub fn step(&mut self) {
        let bounds = self.bounds;
        for sparkle in &mut self.sparkles {
            sparkle.advance(bounds);
        }
    }

    /// Clear the surface and draw the current frame
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear(self.bounds);
        for sparkle in &self.sparkles {
            sparkle.draw(surface);
        }
    }

    pub fn bounds(&self) -> Size {
        self.bounds
    }

    pub fn sparkles(&self) -> &[Sparkle] {
        &self.sparkles
    }

    pub fn len(&self) -> usize {
        self.sparkles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sparkles.is_empty()
    }
}
