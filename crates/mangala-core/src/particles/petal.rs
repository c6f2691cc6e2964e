//! Falling marigold petals

use std::f64::consts::TAU;

use rand::Rng;

use crate::math::{Size, Vec2};
use crate::surface::Surface;

/// Chance per tick of releasing a new petal while under the cap
pub const PETAL_SPAWN_CHANCE: f64 = 0.05;

/// Distance above the top edge where petals appear and below the bottom edge
/// where they are dropped
const EDGE_MARGIN: f64 = 20.0;

const ORANGE: &str = "#FFA500";
const GOLD: &str = "#FFD700";
const HIGHLIGHT: &str = "rgba(255, 255, 255, 0.3)";

/// A single falling petal
#[derive(Clone, Debug, PartialEq)]
pub struct Petal {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: f64,
    pub rotation: f64,
    pub rotation_speed: f64,
    pub opacity: f64,
    pub color: &'static str,
}

impl Petal {
    fn spawn<R: Rng + ?Sized>(width: f64, rng: &mut R) -> Self {
        Self {
            position: Vec2::new(rng.gen::<f64>() * width, -EDGE_MARGIN),
            velocity: Vec2::new((rng.gen::<f64>() - 0.5) * 2.0, rng.gen::<f64>() * 2.0 + 1.0),
            size: rng.gen::<f64>() * 15.0 + 10.0,
            rotation: rng.gen::<f64>() * TAU,
            rotation_speed: (rng.gen::<f64>() - 0.5) * 0.1,
            opacity: rng.gen::<f64>() * 0.5 + 0.5,
            color: if rng.gen_bool(0.7) { ORANGE } else { GOLD },
        }
    }

    /// Fall, drift sideways with a sway keyed to height, and spin
    fn advance(&mut self) {
        self.position.x += self.velocity.x + (self.position.y * 0.01).sin() * 0.5;
        self.position.y += self.velocity.y;
        self.rotation += self.rotation_speed;
    }

    fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        let size = self.size;
        surface.save();
        surface.translate(self.position);
        surface.rotate(self.rotation);
        surface.set_alpha(self.opacity);
        surface.fill_ellipse(Vec2::ZERO, Vec2::new(size, size * 0.6), self.color);
        surface.fill_ellipse(
            Vec2::new(-size * 0.3, -size * 0.2),
            Vec2::new(size * 0.3, size * 0.2),
            HIGHLIGHT,
        );
        surface.restore();
    }
}

/// Capped, continuously replenished shower of petals
#[derive(Clone, Debug)]
pub struct PetalShower {
    cap: usize,
    bounds: Size,
    petals: Vec<Petal>,
}

impl PetalShower {
    /// Create an empty shower holding at most `cap` petals
    pub fn new(cap: usize) -> Self {
        Self {
            cap,
            bounds: Size::ZERO,
            petals: Vec::with_capacity(cap),
        }
    }

    /// Resize the surface; petals in flight are kept
    pub fn resize(&mut self, bounds: Size) {
        self.bounds = bounds;
    }

    /// Maybe release a petal, then advance all petals and drop the ones that
    /// left through the bottom edge
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if rng.gen_bool(PETAL_SPAWN_CHANCE) && self.petals.len() < self.cap {
            self.petals.push(Petal::spawn(self.bounds.width, rng));
        }

        let floor = self.bounds.height + EDGE_MARGIN;
        self.petals.retain_mut(|petal| {
            petal.advance();
            petal.position.y <= floor
        });
    }

    /// Clear the surface and draw the current frame
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear(self.bounds);
        for petal in &self.petals {
            petal.draw(surface);
        }
    }

    pub fn petals(&self) -> &[Petal] {
        &self.petals
    }

    pub fn len(&self) -> usize {
        self.petals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.petals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawCall, RecordingSurface};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_cap_never_exceeded() {
        let mut rng = StdRng::seed_from_u64(11);
        // Tall surface so petals stay on screen and pressure the cap
        let mut shower = PetalShower::new(15);
        shower.resize(Size::new(400.0, 100_000.0));
        for _ in 0..5_000 {
            shower.step(&mut rng);
            assert!(shower.len() <= 15);
        }
        assert_eq!(shower.len(), 15);
    }

    #[test]
    fn test_petals_removed_below_floor() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut shower = PetalShower::new(30);
        shower.resize(Size::new(300.0, 50.0));
        for _ in 0..2_000 {
            shower.step(&mut rng);
        }
        assert!(shower.petals().iter().all(|p| p.position.y <= 70.0));
    }

    #[test]
    fn test_spawn_above_top_edge() {
        let mut rng = StdRng::seed_from_u64(9);
        let p = Petal::spawn(500.0, &mut rng);
        assert_eq!(p.position.y, -20.0);
        assert!((0.0..500.0).contains(&p.position.x));
        assert!((10.0..25.0).contains(&p.size));
        assert!((1.0..3.0).contains(&p.velocity.y));
        assert!(p.color == ORANGE || p.color == GOLD);
    }

    #[test]
    fn test_advance_sway() {
        let mut p = Petal {
            position: Vec2::new(100.0, 0.0),
            velocity: Vec2::new(0.0, 2.0),
            size: 10.0,
            rotation: 0.0,
            rotation_speed: 0.05,
            opacity: 1.0,
            color: GOLD,
        };
        // sin(0) = 0: no sway on the first tick
        p.advance();
        assert!((p.position.x - 100.0).abs() < 1e-9);
        assert!((p.position.y - 2.0).abs() < 1e-9);
        assert!((p.rotation - 0.05).abs() < 1e-9);
    }

    #[test]
    fn test_render_petal_with_highlight() {
        let mut shower = PetalShower::new(1);
        shower.resize(Size::new(100.0, 100.0));
        shower.petals.push(Petal {
            position: Vec2::new(10.0, 10.0),
            velocity: Vec2::ZERO,
            size: 10.0,
            rotation: 0.5,
            rotation_speed: 0.0,
            opacity: 0.7,
            color: ORANGE,
        });

        let mut surface = RecordingSurface::new();
        shower.render(&mut surface);
        assert!(surface.is_balanced());
        assert!(surface.calls.contains(&DrawCall::Ellipse {
            center: Vec2::ZERO,
            radii: Vec2::new(10.0, 6.0),
            color: ORANGE.to_string(),
        }));
        assert!(surface.calls.contains(&DrawCall::Ellipse {
            center: Vec2::new(-3.0, -2.0),
            radii: Vec2::new(3.0, 2.0),
            color: HIGHLIGHT.to_string(),
        }));
    }
}
