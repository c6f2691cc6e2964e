//! Firework bursts
//!
//! A burst is computed here and rendered as DOM fragments by the browser
//! crate; each fragment's CSS animation carries it from the center to its
//! end offset while fading out.

use std::f64::consts::TAU;

use rand::Rng;

use crate::math::{Size, Vec2};
use crate::timing::FIREWORK_STAGGER_MS;

/// Palette fragments draw from
pub const FIREWORK_COLORS: [&str; 5] = ["#FFD700", "#FFA500", "#FF6347", "#FF1493", "#00CED1"];

/// One spark of a burst
#[derive(Clone, Debug, PartialEq)]
pub struct Fragment {
    /// Final offset from the burst center, in CSS pixels
    pub offset: Vec2,
    pub color: &'static str,
}

impl Fragment {
    /// CSS transform moving the fragment to its final offset
    pub fn transform(&self) -> String {
        format!("translate({}px, {}px)", self.offset.x, self.offset.y)
    }
}

/// A radial explosion around a center point
#[derive(Clone, Debug, PartialEq)]
pub struct FireworkBurst {
    pub center: Vec2,
    pub fragments: Vec<Fragment>,
}

impl FireworkBurst {
    /// Spread `count` fragments at even angular steps around `center`
    pub fn new<R: Rng + ?Sized>(center: Vec2, count: usize, rng: &mut R) -> Self {
        let fragments = (0..count)
            .map(|i| {
                let angle = TAU * i as f64 / count as f64;
                let speed = 50.0 + rng.gen::<f64>() * 50.0;
                Fragment {
                    offset: Vec2::from_polar(angle, speed),
                    color: FIREWORK_COLORS[rng.gen_range(0..FIREWORK_COLORS.len())],
                }
            })
            .collect();
        Self { center, fragments }
    }
}

/// A burst together with its delay from the show trigger
#[derive(Clone, Debug, PartialEq)]
pub struct ScheduledBurst {
    pub delay_ms: u32,
    pub burst: FireworkBurst,
}

/// Plans staggered bursts across the upper half of the viewport
#[derive(Clone, Copy, Debug)]
pub struct FireworkShow {
    /// Fragments per burst
    pub fragments: usize,
}

impl FireworkShow {
    pub fn new(fragments: usize) -> Self {
        Self { fragments }
    }

    /// Plan `count` bursts, one every [`FIREWORK_STAGGER_MS`], each at a random
    /// point in the upper half of `viewport`
    pub fn plan<R: Rng + ?Sized>(&self, count: usize, viewport: Size, rng: &mut R) -> Vec<ScheduledBurst> {
        (0..count)
            .map(|i| {
                let center = Vec2::new(
                    rng.gen::<f64>() * viewport.width,
                    rng.gen::<f64>() * viewport.height * 0.5,
                );
                ScheduledBurst {
                    delay_ms: i as u32 * FIREWORK_STAGGER_MS,
                    burst: FireworkBurst::new(center, self.fragments, rng),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_burst_even_angles() {
        let mut rng = StdRng::seed_from_u64(1);
        let burst = FireworkBurst::new(Vec2::new(10.0, 10.0), 4, &mut rng);
        assert_eq!(burst.fragments.len(), 4);

        // i = 0 points right, i = 1 points down (screen y grows downward)
        let right = burst.fragments[0].offset;
        assert!(right.x > 0.0 && right.y.abs() < 1e-9);
        let down = burst.fragments[1].offset;
        assert!(down.x.abs() < 1e-9 && down.y > 0.0);
    }

    #[test]
    fn test_burst_speed_range() {
        let mut rng = StdRng::seed_from_u64(2);
        let burst = FireworkBurst::new(Vec2::ZERO, 40, &mut rng);
        for fragment in &burst.fragments {
            let speed = fragment.offset.length();
            assert!((50.0 - 1e-9..100.0).contains(&speed));
            assert!(FIREWORK_COLORS.contains(&fragment.color));
        }
    }

    #[test]
    fn test_show_staggered() {
        let mut rng = StdRng::seed_from_u64(3);
        let show = FireworkShow::new(20);
        let plan = show.plan(3, Size::new(800.0, 600.0), &mut rng);

        let delays: Vec<u32> = plan.iter().map(|s| s.delay_ms).collect();
        assert_eq!(delays, vec![0, 300, 600]);
        for scheduled in &plan {
            assert_eq!(scheduled.burst.fragments.len(), 20);
            assert!(scheduled.burst.center.y <= 300.0);
            assert!(scheduled.burst.center.x <= 800.0);
        }
    }

    #[test]
    fn test_fragment_transform() {
        let fragment = Fragment {
            offset: Vec2::new(12.5, -3.0),
            color: FIREWORK_COLORS[0],
        };
        assert_eq!(fragment.transform(), "translate(12.5px, -3px)");
    }
}
