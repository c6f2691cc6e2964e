//! Floating blessing glyphs

use rand::seq::SliceRandom;
use rand::Rng;

/// Glyphs released by the blessing symbol
pub const BLESSING_GLYPHS: [&str; 4] = ["✨", "🌟", "⭐", "💫"];

/// Glyphs per tap
pub const BLESSING_GLYPH_COUNT: usize = 8;

/// Height each glyph rises before vanishing
pub const BLESSING_RISE_PX: f64 = 150.0;

/// One floating glyph
#[derive(Clone, Debug, PartialEq)]
pub struct BlessingGlyph {
    pub glyph: &'static str,
    /// Sideways travel over the glyph's lifetime, in [-100, 100)
    pub drift_x: f64,
}

impl BlessingGlyph {
    /// Value for the `--drift-x` custom property read by `blessingFloat`
    pub fn drift_css(&self) -> String {
        format!("{}px", self.drift_x.round())
    }
}

/// A tap's worth of glyphs, each with its own drift
pub fn blessing_burst<R: Rng + ?Sized>(rng: &mut R) -> Vec<BlessingGlyph> {
    (0..BLESSING_GLYPH_COUNT)
        .map(|_| BlessingGlyph {
            glyph: BLESSING_GLYPHS.choose(rng).copied().unwrap_or(BLESSING_GLYPHS[0]),
            drift_x: rng.gen::<f64>() * 200.0 - 100.0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_burst_shape() {
        let mut rng = StdRng::seed_from_u64(8);
        let glyphs = blessing_burst(&mut rng);
        assert_eq!(glyphs.len(), BLESSING_GLYPH_COUNT);
        for g in &glyphs {
            assert!(BLESSING_GLYPHS.contains(&g.glyph));
            assert!((-100.0..100.0).contains(&g.drift_x));
        }
    }

    #[test]
    fn test_drifts_vary() {
        let mut rng = StdRng::seed_from_u64(21);
        let glyphs = blessing_burst(&mut rng);
        let first = glyphs[0].drift_x;
        assert!(glyphs.iter().any(|g| g.drift_x != first));
    }

    #[test]
    fn test_drift_css() {
        let g = BlessingGlyph {
            glyph: "✨",
            drift_x: -42.4,
        };
        assert_eq!(g.drift_css(), "-42px");
    }
}
