//! Particle systems for the invitation page
//!
//! - `sparkle`: fixed pool of pulsing glints that wrap at the surface edges
//! - `petal`: capped shower of falling marigold petals
//! - `firework`: radial bursts and staggered firework shows
//! - `blessing`: floating glyphs released by the blessing symbol

mod blessing;
mod firework;
mod petal;
mod sparkle;

pub use blessing::{blessing_burst, BlessingGlyph, BLESSING_GLYPHS, BLESSING_GLYPH_COUNT, BLESSING_RISE_PX};
pub use firework::{FireworkBurst, FireworkShow, Fragment, ScheduledBurst, FIREWORK_COLORS};
pub use petal::{Petal, PetalShower, PETAL_SPAWN_CHANCE};
pub use sparkle::{Sparkle, SparkleField};
