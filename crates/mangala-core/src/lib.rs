//! Page-effect core for the Mangala wedding invitation
//!
//! This crate holds every piece of the invitation page that can be reasoned
//! about without a browser:
//! - Particle simulation for sparkles, falling petals and firework bursts
//! - Scroll-reveal bookkeeping (one-way reveal flags)
//! - Frame-loop state machine driven by page visibility
//! - Exactly-once lifetimes for transient page effects
//! - Share strategy selection and calendar/maps link building
//! - Invitation configuration and device profile
//!
//! ## Architecture
//!
//! - [`math`]: Geometry types (`Vec2`, `Size`)
//! - [`particles`]: Sparkle field, petal shower, firework bursts, blessing glyphs
//! - [`surface`]: Immediate-mode drawing trait the particle systems render through
//! - [`frame_loop`]: Running/paused controller for redraw scheduling
//! - [`reveal`]: Scroll-reveal tracker
//! - [`transient`]: `Transient` handles that detach exactly once
//! - [`share`]: Share payload and strategy
//! - [`links`]: Maps and calendar URLs
//! - [`config`]: `InviteConfig` and `DeviceProfile`
//! - [`timing`]: Effect durations and delays
//!
//! ## Example
//!
//! ```rust
//! use mangala_core::{DeviceProfile, SparkleField, Size};
//! use rand::SeedableRng;
//!
//! let profile = DeviceProfile::new(false, 1280.0, false);
//! let mut rng = rand::rngs::SmallRng::seed_from_u64(7);
//! let mut field = SparkleField::new(profile.sparkle_count());
//! field.resize(Size::new(1280.0, 720.0), &mut rng);
//! field.step();
//! assert_eq!(field.len(), 60);
//! ```
//!
//! The browser crate (`mangala-web`) owns all DOM access and drives these
//! types from `requestAnimationFrame`, timers and event listeners.

pub mod config;
pub mod frame_loop;
pub mod links;
pub mod math;
pub mod particles;
pub mod reveal;
pub mod share;
pub mod surface;
pub mod timing;
pub mod transient;

pub use config::{ConfigError, DeviceProfile, InviteConfig, CONSTRAINED_VIEWPORT_WIDTH};
pub use frame_loop::{FrameLoop, LoopCommand, LoopState};
pub use links::{calendar_url, maps_url};
pub use math::{Size, Vec2};
pub use particles::{
    BlessingGlyph, FireworkBurst, FireworkShow, Fragment, Petal, PetalShower, ScheduledBurst,
    Sparkle, SparkleField,
};
pub use reveal::{RevealAction, RevealTracker};
pub use share::{SharePayload, ShareStrategy};
pub use surface::{DrawCall, RecordingSurface, Surface};
pub use transient::{Detach, Transient};
