//! Immediate-mode drawing surface
//!
//! Particle systems render through [`Surface`] so the same drawing code runs
//! against a browser 2D canvas and against [`RecordingSurface`] in tests.

use crate::math::{Size, Vec2};

/// Minimal 2D drawing API used by the particle systems
///
/// Mirrors the subset of the canvas 2D context the effects need. Calls
/// between `save` and `restore` are scoped the same way the canvas scopes
/// them.
pub trait Surface {
    /// Clear the whole surface
    fn clear(&mut self, size: Size);
    /// Push the current transform and alpha
    fn save(&mut self);
    /// Pop the transform and alpha pushed by `save`
    fn restore(&mut self);
    /// Set the alpha applied to subsequent fills and strokes
    fn set_alpha(&mut self, alpha: f64);
    /// Move the origin
    fn translate(&mut self, offset: Vec2);
    /// Rotate around the origin, in radians
    fn rotate(&mut self, angle: f64);
    /// Fill a circle with a radial gradient from `inner` at the center to
    /// `outer` at `radius`
    fn fill_radial_glow(&mut self, center: Vec2, radius: f64, inner: &str, outer: &str);
    /// Stroke a set of line segments with one style
    fn stroke_segments(&mut self, segments: &[(Vec2, Vec2)], color: &str, width: f64);
    /// Fill an axis-aligned ellipse in the current transform
    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, color: &str);
}

/// A single recorded drawing call
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Clear(Size),
    Save,
    Restore,
    Alpha(f64),
    Translate(Vec2),
    Rotate(f64),
    RadialGlow {
        center: Vec2,
        radius: f64,
        inner: String,
        outer: String,
    },
    Segments {
        segments: Vec<(Vec2, Vec2)>,
        color: String,
        width: f64,
    },
    Ellipse {
        center: Vec2,
        radii: Vec2,
        color: String,
    },
}

/// Surface that records every call, for inspecting what a frame drew
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded calls matching `pred`
    pub fn count(&self, pred: impl Fn(&DrawCall) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }

    /// Whether every `Save` has a matching `Restore`
    pub fn is_balanced(&self) -> bool {
        let mut depth: i64 = 0;
        for call in &self.calls {
            match call {
                DrawCall::Save => depth += 1,
                DrawCall::Restore => {
                    depth -= 1;
                    if depth < 0 {
                        return false;
                    }
                }
                _ => {}
            }
        }
        depth == 0
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, size: Size) {
        self.calls.push(DrawCall::Clear(size));
    }

    fn save(&mut self) {
        self.calls.push(DrawCall::Save);
    }

    fn restore(&mut self) {
        self.calls.push(DrawCall::Restore);
    }

    fn set_alpha(&mut self, alpha: f64) {
        self.calls.push(DrawCall::Alpha(alpha));
    }

    fn translate(&mut self, offset: Vec2) {
        self.calls.push(DrawCall::Translate(offset));
    }

    fn rotate(&mut self, angle: f64) {
        self.calls.push(DrawCall::Rotate(angle));
    }

    fn fill_radial_glow(&mut self, center: Vec2, radius: f64, inner: &str, outer: &str) {
        self.calls.push(DrawCall::RadialGlow {
            center,
            radius,
            inner: inner.to_string(),
            outer: outer.to_string(),
        });
    }

    fn stroke_segments(&mut self, segments: &[(Vec2, Vec2)], color: &str, width: f64) {
        self.calls.push(DrawCall::Segments {
            segments: segments.to_vec(),
            color: color.to_string(),
            width,
        });
    }

    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, color: &str) {
        self.calls.push(DrawCall::Ellipse {
            center,
            radii,
            color: color.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_balance() {
        let mut surface = RecordingSurface::new();
        surface.save();
        surface.set_alpha(0.5);
        assert!(!surface.is_balanced());
        surface.restore();
        assert!(surface.is_balanced());
        assert_eq!(surface.count(|c| matches!(c, DrawCall::Alpha(_))), 1);
    }
}
