//! One-shot popping circle.
//!
//! A burst scales in along a cubic-bezier curve while fading out on a longer
//! ease-in curve, then expires. Bursts cannot be paused, reversed or replayed;
//! every like spawns a fresh one and overlapping bursts age independently.

use crate::constants::*;
use smallvec::SmallVec;
use std::time::Duration;

/// CSS-style timing curve through (0,0), (x1,y1), (x2,y2), (1,1).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl CubicBezier {
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub const fn from_array(p: [f32; 4]) -> Self {
        Self::new(p[0], p[1], p[2], p[3])
    }

    /// Eased progress for linear progress `t` in [0, 1].
    pub fn ease(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 || t == 1.0 {
            return t;
        }
        // Newton on x(s) = t, falling back to bisection when the slope flattens
        let mut s = t;
        for _ in 0..8 {
            let x = bezier_component(s, self.x1, self.x2) - t;
            if x.abs() < 1e-6 {
                return bezier_component(s, self.y1, self.y2);
            }
            let dx = bezier_derivative(s, self.x1, self.x2);
            if dx.abs() < 1e-6 {
                break;
            }
            s = (s - x / dx).clamp(0.0, 1.0);
        }
        let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
        s = t;
        for _ in 0..32 {
            let x = bezier_component(s, self.x1, self.x2);
            if (x - t).abs() < 1e-6 {
                break;
            }
            if x < t {
                lo = s;
            } else {
                hi = s;
            }
            s = 0.5 * (lo + hi);
        }
        bezier_component(s, self.y1, self.y2)
    }
}

fn bezier_component(s: f32, p1: f32, p2: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

fn bezier_derivative(s: f32, p1: f32, p2: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

pub const POP_SCALE_EASING: CubicBezier = CubicBezier::from_array(BURST_SCALE_CURVE);
pub const EASE_IN: CubicBezier = CubicBezier::from_array(EASE_IN_CURVE);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BurstId(pub u64);

#[derive(Clone, Debug)]
pub struct Burst {
    pub id: BurstId,
    pub color: &'static str,
    pub size: f32,
    elapsed: Duration,
}

impl Burst {
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Overall lifetime: the longer of the scale and fade tracks.
    pub fn duration(&self) -> Duration {
        BURST_SCALE_DURATION.max(BURST_FADE_DURATION)
    }

    pub fn scale(&self) -> f32 {
        POP_SCALE_EASING.ease(progress(self.elapsed, BURST_SCALE_DURATION))
    }

    pub fn opacity(&self) -> f32 {
        1.0 - EASE_IN.ease(progress(self.elapsed, BURST_FADE_DURATION))
    }

    pub fn is_expired(&self) -> bool {
        self.elapsed >= self.duration()
    }
}

fn progress(elapsed: Duration, total: Duration) -> f32 {
    (elapsed.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0)
}

/// Live popping circles for one button.
#[derive(Debug, Default)]
pub struct BurstField {
    bursts: SmallVec<[Burst; 2]>,
    next_id: u64,
}

impl BurstField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new burst. Under reduced motion nothing is spawned.
    pub fn spawn(&mut self, color: &'static str, size: f32, reduce_motion: bool) -> Option<BurstId> {
        if reduce_motion {
            log::debug!("[burst] skipped (reduced motion)");
            return None;
        }
        let id = BurstId(self.next_id);
        self.next_id += 1;
        self.bursts.push(Burst {
            id,
            color,
            size,
            elapsed: Duration::ZERO,
        });
        Some(id)
    }

    /// Age every burst and drop the ones that finished. Returns `true` while any remain.
    pub fn advance(&mut self, dt: Duration) -> bool {
        for b in &mut self.bursts {
            b.elapsed += dt;
        }
        self.bursts.retain(|b| !b.is_expired());
        !self.bursts.is_empty()
    }

    pub fn clear(&mut self) {
        self.bursts.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Burst> {
        self.bursts.iter()
    }

    pub fn len(&self) -> usize {
        self.bursts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bursts.is_empty()
    }
}
