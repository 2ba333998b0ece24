use crate::constants::*;
use crate::error::{LikeError, Result};
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Debug, PartialEq)]
pub struct ConfettiParticle {
    pub index: usize,
    pub angle_deg: f32,
    pub distance: f32,
    pub color: &'static str,
}

impl ConfettiParticle {
    /// Resting offset from the button centre, in px.
    pub fn offset(&self) -> Vec2 {
        Vec2::from_angle(self.angle_deg.to_radians()) * self.distance
    }
}

/// Angle for particle `index`, stepping by a fixed 28 degrees around the ring.
///
/// 28 does not divide 360, so rings larger than 13 pieces start to overlap
/// themselves instead of spacing evenly.
#[inline]
pub fn confetti_angle_deg(index: usize) -> f32 {
    ((index as u64 * CONFETTI_ANGLE_STEP_DEG as u64) % 360) as f32
}

#[inline]
pub fn confetti_color(index: usize) -> &'static str {
    PARTICLE_COLORS[index % PARTICLE_COLORS.len()]
}

/// Lay out `count` confetti pieces for a button of `size` px.
///
/// Angles and colours are fixed per index; distances are drawn from `rng` on
/// every call so each celebration scatters a little differently.
pub fn confetti_layout<R: Rng + ?Sized>(
    count: i32,
    size: f32,
    rng: &mut R,
) -> Result<Vec<ConfettiParticle>> {
    if count < 0 {
        return Err(LikeError::invalid(
            "num_of_confetti_pieces",
            format!("must be >= 0, got {count}"),
        ));
    }
    validate_size(size)?;
    let particles = (0..count as usize)
        .map(|index| ConfettiParticle {
            index,
            angle_deg: confetti_angle_deg(index),
            distance: rng.gen_range(CONFETTI_DISTANCE_MIN_PX..CONFETTI_DISTANCE_MAX_PX),
            color: confetti_color(index),
        })
        .collect();
    Ok(particles)
}

pub(crate) fn validate_size(size: f32) -> Result<()> {
    if !size.is_finite() || size <= 0.0 {
        return Err(LikeError::invalid("size", format!("must be > 0, got {size}")));
    }
    Ok(())
}
