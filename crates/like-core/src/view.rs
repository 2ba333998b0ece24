//! Visual-side frame types produced by the engine.
//!
//! Nothing here touches a platform API. The web
//! frontend maps them onto DOM nodes and the native driver logs them.

use crate::burst::BurstId;
use glam::Vec2;
use smallvec::SmallVec;

#[derive(Clone, Debug, PartialEq)]
pub struct HeartGlyph {
    pub width: f32,
    pub filled: bool,
    pub scale: f32,
    /// True while the entrance spring is still moving.
    pub animated: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CircleSprite {
    pub id: BurstId,
    pub diameter: f32,
    pub scale: f32,
    pub opacity: f32,
    pub color: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConfettiSprite {
    pub index: usize,
    pub angle_deg: f32,
    pub color: &'static str,
    /// Current offset from the button centre in px.
    pub offset: Vec2,
    pub opacity: f32,
}

/// Everything a host needs to draw one like button for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct LikeButtonFrame {
    pub size: f32,
    pub count: u64,
    pub heart: HeartGlyph,
    pub circles: SmallVec<[CircleSprite; 2]>,
    pub confetti: Vec<ConfettiSprite>,
}
