//! Like button composition: props in, animators in the middle, a frame out.
//!
//! Only the false -> true transition is celebrated. It restarts the heart
//! spring from zero, lays out a fresh confetti ring and spawns one popping
//! circle. Unliking drops all of that at once and shows a static heart.

use crate::burst::BurstField;
use crate::constants::*;
use crate::error::{LikeError, Result};
use crate::motion::{MotionPreference, MotionWatch};
use crate::particles::{confetti_layout, validate_size, ConfettiParticle};
use crate::spring::{Spring, SpringConfig};
use crate::view::{CircleSprite, ConfettiSprite, HeartGlyph, LikeButtonFrame};
use rand::prelude::*;
use std::rc::Rc;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LikeButtonProps {
    pub is_liked: bool,
    pub num_of_likes: u64,
    pub size: f32,
    pub num_of_confetti_pieces: i32,
}

impl Default for LikeButtonProps {
    fn default() -> Self {
        Self {
            is_liked: false,
            num_of_likes: 0,
            size: DEFAULT_BUTTON_SIZE,
            num_of_confetti_pieces: DEFAULT_CONFETTI_PIECES,
        }
    }
}

impl LikeButtonProps {
    pub fn validate(&self) -> Result<()> {
        validate_size(self.size)?;
        if self.num_of_confetti_pieces < 0 {
            return Err(LikeError::invalid(
                "num_of_confetti_pieces",
                format!("must be >= 0, got {}", self.num_of_confetti_pieces),
            ));
        }
        Ok(())
    }

    pub fn heart_size(&self) -> f32 {
        self.size * HEART_SIZE_RATIO
    }
}

pub struct LikeButton {
    props: LikeButtonProps,
    heart: Spring,
    flight: Spring,
    confetti: Vec<ConfettiParticle>,
    bursts: BurstField,
    motion: MotionWatch,
    rng: StdRng,
    on_toggle: Option<Rc<dyn Fn()>>,
}

impl LikeButton {
    pub fn new(props: LikeButtonProps, motion: &MotionPreference) -> Result<Self> {
        Self::build(props, motion, StdRng::from_entropy())
    }

    /// Same as `new` but with a fixed seed for the confetti distances.
    pub fn with_seed(props: LikeButtonProps, motion: &MotionPreference, seed: u64) -> Result<Self> {
        Self::build(props, motion, StdRng::seed_from_u64(seed))
    }

    fn build(props: LikeButtonProps, motion: &MotionPreference, mut rng: StdRng) -> Result<Self> {
        props.validate()?;
        // Mounting already liked is not a transition: everything starts at rest.
        let confetti = if props.is_liked {
            confetti_layout(props.num_of_confetti_pieces, props.size, &mut rng)?
        } else {
            Vec::new()
        };
        Ok(Self {
            props,
            heart: Spring::new(SpringConfig::default(), 1.0),
            flight: Spring::new(SpringConfig::default(), 1.0),
            confetti,
            bursts: BurstField::new(),
            motion: motion.watch(),
            rng,
            on_toggle: None,
        })
    }

    pub fn on_toggle(mut self, handler: impl Fn() + 'static) -> Self {
        self.on_toggle = Some(Rc::new(handler));
        self
    }

    /// The embedder's toggle callback, cloned out so it can run without a
    /// borrow on this button.
    pub fn toggle_handler(&self) -> Option<Rc<dyn Fn()>> {
        self.on_toggle.clone()
    }

    /// User pressed the button: forward to the embedder.
    pub fn click(&self) {
        match &self.on_toggle {
            Some(handler) => handler(),
            None => log::warn!("[like] click with no toggle handler attached"),
        }
    }

    pub fn props(&self) -> &LikeButtonProps {
        &self.props
    }

    pub fn reduced_motion(&self) -> bool {
        self.motion.reduced()
    }

    /// Receive new state from the card.
    pub fn set_props(&mut self, props: LikeButtonProps) -> Result<()> {
        props.validate()?;
        let prev = std::mem::replace(&mut self.props, props);
        match (prev.is_liked, props.is_liked) {
            (false, true) => self.celebrate(),
            (true, false) => self.clear_celebration(),
            (true, true)
                if prev.num_of_confetti_pieces != props.num_of_confetti_pieces
                    || prev.size != props.size =>
            {
                self.relayout()
            }
            _ => {}
        }
        Ok(())
    }

    /// Shorthand for a card update that only touches the liked flag and count.
    pub fn set_liked(&mut self, is_liked: bool, num_of_likes: u64) {
        let props = LikeButtonProps {
            is_liked,
            num_of_likes,
            ..self.props
        };
        if let Err(e) = self.set_props(props) {
            log::error!("[like] rejected update: {}", e);
        }
    }

    fn celebrate(&mut self) {
        let reduced = self.motion.reduced();
        log::debug!(
            "[like] liked; pieces={} reduced_motion={}",
            self.props.num_of_confetti_pieces,
            reduced
        );
        self.heart.reset(0.0);
        self.heart.set_target(1.0, reduced);
        self.flight.reset(0.0);
        self.flight.set_target(1.0, reduced);
        self.relayout();
        self.bursts.spawn(POPPING_CIRCLE_COLOR, self.props.size, reduced);
    }

    fn clear_celebration(&mut self) {
        log::debug!("[like] unliked");
        self.heart.reset(1.0);
        self.flight.reset(1.0);
        self.confetti.clear();
        self.bursts.clear();
    }

    fn relayout(&mut self) {
        match confetti_layout(
            self.props.num_of_confetti_pieces,
            self.props.size,
            &mut self.rng,
        ) {
            Ok(particles) => self.confetti = particles,
            Err(e) => {
                log::error!("[like] confetti layout failed: {}", e);
                self.confetti.clear();
            }
        }
    }

    /// Step every animator by `dt`. Returns `true` while anything is still moving;
    /// once it returns `false` the host can stop scheduling frames.
    pub fn advance(&mut self, dt: Duration) -> bool {
        if self.motion.reduced() {
            self.heart.snap();
            self.flight.snap();
            self.bursts.clear();
            return false;
        }
        let heart = self.heart.advance(dt);
        let flight = self.flight.advance(dt);
        let bursts = self.bursts.advance(dt);
        heart || flight || bursts
    }

    pub fn is_animating(&self) -> bool {
        !self.heart.is_resting() || !self.flight.is_resting() || !self.bursts.is_empty()
    }

    pub fn render(&self) -> LikeButtonFrame {
        let liked = self.props.is_liked;
        let heart = HeartGlyph {
            width: self.props.heart_size(),
            filled: liked,
            scale: if liked { self.heart.value() } else { 1.0 },
            animated: liked && !self.heart.is_resting(),
        };
        if !liked {
            return LikeButtonFrame {
                size: self.props.size,
                count: self.props.num_of_likes,
                heart,
                circles: Default::default(),
                confetti: Vec::new(),
            };
        }

        let circles = self
            .bursts
            .iter()
            .map(|b| CircleSprite {
                id: b.id,
                diameter: b.size,
                scale: b.scale(),
                opacity: b.opacity(),
                color: b.color,
            })
            .collect();
        let progress = self.flight.value();
        let confetti = self
            .confetti
            .iter()
            .map(|p| ConfettiSprite {
                index: p.index,
                angle_deg: p.angle_deg,
                color: p.color,
                offset: p.offset() * progress,
                opacity: (1.0 - progress).clamp(0.0, 1.0),
            })
            .collect();
        LikeButtonFrame {
            size: self.props.size,
            count: self.props.num_of_likes,
            heart,
            circles,
            confetti,
        }
    }

    /// Resting layout of the current confetti ring.
    pub fn confetti(&self) -> &[ConfettiParticle] {
        &self.confetti
    }
}
