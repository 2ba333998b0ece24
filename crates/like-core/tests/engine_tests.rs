// Host-side tests for the like-button composition: card -> props -> frame.

use like_core::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

const FRAME: Duration = Duration::from_micros(16_667);

fn props(is_liked: bool, num_of_likes: u64) -> LikeButtonProps {
    LikeButtonProps {
        is_liked,
        num_of_likes,
        ..LikeButtonProps::default()
    }
}

fn settle(button: &mut LikeButton) -> usize {
    let mut frames = 0;
    while button.advance(FRAME) {
        frames += 1;
        assert!(frames < 1_000, "button never settled");
    }
    frames
}

/// Card and button wired the way a host does it: the card's like machine
/// pushes every change into the button.
fn wired(
    initial_likes: u64,
    motion: &MotionPreference,
) -> (Rc<RefCell<CardState>>, Rc<RefCell<LikeButton>>) {
    let card = Rc::new(RefCell::new(CardState::new(initial_likes, 3)));
    let button = Rc::new(RefCell::new(
        LikeButton::with_seed(props(false, initial_likes), motion, 11).unwrap(),
    ));
    let button_sub = button.clone();
    card.borrow_mut().like.subscribe(move |s| {
        button_sub.borrow_mut().set_liked(s.is_liked, s.count);
    });
    (card, button)
}

#[test]
fn defaults_match_embedding_contract() {
    let p = LikeButtonProps::default();
    assert_eq!(p.size, 40.0);
    assert_eq!(p.num_of_confetti_pieces, 10);
    assert!((p.heart_size() - 24.0).abs() < 1e-5);
}

#[test]
fn liking_celebrates_with_heart_circle_and_confetti() {
    let motion = MotionPreference::new(false);
    let (card, button) = wired(41, &motion);

    card.borrow_mut().dispatch(CardAction::ToggleLike);
    assert_eq!(card.borrow().like.state(), ButtonState::new(true, 42));

    let frame = button.borrow().render();
    assert_eq!(frame.count, 42);
    assert!(frame.heart.filled);
    assert!(frame.heart.animated);
    assert_eq!(frame.heart.scale, 0.0, "heart springs in from zero");
    assert_eq!(frame.circles.len(), 1);
    assert_eq!(frame.circles[0].color, POPPING_CIRCLE_COLOR);
    assert_eq!(frame.circles[0].diameter, 40.0);

    let angles: Vec<f32> = frame.confetti.iter().map(|c| c.angle_deg).collect();
    assert_eq!(
        angles,
        vec![0.0, 28.0, 56.0, 84.0, 112.0, 140.0, 168.0, 196.0, 224.0, 252.0]
    );
    for c in &frame.confetti {
        assert_eq!(c.color, PARTICLE_COLORS[c.index % 5]);
        assert_eq!(c.opacity, 1.0);
        assert_eq!(c.offset.length(), 0.0, "confetti starts at the centre");
    }

    assert!(button.borrow_mut().advance(FRAME));
    let frame = button.borrow().render();
    assert!(frame.heart.scale > 0.0 && frame.heart.scale < 1.0);
    assert!(frame.circles[0].scale > 0.0);
    assert!(frame.confetti.iter().all(|c| c.offset.length() > 0.0));
}

#[test]
fn celebration_settles_and_circle_unmounts() {
    let motion = MotionPreference::new(false);
    let mut button = LikeButton::with_seed(props(false, 0), &motion, 1).unwrap();
    button.set_liked(true, 1);

    let mut peak = 0.0_f32;
    let mut circle_frames = 0;
    while button.advance(FRAME) {
        let frame = button.render();
        peak = peak.max(frame.heart.scale);
        if !frame.circles.is_empty() {
            circle_frames += 1;
        }
    }
    assert!(peak > 1.0, "heart should overshoot");
    assert!((28..=31).contains(&circle_frames), "circle lived {circle_frames} frames");

    let frame = button.render();
    assert!(!button.is_animating());
    assert_eq!(frame.heart.scale, 1.0);
    assert!(!frame.heart.animated);
    assert!(frame.circles.is_empty());
    assert_eq!(frame.confetti.len(), 10);
    for (sprite, particle) in frame.confetti.iter().zip(button.confetti()) {
        assert_eq!(sprite.opacity, 0.0);
        assert!((sprite.offset - particle.offset()).length() < 1e-3);
    }

    // nothing comes back without a new like
    for _ in 0..60 {
        assert!(!button.advance(FRAME));
        assert!(button.render().circles.is_empty());
    }
}

#[test]
fn unliking_shows_static_heart_and_drops_celebration() {
    let motion = MotionPreference::new(false);
    let (card, button) = wired(41, &motion);
    card.borrow_mut().dispatch(CardAction::ToggleLike);
    button.borrow_mut().advance(FRAME);

    card.borrow_mut().dispatch(CardAction::ToggleLike);
    assert_eq!(card.borrow().like.state(), ButtonState::new(false, 41));

    let frame = button.borrow().render();
    assert_eq!(frame.count, 41);
    assert!(!frame.heart.filled);
    assert!(!frame.heart.animated);
    assert_eq!(frame.heart.scale, 1.0);
    assert!(frame.circles.is_empty());
    assert!(frame.confetti.is_empty());
    assert!(!button.borrow_mut().advance(FRAME));
}

#[test]
fn every_like_spawns_a_fresh_celebration() {
    let motion = MotionPreference::new(false);
    let mut button = LikeButton::with_seed(props(false, 0), &motion, 5).unwrap();
    button.set_liked(true, 1);
    let first: Vec<f32> = button.confetti().iter().map(|p| p.distance).collect();
    settle(&mut button);

    button.set_liked(false, 0);
    button.set_liked(true, 1);
    let frame = button.render();
    assert_eq!(frame.heart.scale, 0.0);
    assert_eq!(frame.circles.len(), 1);
    let second: Vec<f32> = button.confetti().iter().map(|p| p.distance).collect();
    assert_eq!(first.len(), second.len());
    assert_ne!(first, second, "distances are redrawn per like");
}

#[test]
fn zero_confetti_still_pops_the_circle() {
    let motion = MotionPreference::new(false);
    let mut button = LikeButton::with_seed(
        LikeButtonProps {
            num_of_confetti_pieces: 0,
            ..props(false, 0)
        },
        &motion,
        2,
    )
    .unwrap();
    button.set_liked(true, 1);
    let frame = button.render();
    assert!(frame.confetti.is_empty());
    assert_eq!(frame.circles.len(), 1);
}

#[test]
fn reduced_motion_skips_intermediate_frames_and_circle() {
    let motion = MotionPreference::new(true);
    let mut button = LikeButton::with_seed(props(false, 41), &motion, 3).unwrap();
    button.set_liked(true, 42);

    let frame = button.render();
    assert_eq!(frame.heart.scale, 1.0);
    assert!(!frame.heart.animated);
    assert!(frame.circles.is_empty());
    assert_eq!(frame.confetti.len(), 10);
    assert!(frame.confetti.iter().all(|c| c.opacity == 0.0));
    assert!(!button.is_animating());
    assert!(!button.advance(FRAME));
}

#[test]
fn switching_to_reduced_motion_mid_flight_snaps() {
    let motion = MotionPreference::new(false);
    let mut button = LikeButton::with_seed(props(false, 0), &motion, 4).unwrap();
    button.set_liked(true, 1);
    button.advance(FRAME);
    assert!(button.is_animating());

    motion.set_reduced(true);
    assert!(button.reduced_motion());
    assert!(!button.advance(FRAME));
    let frame = button.render();
    assert_eq!(frame.heart.scale, 1.0);
    assert!(frame.circles.is_empty());
}

#[test]
fn mounting_liked_is_not_a_transition() {
    let motion = MotionPreference::new(false);
    let button = LikeButton::with_seed(props(true, 42), &motion, 6).unwrap();
    let frame = button.render();
    assert!(frame.heart.filled);
    assert_eq!(frame.heart.scale, 1.0);
    assert!(frame.circles.is_empty());
    assert!(!button.is_animating());
}

#[test]
fn invalid_props_are_rejected_without_side_effects() {
    let motion = MotionPreference::new(false);
    let bad_size = LikeButtonProps {
        size: 0.0,
        ..LikeButtonProps::default()
    };
    assert!(matches!(
        LikeButton::new(bad_size, &motion),
        Err(LikeError::InvalidArgument { name: "size", .. })
    ));

    let mut button = LikeButton::with_seed(props(false, 1), &motion, 0).unwrap();
    let bad_count = LikeButtonProps {
        is_liked: true,
        num_of_confetti_pieces: -3,
        ..props(true, 2)
    };
    assert!(button.set_props(bad_count).is_err());
    assert_eq!(*button.props(), props(false, 1));
    assert!(button.render().circles.is_empty());
}

#[test]
fn changing_piece_count_while_liked_relays_confetti() {
    let motion = MotionPreference::new(false);
    let mut button = LikeButton::with_seed(props(false, 0), &motion, 8).unwrap();
    button.set_liked(true, 1);
    let updated = LikeButtonProps {
        num_of_confetti_pieces: 4,
        ..*button.props()
    };
    button.set_props(updated).unwrap();
    assert_eq!(button.render().confetti.len(), 4);
    assert_eq!(button.render().circles.len(), 1, "no second burst");
}

#[test]
fn click_invokes_the_embedders_toggle() {
    let motion = MotionPreference::new(false);
    let card = Rc::new(RefCell::new(CardState::new(41, 0)));
    let card_click = card.clone();
    let button = LikeButton::with_seed(props(false, 41), &motion, 9)
        .unwrap()
        .on_toggle(move || card_click.borrow_mut().dispatch(CardAction::ToggleLike));

    button.click();
    assert_eq!(card.borrow().like.state(), ButtonState::new(true, 42));
    let handler = button.toggle_handler().unwrap();
    handler();
    assert_eq!(card.borrow().like.state(), ButtonState::new(false, 41));
}

#[test]
fn retweet_does_not_disturb_like_animation() {
    let motion = MotionPreference::new(false);
    let (card, button) = wired(10, &motion);
    card.borrow_mut().dispatch(CardAction::ToggleLike);
    button.borrow_mut().advance(FRAME);
    let before = button.borrow().render();

    card.borrow_mut().dispatch(CardAction::ToggleRetweet);
    assert_eq!(card.borrow().retweet.state(), ButtonState::new(true, 4));
    assert_eq!(button.borrow().render(), before);
}

#[test]
fn buttons_do_not_share_animation_state() {
    let motion = MotionPreference::new(false);
    let mut a = LikeButton::with_seed(props(false, 0), &motion, 1).unwrap();
    let b = LikeButton::with_seed(props(false, 0), &motion, 1).unwrap();
    a.set_liked(true, 1);
    a.advance(FRAME);
    assert!(a.is_animating());
    assert!(!b.is_animating());
    assert!(b.render().circles.is_empty());
    assert_eq!(motion.subscriber_count(), 2);
    drop(a);
    assert_eq!(motion.subscriber_count(), 1);
}

#[test]
fn seeded_buttons_lay_out_identically() {
    let motion = MotionPreference::new(false);
    let mut a = LikeButton::with_seed(props(false, 0), &motion, 77).unwrap();
    let mut b = LikeButton::with_seed(props(false, 0), &motion, 77).unwrap();
    a.set_liked(true, 1);
    b.set_liked(true, 1);
    assert_eq!(a.confetti(), b.confetti());
}
