use anyhow::Context;
use like_core::{
    CardAction, CardState, LikeButton, LikeButtonFrame, LikeButtonProps, MotionPreference,
};
use rand::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

const FRAME_DT: Duration = Duration::from_micros(16_667);
const TOTAL_FRAMES: u32 = 240;
const LOG_EVERY: u32 = 6;

// Scripted input: (frame, action). Rapid re-likes at 130/134 exercise overlapping bursts.
const SCRIPT: &[(u32, CardAction)] = &[
    (0, CardAction::ToggleLike),
    (20, CardAction::ToggleRetweet),
    (120, CardAction::ToggleLike),
    (130, CardAction::ToggleLike),
    (132, CardAction::ToggleLike),
    (134, CardAction::ToggleLike),
];

fn env_flag(name: &str) -> Option<bool> {
    std::env::var(name)
        .ok()
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
}

fn env_seed() -> anyhow::Result<Option<u64>> {
    match std::env::var("LIKE_SEED") {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Some)
            .with_context(|| format!("LIKE_SEED is not a u64: {raw:?}")),
        Err(_) => Ok(None),
    }
}

fn summarize(frame: &LikeButtonFrame) -> String {
    let confetti_alpha = frame.confetti.first().map(|c| c.opacity).unwrap_or(0.0);
    let circle = frame
        .circles
        .iter()
        .map(|c| format!("{:.2}/{:.2}", c.scale, c.opacity))
        .collect::<Vec<_>>()
        .join(",");
    format!(
        "liked={} count={} heart={:.3} circles=[{}] confetti={} alpha={:.2}",
        frame.heart.filled,
        frame.count,
        frame.heart.scale,
        circle,
        frame.confetti.len(),
        confetti_alpha
    )
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    // no display server to ask, so only an explicit override reduces motion
    let motion = match env_flag("LIKE_REDUCED_MOTION") {
        Some(reduced) => MotionPreference::new(reduced),
        None => MotionPreference::headless(),
    };
    let seed = env_seed()?.unwrap_or_else(|| thread_rng().gen());
    let mut rng = StdRng::seed_from_u64(seed);
    let likes = rng.gen_range(0..=1000);
    let retweets = rng.gen_range(0..=100);
    log::info!(
        "[native] seed={} likes={} retweets={} reduced_motion={}",
        seed,
        likes,
        retweets,
        motion.reduced()
    );

    let card = Rc::new(RefCell::new(CardState::new(likes, retweets)));
    let card_for_toggle = card.clone();
    let props = LikeButtonProps {
        num_of_likes: likes,
        ..LikeButtonProps::default()
    };
    let button = LikeButton::with_seed(props, &motion, seed)
        .context("building like button")?
        .on_toggle(move || card_for_toggle.borrow_mut().dispatch(CardAction::ToggleLike));
    let button = Rc::new(RefCell::new(button));

    let button_for_card = button.clone();
    let like_sub = card.borrow_mut().like.subscribe(move |s| {
        button_for_card.borrow_mut().set_liked(s.is_liked, s.count);
    });
    let retweet_sub = card.borrow_mut().retweet.subscribe(|s| {
        log::info!("[native] retweeted={} retweets={}", s.is_liked, s.count);
    });

    let mut animating = false;
    for f in 0..TOTAL_FRAMES {
        for (_, action) in SCRIPT.iter().filter(|(at, _)| *at == f) {
            log::info!("[native] f={:03} {}", f, action.name());
            match action {
                CardAction::ToggleLike => {
                    let handler = button.borrow().toggle_handler();
                    if let Some(handler) = handler {
                        handler();
                    }
                }
                other => card.borrow_mut().dispatch(*other),
            }
        }
        let was_animating = animating;
        animating = button.borrow_mut().advance(FRAME_DT);
        if f % LOG_EVERY == 0 || was_animating != animating {
            log::info!("[native] f={:03} {}", f, summarize(&button.borrow().render()));
        }
    }

    {
        let mut card = card.borrow_mut();
        card.like.unsubscribe(like_sub);
        card.retweet.unsubscribe(retweet_sub);
    }
    let card = card.borrow();
    log::info!(
        "[native] done: liked={} likes={} retweeted={} retweets={}",
        card.like.is_liked(),
        card.like.count(),
        card.retweet.is_liked(),
        card.retweet.count()
    );
    Ok(())
}
