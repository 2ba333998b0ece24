//! Toggle state owned by the surrounding card.
//!
//! A `ToggleMachine` holds one liked/unliked flag together with its count and
//! notifies subscribers synchronously after every mutation. The card keeps one
//! machine for likes and one for retweets; the animation engine only ever sees
//! the like side, passed down as props.

use crate::error::{LikeError, Result};
use crate::observer::{SubscriptionId, Subscribers};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ButtonState {
    pub is_liked: bool,
    pub count: u64,
}

impl ButtonState {
    pub fn new(is_liked: bool, count: u64) -> Self {
        Self { is_liked, count }
    }

    /// The state after one toggle. Count moves by exactly one and saturates at zero.
    pub fn toggled(self) -> Self {
        if self.is_liked {
            if self.count == 0 {
                log::warn!("[state] unlike with a zero count; keeping count at 0");
            }
            Self {
                is_liked: false,
                count: self.count.saturating_sub(1),
            }
        } else {
            Self {
                is_liked: true,
                count: self.count.saturating_add(1),
            }
        }
    }
}

pub struct ToggleMachine {
    state: ButtonState,
    subscribers: Subscribers<ButtonState>,
}

impl ToggleMachine {
    pub fn new(initial: ButtonState) -> Self {
        Self {
            state: initial,
            subscribers: Subscribers::new(),
        }
    }

    pub fn state(&self) -> ButtonState {
        self.state
    }

    pub fn is_liked(&self) -> bool {
        self.state.is_liked
    }

    pub fn count(&self) -> u64 {
        self.state.count
    }

    /// Flip the state and notify every subscriber before returning.
    ///
    /// Each call is applied immediately; there is no debouncing or queueing.
    pub fn toggle(&mut self) {
        self.state = self.state.toggled();
        log::debug!(
            "[state] toggled -> liked={} count={}",
            self.state.is_liked,
            self.state.count
        );
        self.subscribers.notify(&self.state);
    }

    pub fn subscribe(&mut self, handler: impl Fn(&ButtonState) + 'static) -> SubscriptionId {
        self.subscribers.add(handler)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardAction {
    ToggleLike,
    ToggleRetweet,
}

impl CardAction {
    pub fn name(self) -> &'static str {
        match self {
            CardAction::ToggleLike => "toggle-like",
            CardAction::ToggleRetweet => "toggle-retweet",
        }
    }
}

impl FromStr for CardAction {
    type Err = LikeError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "toggle-like" => Ok(CardAction::ToggleLike),
            "toggle-retweet" => Ok(CardAction::ToggleRetweet),
            other => Err(LikeError::UnknownAction(other.to_string())),
        }
    }
}

/// Like and retweet toggles for a single post.
pub struct CardState {
    pub like: ToggleMachine,
    pub retweet: ToggleMachine,
}

impl CardState {
    pub fn new(num_of_likes: u64, num_of_retweets: u64) -> Self {
        Self {
            like: ToggleMachine::new(ButtonState::new(false, num_of_likes)),
            retweet: ToggleMachine::new(ButtonState::new(false, num_of_retweets)),
        }
    }

    /// Current state of the toggle an action drives.
    pub fn state(&self, action: CardAction) -> ButtonState {
        match action {
            CardAction::ToggleLike => self.like.state(),
            CardAction::ToggleRetweet => self.retweet.state(),
        }
    }

    pub fn dispatch(&mut self, action: CardAction) {
        match action {
            CardAction::ToggleLike => self.like.toggle(),
            CardAction::ToggleRetweet => self.retweet.toggle(),
        }
    }
}
