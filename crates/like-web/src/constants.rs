/// Host-page wiring constants.
///
/// Element ids and data attributes the page is expected to provide; anything
/// optional is looked up with `Option` and skipped when absent.
pub const LIKE_BUTTON_ID: &str = "like-button";
pub const LIKE_COUNT_ID: &str = "like-count";
pub const RETWEET_COUNT_ID: &str = "retweet-count";

pub const ATTR_SIZE: &str = "data-size";
pub const ATTR_CONFETTI: &str = "data-confetti";
pub const ATTR_LIKES: &str = "data-likes";
pub const ATTR_ACTION: &str = "data-action";

// Seed counts when the page does not supply them
pub const MAX_INITIAL_LIKES: u64 = 1000;
pub const MAX_INITIAL_RETWEETS: u64 = 100;

// Class toggled on action buttons that are switched on
pub const ACTIVE_CLASS: &str = "is-on";

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: no-preference)";
