pub mod burst;
pub mod constants;
pub mod engine;
pub mod error;
pub mod motion;
pub mod observer;
pub mod particles;
pub mod spring;
pub mod state;
pub mod view;

pub use burst::*;
pub use constants::*;
pub use engine::*;
pub use error::{LikeError, Result};
pub use motion::*;
pub use observer::*;
pub use particles::*;
pub use spring::*;
pub use state::*;
pub use view::*;
