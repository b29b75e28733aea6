//! Game state for numpath.
//!
//! - [`Game`] holds one puzzle being played: the drawn path, the visible hints
//!   and the win check.
//! - [`GameSession`] walks through levels, generating a new [`Game`] for each
//!   one and retrying generation a bounded number of times.
//! - [`LevelPolicy`] maps level numbers to board size, hidden rate and obstacle
//!   count.

pub use self::{error::*, game::*, level::*, session::*, settings::*};

mod error;
mod game;
mod level;
mod session;
mod settings;
