mod game;
mod game_save;
mod user;

pub use game::*;
pub use game_save::*;
pub use user::*;
