mod board;
mod car;
mod card;
mod deck;
mod discard_pile;
mod game_state;
mod hand;
mod icon;
mod player;
mod space;

pub use board::{Board, BoardError};
pub use car::{Car, CarError, CarId, Color, MAX_GEAR, MIN_GEAR};
pub use card::{Card, CardKind, HEAT, STRESS};
pub use deck::{Deck, ShuffleRng};
pub use discard_pile::DiscardPile;
pub use game_state::{DeckRng, GameState, Standing};
pub use hand::{Hand, HandError};
pub use icon::{Icon, Icons};
pub use player::{Player, PlayerError};
pub use space::{Space, SpaceError, SPACE_CAPACITY};
