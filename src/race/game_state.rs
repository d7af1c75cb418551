use crate::race::board::Board;
use crate::race::car::CarId;
use crate::race::deck::ShuffleRng;
use crate::race::player::{Player, PlayerError};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;
use std::fmt::Debug;
use tracing::info;

#[derive(Debug)]
pub struct DeckRng {
    rng: StdRng,
}

impl DeckRng {
    pub fn seeded(seed: u64) -> Self {
        DeckRng {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for DeckRng {
    fn default() -> Self {
        DeckRng {
            rng: StdRng::from_entropy(),
        }
    }
}

impl ShuffleRng for DeckRng {
    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Standing {
    pub name: String,
    pub car: CarId,
    pub lap: u32,
    pub space: Option<usize>,
    pub finished: bool,
}

// Everything one match needs. Matches share nothing, so separate
// matches can run on separate threads without locking.
#[derive(Debug)]
pub struct GameState<R: Debug> {
    board: Board,
    players: Vec<Player>,
    rng: R,
}

impl<R: ShuffleRng + Debug> GameState<R> {
    pub fn new(board: Board, players: Vec<Player>, rng: R) -> Self {
        GameState {
            board,
            players,
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, car: CarId) -> Option<&Player> {
        self.players.iter().find(|p| p.car().id() == car)
    }

    pub fn player_mut(&mut self, car: CarId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.car().id() == car)
    }

    // Draws up to `size` cards, shuffling the discard pile back in if the deck runs dry.
    pub fn refill_hand(&mut self, car: CarId, size: usize) -> Option<usize> {
        let player = self.players.iter_mut().find(|p| p.car().id() == car)?;
        player.draw_up_to(size);
        if player.hand().len() < size {
            player.recycle_discard_pile(&mut self.rng);
            player.draw_up_to(size);
        }
        Some(player.hand().len())
    }

    pub fn start_round(&mut self) {
        self.board
            .set_racer_turn_order(self.players.iter().map(Player::car));
        info!(
            "round starts with {} racers",
            self.board.racer_turn_order().len()
        );
    }

    pub fn next_racer(&mut self) -> Option<CarId> {
        self.board.get_next_racer()
    }

    pub fn resolve_turn(&mut self, car: CarId) -> Option<Result<i32, PlayerError>> {
        let player = self.players.iter_mut().find(|p| p.car().id() == car)?;
        Some(player.resolve_played_cards(&mut self.rng))
    }

    pub fn is_over(&self) -> bool {
        self.players
            .iter()
            .any(|p| self.board.has_finished(p.car()))
    }

    // Most laps first, then furthest along the track.
    pub fn standings(&self) -> Vec<Standing> {
        let mut standings: Vec<Standing> = self
            .players
            .iter()
            .map(|p| {
                let car = p.car();
                Standing {
                    name: p.name().to_string(),
                    car: car.id(),
                    lap: car.lap(),
                    space: self.board.position_of(car.id()),
                    finished: self.board.has_finished(car),
                }
            })
            .collect();
        standings.sort_by(|a, b| b.lap.cmp(&a.lap).then(b.space.cmp(&a.space)));
        standings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::race::car::{Car, Color};
    use crate::race::card::Card;
    use crate::race::deck::Deck;
    use crate::race::icon::Icons;
    use crate::race::space::Space;

    fn speed_card(speed: i32) -> Card {
        Card::new(format!("Speed {}", speed), speed, Icons::new(), true, true, true)
    }

    fn game() -> GameState<DeckRng> {
        let spaces = (0..6).map(|i| Space::new(0, i == 0)).collect();
        let mut board = Board::new(spaces, 1);
        board.place_car(CarId(0), 0).unwrap();
        board.place_car(CarId(1), 1).unwrap();
        let players = vec![
            Player::new(
                "Ada".to_string(),
                Car::new(CarId(0), Color::Red, 3),
                Deck::new(vec![speed_card(2), speed_card(3)]),
            ),
            Player::new(
                "Grace".to_string(),
                Car::new(CarId(1), Color::Green, 3),
                Deck::new(vec![Card::stress(), speed_card(4)]),
            ),
        ];
        GameState::new(board, players, DeckRng::seeded(1))
    }

    #[test]
    fn test_seeded_rng_is_deterministic() {
        let mut items1: Vec<u32> = (0..30).collect();
        let mut items2 = items1.clone();
        DeckRng::seeded(3).shuffle(&mut items1);
        DeckRng::seeded(3).shuffle(&mut items2);
        assert_eq!(items1, items2);
    }

    #[test]
    fn test_round() {
        let mut game = game();
        game.player_mut(CarId(1)).unwrap().car_mut().increase_lap();
        game.start_round();

        assert_eq!(game.next_racer(), Some(CarId(1)));
        assert_eq!(game.next_racer(), Some(CarId(0)));
        assert_eq!(game.next_racer(), None);
    }

    #[test]
    fn test_resolve_turn() {
        let mut game = game();
        let grace = game.player_mut(CarId(1)).unwrap();
        grace.draw_card();
        grace.play_card(0).unwrap();

        assert_eq!(game.resolve_turn(CarId(1)), Some(Ok(4)));
        assert_eq!(game.player(CarId(1)).unwrap().car().speed(), 4);
        assert_eq!(game.resolve_turn(CarId(9)), None);
    }

    #[test]
    fn test_refill_hand_recycles_discards() {
        let mut game = game();
        let ada = game.player_mut(CarId(0)).unwrap();
        ada.draw_up_to(2);
        ada.discard_card(0).unwrap();
        ada.discard_card(0).unwrap();

        assert_eq!(game.refill_hand(CarId(0), 2), Some(2));
        let ada = game.player(CarId(0)).unwrap();
        assert!(ada.deck().is_empty());
        assert!(ada.discard_pile().is_empty());
        assert_eq!(game.refill_hand(CarId(9), 2), None);
    }

    #[test]
    fn test_standings_and_finish() {
        let mut game = game();
        assert!(!game.is_over());
        let standings = game.standings();
        assert_eq!(standings[0].name, "Grace");
        assert_eq!(standings[0].space, Some(1));

        game.player_mut(CarId(0)).unwrap().car_mut().increase_lap();
        assert!(game.is_over());
        let standings = game.standings();
        assert_eq!(standings[0].name, "Ada");
        assert!(standings[0].finished);
    }
}
