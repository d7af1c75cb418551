use crate::race::car::{Car, CarError};
use crate::race::card::{Card, CardKind};
use crate::race::deck::{Deck, ShuffleRng};
use crate::race::discard_pile::DiscardPile;
use crate::race::hand::{Hand, HandError};
use crate::race::icon::Icons;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PlayerError {
    #[error(transparent)]
    Hand(#[from] HandError),
    #[error(transparent)]
    Car(#[from] CarError),
    #[error("No basic card left in the deck or discard pile")]
    NoBasicCardAvailable,
}

#[derive(Debug)]
pub struct Player {
    name: String,
    car: Car,
    deck: Deck,
    hand: Hand,
    discard_pile: DiscardPile,
    played_cards: Vec<Card>,
    icons: Icons,
}

impl Player {
    pub fn new(name: String, car: Car, deck: Deck) -> Self {
        Player {
            name,
            car,
            deck,
            hand: Hand::new(),
            discard_pile: DiscardPile::new(),
            played_cards: Vec::new(),
            icons: Icons::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn car(&self) -> &Car {
        &self.car
    }

    // Movement and laps are settled outside the player.
    pub fn car_mut(&mut self) -> &mut Car {
        &mut self.car
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn discard_pile(&self) -> &DiscardPile {
        &self.discard_pile
    }

    pub fn played_cards(&self) -> &[Card] {
        &self.played_cards
    }

    pub fn icons(&self) -> &Icons {
        &self.icons
    }

    pub fn add_icons(&mut self, icons: &Icons) {
        self.icons.merge(icons);
    }

    pub fn draw_card(&mut self) -> bool {
        self.hand.draw_card(&mut self.deck)
    }

    // Draws until the hand holds `size` cards or the deck runs out.
    pub fn draw_up_to(&mut self, size: usize) {
        while self.hand.len() < size && self.draw_card() {}
    }

    pub fn recycle_discard_pile<R: ShuffleRng>(&mut self, rng: &mut R) {
        self.discard_pile.reset_deck(&mut self.deck, rng);
    }

    pub fn discard_card(&mut self, index: usize) -> Result<(), PlayerError> {
        self.hand.discard_card(index, Some(&mut self.discard_pile))?;
        Ok(())
    }

    pub fn play_card(&mut self, index: usize) -> Result<(), PlayerError> {
        let card = self.hand.play_card(index)?;
        self.played_cards.push(card);
        Ok(())
    }

    // Heat from a double shift lands in this player's discard pile.
    pub fn shift_gear(&mut self, gear: u8) -> Result<(), PlayerError> {
        let icons = self.car.set_gear(gear, Some(&mut self.discard_pile))?;
        self.add_icons(&icons);
        Ok(())
    }

    // Sums speed and icons of the played cards. Each Stress card adds the speed of
    // the next basic card drawn. Nothing is committed on error, but cards drawn
    // for Stress stay in the discard pile.
    pub fn resolve_played_cards<R: ShuffleRng>(&mut self, rng: &mut R) -> Result<i32, PlayerError> {
        let mut speed = 0;
        let mut icons = Icons::new();
        let stress_count = self
            .played_cards
            .iter()
            .filter(|c| c.kind() == CardKind::Stress)
            .count();
        for _ in 0..stress_count {
            speed += self.resolve_stress_card(rng)?;
        }
        for card in &self.played_cards {
            speed += card.speed();
            icons.merge(card.icons());
        }

        self.add_icons(&icons);
        self.car.set_speed(speed);
        self.discard_played_cards();
        debug!("{} resolved to speed {}", self.name, speed);
        Ok(speed)
    }

    pub fn discard_played_cards(&mut self) {
        for card in self.played_cards.drain(..) {
            self.discard_pile.add_card(card);
        }
    }

    fn resolve_stress_card<R: ShuffleRng>(&mut self, rng: &mut R) -> Result<i32, PlayerError> {
        loop {
            if self.deck.is_empty() {
                // Everything recoverable is in the discard pile now.
                if !self.discard_pile.contains_basic() {
                    warn!("{} has no basic card left to resolve Stress", self.name);
                    return Err(PlayerError::NoBasicCardAvailable);
                }
                self.discard_pile.reset_deck(&mut self.deck, rng);
            }
            let Some(card) = self.deck.draw_card() else {
                return Err(PlayerError::NoBasicCardAvailable);
            };
            let basic_speed = card.is_basic().then(|| card.speed());
            self.discard_pile.add_card(card);
            if let Some(speed) = basic_speed {
                return Ok(speed);
            }
        }
    }
}
