use crate::race::card::Card;
use crate::race::deck::{Deck, ShuffleRng};
use tracing::debug;

#[derive(Clone, Debug, Default)]
pub struct DiscardPile(Vec<Card>);

impl DiscardPile {
    pub fn new() -> Self {
        DiscardPile(Vec::new())
    }

    pub fn add_card(&mut self, card: Card) {
        self.0.push(card);
    }

    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains_basic(&self) -> bool {
        self.0.iter().any(Card::is_basic)
    }

    // Folds every discarded card back into the deck and shuffles it.
    // The pile is emptied in the same step the cards reach the deck.
    pub fn reset_deck<R: ShuffleRng>(&mut self, deck: &mut Deck, rng: &mut R) {
        let cards = std::mem::take(&mut self.0);
        debug!("returning {} discarded cards to the deck", cards.len());
        deck.add_cards_to_top(cards);
        deck.shuffle(rng);
    }
}
