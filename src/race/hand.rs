use crate::race::card::Card;
use crate::race::deck::Deck;
use crate::race::discard_pile::DiscardPile;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum HandError {
    #[error("Invalid card index {index}. Hand holds {len} cards")]
    InvalidIndex { index: usize, len: usize },
    #[error("Card is not discardable")]
    NotDiscardable,
    #[error("Card is not playable")]
    NotPlayable,
    #[error("No discard pile to discard into")]
    NilTarget,
}

// Removing a card shifts every later card down one position, so callers
// removing several cards should go from the highest index to the lowest.
#[derive(Clone, Debug, Default)]
pub struct Hand(Vec<Card>);

impl Hand {
    pub fn new() -> Self {
        Hand(Vec::new())
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

    pub fn add_cards<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.0.extend(cards);
    }

    // Returns whether a card was drawn.
    pub fn draw_card(&mut self, deck: &mut Deck) -> bool {
        match deck.draw_card() {
            Some(card) => {
                self.0.push(card);
                true
            }
            None => false,
        }
    }

    pub fn discard_card(
        &mut self,
        index: usize,
        discard_pile: Option<&mut DiscardPile>,
    ) -> Result<(), HandError> {
        let card = self.get(index)?;
        if !card.is_discardable() {
            return Err(HandError::NotDiscardable);
        }
        let discard_pile = discard_pile.ok_or(HandError::NilTarget)?;
        discard_pile.add_card(self.0.remove(index));
        Ok(())
    }

    pub fn play_card(&mut self, index: usize) -> Result<Card, HandError> {
        if !self.get(index)?.is_playable() {
            return Err(HandError::NotPlayable);
        }
        Ok(self.0.remove(index))
    }

    fn get(&self, index: usize) -> Result<&Card, HandError> {
        self.0.get(index).ok_or(HandError::InvalidIndex {
            index,
            len: self.0.len(),
        })
    }
}
