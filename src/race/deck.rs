use crate::race::card::Card;
use std::collections::VecDeque;
use tracing::debug;

pub trait ShuffleRng {
    fn shuffle<T>(&mut self, items: &mut [T]);
}

// Front of the queue is the next card drawn.
#[derive(Clone, Debug, Default)]
pub struct Deck(VecDeque<Card>);

impl Deck {
    pub fn new(cards: Vec<Card>) -> Self {
        Deck(cards.into())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.0.iter()
    }

    pub fn contains_basic(&self) -> bool {
        self.0.iter().any(Card::is_basic)
    }

    // Running out of cards is part of the game, so an empty deck just yields nothing.
    pub fn draw_card(&mut self) -> Option<Card> {
        self.0.pop_front()
    }

    pub fn shuffle<R: ShuffleRng>(&mut self, rng: &mut R) {
        rng.shuffle(self.0.make_contiguous());
        debug!("shuffled deck of {} cards", self.0.len());
    }

    // Keeps the given order: cards[0] becomes the next draw.
    pub fn add_cards_to_top(&mut self, cards: Vec<Card>) {
        for card in cards.into_iter().rev() {
            self.0.push_front(card);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::race::game_state::DeckRng;
    use crate::race::icon::Icons;
    use proptest::prelude::*;

    struct MockRng;

    impl ShuffleRng for MockRng {
        fn shuffle<T>(&mut self, items: &mut [T]) {
            items.reverse();
        }
    }

    fn card(name: &str) -> Card {
        Card::new(name.to_string(), 1, Icons::new(), true, true, true)
    }

    fn names(deck: &Deck) -> Vec<String> {
        deck.cards().map(|c| c.name().to_string()).collect()
    }

    #[test]
    fn test_draw_card() {
        let mut deck = Deck::new(vec![card("a"), card("b")]);
        assert_eq!(deck.draw_card().unwrap().name(), "a");
        assert_eq!(deck.draw_card().unwrap().name(), "b");
        assert!(deck.draw_card().is_none());
        assert!(deck.is_empty());
    }

    #[test]
    fn test_add_cards_to_top_preserves_order() {
        let mut deck = Deck::new(vec![card("c")]);
        deck.add_cards_to_top(vec![card("a"), card("b")]);
        assert_eq!(names(&deck), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_add_no_cards_to_top() {
        let mut deck = Deck::new(vec![card("a")]);
        deck.add_cards_to_top(vec![]);
        assert_eq!(names(&deck), vec!["a"]);
    }

    #[test]
    fn test_shuffle_uses_injected_rng() {
        let mut deck = Deck::new(vec![card("a"), card("b"), card("c")]);
        deck.shuffle(&mut MockRng);
        assert_eq!(names(&deck), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_shuffle_after_front_draws() {
        let mut deck = Deck::new(vec![card("a"), card("b"), card("c"), card("d")]);
        deck.draw_card();
        deck.add_cards_to_top(vec![card("e")]);
        deck.shuffle(&mut MockRng);
        assert_eq!(names(&deck), vec!["d", "c", "b", "e"]);
    }

    #[test]
    fn test_seeded_shuffle_is_deterministic() {
        let cards: Vec<Card> = (0..20).map(|i| card(&i.to_string())).collect();
        let mut deck1 = Deck::new(cards.clone());
        let mut deck2 = Deck::new(cards);
        deck1.shuffle(&mut DeckRng::seeded(7));
        deck2.shuffle(&mut DeckRng::seeded(7));
        assert_eq!(names(&deck1), names(&deck2));
    }

    proptest! {
        #[test]
        fn test_shuffle_preserves_cards(raw in prop::collection::vec(0u8..5, 0..40), seed in any::<u64>()) {
            let mut deck = Deck::new(raw.iter().map(|n| card(&n.to_string())).collect());
            let mut before = names(&deck);
            deck.shuffle(&mut DeckRng::seeded(seed));
            let mut after = names(&deck);
            before.sort();
            after.sort();
            prop_assert_eq!(before, after);
        }
    }
}
