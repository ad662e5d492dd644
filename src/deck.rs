use crate::cards::{Card, Face, Suit};
use rand::seq::SliceRandom;
use rand::Rng;

/// An ordered pile of distinct cards; the full 52 for a deal, or the loose
/// cards left over once the correct runs are set aside for a shuffle.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// ```
    /// use addiction::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(52);
        for &s in &Suit::ALL {
            for &f in &Face::ALL {
                cards.push(Card::new(s, f));
            }
        }
        Self { cards }
    }

    /// The standard deck minus every card matched by `reject`.
    pub fn without<F: Fn(Card) -> bool>(reject: F) -> Self {
        let mut deck = Self::standard();
        deck.cards.retain(|&c| !reject(c));
        deck
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
