use std::fmt;
use std::str::FromStr;

/// Card faces from Ace (low) to King (high). Aces are dealt out of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Face {
    Ace = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
}

impl Face {
    pub const ALL: [Face; 13] = [
        Face::Ace,
        Face::Two,
        Face::Three,
        Face::Four,
        Face::Five,
        Face::Six,
        Face::Seven,
        Face::Eight,
        Face::Nine,
        Face::Ten,
        Face::Jack,
        Face::Queen,
        Face::King,
    ];

    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Face with the given rank value (1 = Ace .. 13 = King).
    pub const fn from_value(v: u8) -> Option<Face> {
        if v >= 1 && v <= 13 {
            Some(Face::ALL[(v - 1) as usize])
        } else {
            None
        }
    }

    /// The next face up, or `None` for a King.
    pub const fn next(self) -> Option<Face> {
        Face::from_value(self.value() + 1)
    }

    /// The next face down, or `None` for an Ace.
    pub const fn prev(self) -> Option<Face> {
        Face::from_value(self.value() - 1)
    }

    pub const fn to_char(self) -> char {
        match self {
            Face::Ace => 'A',
            Face::Two => '2',
            Face::Three => '3',
            Face::Four => '4',
            Face::Five => '5',
            Face::Six => '6',
            Face::Seven => '7',
            Face::Eight => '8',
            Face::Nine => '9',
            Face::Ten => 'T',
            Face::Jack => 'J',
            Face::Queen => 'Q',
            Face::King => 'K',
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FaceParseError {
    #[error("invalid face: '{0}'")]
    Invalid(String),
}

impl FromStr for Face {
    type Err = FaceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t == "10" {
            return Ok(Face::Ten);
        }
        let mut chars = t.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Face::try_from(c).map_err(|_| FaceParseError::Invalid(s.to_string())),
            _ => Err(FaceParseError::Invalid(s.to_string())),
        }
    }
}

impl TryFrom<char> for Face {
    type Error = FaceParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'A' | '1' => Ok(Face::Ace),
            '2' => Ok(Face::Two),
            '3' => Ok(Face::Three),
            '4' => Ok(Face::Four),
            '5' => Ok(Face::Five),
            '6' => Ok(Face::Six),
            '7' => Ok(Face::Seven),
            '8' => Ok(Face::Eight),
            '9' => Ok(Face::Nine),
            'T' => Ok(Face::Ten),
            'J' => Ok(Face::Jack),
            'Q' => Ok(Face::Queen),
            'K' => Ok(Face::King),
            _ => Err(FaceParseError::Invalid(c.to_string())),
        }
    }
}

/// Four suits, ordered C < D < H < S for deterministic iteration only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    pub const fn to_char(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }

    pub const fn is_red(self) -> bool {
        matches!(self, Suit::Diamonds | Suit::Hearts)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SuitParseError {
    #[error("invalid suit: '{0}'")]
    Invalid(String),
}

impl FromStr for Suit {
    type Err = SuitParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let mut chars = t.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Suit::try_from(c);
        }
        match t.to_ascii_lowercase().as_str() {
            "clubs" => Ok(Suit::Clubs),
            "diamonds" => Ok(Suit::Diamonds),
            "hearts" => Ok(Suit::Hearts),
            "spades" => Ok(Suit::Spades),
            _ => Err(SuitParseError::Invalid(s.to_string())),
        }
    }
}

impl TryFrom<char> for Suit {
    type Error = SuitParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'c' => Ok(Suit::Clubs),
            'd' => Ok(Suit::Diamonds),
            'h' => Ok(Suit::Hearts),
            's' => Ok(Suit::Spades),
            _ => Err(SuitParseError::Invalid(c.to_string())),
        }
    }
}

/// A playing card: suit + face. Ordering is by suit, then face.
///
/// ```
/// use addiction::cards::{Card, Face, Suit};
///
/// let card = Card::new(Suit::Hearts, Face::Seven);
/// assert_eq!(card.to_string(), "7H");
/// assert_eq!(card.successor(), Some(Card::new(Suit::Hearts, Face::Eight)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    suit: Suit,
    face: Face,
}

impl Card {
    pub const fn new(suit: Suit, face: Face) -> Self {
        Self { suit, face }
    }

    pub const fn suit(self) -> Suit {
        self.suit
    }
    pub const fn face(self) -> Face {
        self.face
    }

    pub const fn is_ace(self) -> bool {
        matches!(self.face, Face::Ace)
    }

    /// The card one face lower in the same suit.
    pub fn predecessor(self) -> Option<Card> {
        self.face.prev().map(|face| Card::new(self.suit, face))
    }

    /// The card one face higher in the same suit.
    pub fn successor(self) -> Option<Card> {
        self.face.next().map(|face| Card::new(self.suit, face))
    }

    /// True iff `other` is not an Ace and `self` is its predecessor.
    pub fn is_predecessor(self, other: Card) -> bool {
        other.predecessor() == Some(self)
    }

    /// True iff `other` is not a King and `self` is its successor.
    pub fn is_successor(self, other: Card) -> bool {
        other.successor() == Some(self)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face, self.suit)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardParseError {
    #[error("invalid card: '{0}'")]
    Invalid(String),
    #[error(transparent)]
    Face(#[from] FaceParseError),
    #[error(transparent)]
    Suit(#[from] SuitParseError),
}

impl FromStr for Card {
    type Err = CardParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if !t.is_ascii() || t.len() < 2 || t.len() > 3 {
            return Err(CardParseError::Invalid(s.to_string()));
        }
        // face is everything but the last char; suit is the last char
        let (face_str, suit_str) = t.split_at(t.len() - 1);
        let face = Face::from_str(face_str)?;
        let suit = Suit::from_str(suit_str)?;
        Ok(Card::new(suit, face))
    }
}

/// Parse multiple cards separated by whitespace or commas.
///
/// ```
/// use addiction::cards::{parse_cards, Card, Face, Suit};
///
/// let cards = parse_cards("2C, 10d QS").unwrap();
/// assert_eq!(cards[0], Card::new(Suit::Clubs, Face::Two));
/// assert_eq!(cards[1], Card::new(Suit::Diamonds, Face::Ten));
/// assert_eq!(cards[2], Card::new(Suit::Spades, Face::Queen));
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<Card>, CardParseError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(Card::from_str)
        .collect()
}
