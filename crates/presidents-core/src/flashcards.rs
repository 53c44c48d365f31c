//! Flashcard deck over a roster.
//!
//! Cards are roster records shown through configurable front and back field
//! lists. The deck tracks a traversal order, a cursor, which cards are
//! flipped, and a self-assessed rating per record. Ratings never affect quiz
//! scoring.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::model::PresidentRecord;
use crate::roster::Roster;

/// A piece of a record that can be shown on a card face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardField {
    Number,
    Name,
    Years,
    Party,
    Details,
    Picture,
}

impl CardField {
    pub const ALL: [CardField; 6] = [
        CardField::Number,
        CardField::Name,
        CardField::Years,
        CardField::Party,
        CardField::Details,
        CardField::Picture,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CardField::Number => "President #",
            CardField::Name => "President name",
            CardField::Years => "Years in Office",
            CardField::Party => "Political Party",
            CardField::Details => "Details",
            CardField::Picture => "Picture",
        }
    }

    /// Text line for this field of `record`.
    pub fn render(self, record: &PresidentRecord) -> String {
        match self {
            CardField::Number => format!("#{}", record.number),
            CardField::Name => record.full_name.clone(),
            CardField::Years => record.span(),
            CardField::Party => format!("Political Party: {}", record.party),
            CardField::Details => match record.details.as_deref() {
                Some(details) if !details.is_empty() => format!("Issues: {details}"),
                _ => "Issues: Details coming soon.".to_string(),
            },
            CardField::Picture => record
                .image_url
                .clone()
                .unwrap_or_else(|| "Picture placeholder".to_string()),
        }
    }
}

impl fmt::Display for CardField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match self {
            CardField::Number => "number",
            CardField::Name => "name",
            CardField::Years => "years",
            CardField::Party => "party",
            CardField::Details => "details",
            CardField::Picture => "picture",
        };
        f.write_str(key)
    }
}

impl FromStr for CardField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CardField::ALL
            .into_iter()
            .find(|f| f.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown card field: {}", s.trim()))
    }
}

/// How well the learner says they know a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Good,
    Bad,
    #[default]
    Neutral,
}

impl Rating {
    /// Sort weight for review tables: bad first, good last.
    fn weight(self) -> u8 {
        match self {
            Rating::Bad => 0,
            Rating::Neutral => 1,
            Rating::Good => 2,
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rating::Good => write!(f, "know"),
            Rating::Bad => write!(f, "don't know"),
            Rating::Neutral => write!(f, ""),
        }
    }
}

/// Front and back field lists for every card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardLayout {
    pub front: Vec<CardField>,
    pub back: Vec<CardField>,
}

impl Default for CardLayout {
    fn default() -> Self {
        Self {
            front: vec![CardField::Name],
            back: vec![CardField::Number],
        }
    }
}

impl CardLayout {
    pub fn new(front: Vec<CardField>, back: Vec<CardField>) -> Self {
        Self { front, back }
    }

    /// Front fields, falling back to the name when the list is empty.
    pub fn effective_front(&self) -> &[CardField] {
        if self.front.is_empty() {
            &[CardField::Name]
        } else {
            &self.front
        }
    }

    /// Back fields, falling back to the number when the list is empty.
    pub fn effective_back(&self) -> &[CardField] {
        if self.back.is_empty() {
            &[CardField::Number]
        } else {
            &self.back
        }
    }
}

/// The face of the current card as it should be drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    /// 1-based position in the traversal order.
    pub position: usize,
    pub total: usize,
    pub flipped: bool,
    pub rating: Rating,
    pub fields: Vec<CardField>,
    pub lines: Vec<String>,
}

/// A deck of flashcards, one per roster record.
#[derive(Debug, Clone)]
pub struct FlashcardDeck {
    roster: Arc<Roster>,
    layout: CardLayout,
    order: Vec<usize>,
    cursor: usize,
    flipped: Vec<bool>,
    ratings: Vec<Rating>,
}

impl FlashcardDeck {
    pub fn new(roster: Arc<Roster>, layout: CardLayout) -> Self {
        let len = roster.len();
        Self {
            roster,
            layout,
            order: (0..len).collect(),
            cursor: 0,
            flipped: vec![false; len],
            ratings: vec![Rating::Neutral; len],
        }
    }

    pub fn layout(&self) -> &CardLayout {
        &self.layout
    }

    pub fn set_layout(&mut self, layout: CardLayout) {
        self.layout = layout;
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Roster indices in traversal order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Roster index of the card under the cursor.
    pub fn current_index(&self) -> Option<usize> {
        self.order.get(self.cursor).copied()
    }

    pub fn current(&self) -> Option<&PresidentRecord> {
        self.current_index().and_then(|i| self.roster.get(i))
    }

    pub fn is_flipped(&self, index: usize) -> bool {
        self.flipped.get(index).copied().unwrap_or(false)
    }

    pub fn rating(&self, index: usize) -> Rating {
        self.ratings.get(index).copied().unwrap_or_default()
    }

    /// Move to the next card; stays put on the last one.
    pub fn next(&mut self) -> bool {
        if self.cursor + 1 < self.order.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Move to the previous card; stays put on the first one.
    pub fn previous(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// Toggle the current card between front and back.
    pub fn flip(&mut self) {
        if let Some(index) = self.current_index() {
            self.flipped[index] = !self.flipped[index];
        }
    }

    /// Rate the current card.
    pub fn rate(&mut self, rating: Rating) {
        if let Some(index) = self.current_index() {
            self.ratings[index] = rating;
        }
    }

    /// Randomise the traversal order with `rng`.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.order.shuffle(rng);
        self.rewind();
        tracing::debug!(cards = self.order.len(), "deck shuffled");
    }

    /// Restore roster order.
    pub fn reset_order(&mut self) {
        self.order = (0..self.roster.len()).collect();
        self.rewind();
    }

    fn rewind(&mut self) {
        self.cursor = 0;
        self.flipped.iter_mut().for_each(|f| *f = false);
    }

    /// What to draw for the current card.
    pub fn view(&self) -> Option<CardView> {
        let index = self.current_index()?;
        let record = self.roster.get(index)?;
        let flipped = self.flipped[index];
        let fields = if flipped {
            self.layout.effective_back()
        } else {
            self.layout.effective_front()
        }
        .to_vec();
        let lines = fields.iter().map(|f| f.render(record)).collect();

        Some(CardView {
            position: self.cursor + 1,
            total: self.order.len(),
            flipped,
            rating: self.ratings[index],
            fields,
            lines,
        })
    }

    /// Every record with its rating, least known first and by ordinal within
    /// a rating.
    pub fn by_mastery(&self) -> Vec<(&PresidentRecord, Rating)> {
        let mut rows: Vec<(&PresidentRecord, Rating)> = self
            .roster
            .iter()
            .zip(self.ratings.iter().copied())
            .collect();
        rows.sort_by(|a, b| match a.1.weight().cmp(&b.1.weight()) {
            Ordering::Equal => a.0.number.cmp(&b.0.number),
            other => other,
        });
        rows
    }
}
