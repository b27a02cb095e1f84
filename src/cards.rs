//! Card definitions as delivered by the card service.
//!
//! The payload is JSON: `{"cards": [{"id", "name", "matrix", "prizes", "color", "bet"}]}`.
//! `-1` in `matrix` marks an empty slot. Presentation fields such as `color`
//! are accepted and ignored.

use crate::balls::{MAX_BALL, MIN_BALL};
use crate::board::{Board, BoardError};
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum CardError {
    #[error("malformed card payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("card payload contains no cards")]
    EmptyPayload,
    #[error("card {id} has an invalid board: {source}")]
    Board {
        id: i64,
        #[source]
        source: BoardError,
    },
}

/// A prize shown on the board cell carrying `number`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Prize {
    pub id: i64,
    pub title: String,
    pub amount: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub number: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CardDefinition {
    pub id: i64,
    pub name: String,
    pub matrix: Vec<Vec<i32>>,
    #[serde(default)]
    pub prizes: Vec<Prize>,
    #[serde(default)]
    pub bet: Option<i64>,
}

impl CardDefinition {
    /// Map the raw matrix into a playable board.
    pub fn board(&self) -> Result<Board, CardError> {
        Board::from_matrix(&self.matrix).map_err(|source| CardError::Board { id: self.id, source })
    }

    /// The prize decorating `number`, if any.
    pub fn prize_for(&self, number: u8) -> Option<&Prize> {
        self.prizes.iter().find(|p| p.number == i32::from(number))
    }

    /// Prizes keyed by ball number. Prizes naming a number outside the ball
    /// range are left out; the first prize wins when two share a number.
    pub fn prize_table(&self) -> BTreeMap<u8, &Prize> {
        let mut table = BTreeMap::new();
        for p in &self.prizes {
            if let Some(n) = u8::try_from(p.number).ok().filter(|n| (MIN_BALL..=MAX_BALL).contains(n)) {
                table.entry(n).or_insert(p);
            }
        }
        table
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CardsPayload {
    pub cards: Vec<CardDefinition>,
}

impl CardsPayload {
    /// Parse a payload, rejecting one with no cards.
    ///
    /// ```
    /// use bingo_rs::cards::CardsPayload;
    ///
    /// let json = r#"{"cards":[{"id":1,"name":"Lucky","matrix":[[1,-1],[-1,4]],"prizes":[],"bet":10}]}"#;
    /// let payload = CardsPayload::from_json(json).unwrap();
    /// let board = payload.cards[0].board().unwrap();
    /// assert_eq!(board.numbers().collect::<Vec<_>>(), vec![1, 4]);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, CardError> {
        let payload: CardsPayload = serde_json::from_str(json)?;
        if payload.cards.is_empty() {
            return Err(CardError::EmptyPayload);
        }
        Ok(payload)
    }

    pub fn find(&self, id: i64) -> Option<&CardDefinition> {
        self.cards.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
