//! Win patterns and the win check.
//!
//! A pattern is a structural rule over a [`Board`]: it lists the position sets
//! that each form one instance of the pattern. The check intersects those sets
//! with the positions marked by the drawn balls. Winning sets are re-derived
//! from the board on every check; a session makes at most 90 draws.

use crate::balls::DrawnSet;
use crate::board::{Board, Position};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

/// Positions that together form one instance of a pattern.
pub type WinningSet = BTreeSet<Position>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub enum WinPattern {
    /// Any complete row.
    Row,
    /// The four grid corners.
    FourCorners,
    /// Every playable cell.
    FullHouse,
}

impl WinPattern {
    /// The product's active pattern set.
    pub const ALL: [WinPattern; 3] = [WinPattern::Row, WinPattern::FourCorners, WinPattern::FullHouse];

    pub const fn name(self) -> &'static str {
        match self {
            WinPattern::Row => "Row",
            WinPattern::FourCorners => "Four Corners",
            WinPattern::FullHouse => "Full House",
        }
    }

    /// Winning sets this pattern defines on `board`, independent of any draws.
    ///
    /// ```
    /// use bingo_rs::board::Board;
    /// use bingo_rs::patterns::WinPattern;
    ///
    /// let board: Board = "1 2 3; 4 5 6; 7 8 9".parse().unwrap();
    /// assert_eq!(WinPattern::Row.positions(&board).len(), 3);
    /// assert_eq!(WinPattern::FourCorners.positions(&board)[0].len(), 4);
    /// ```
    pub fn positions(self, board: &Board) -> Vec<WinningSet> {
        let (rows, cols) = (board.rows(), board.cols());
        match self {
            WinPattern::Row => (0..rows)
                .map(|r| (0..cols).map(|c| Position::new(r, c)).collect())
                .collect(),
            WinPattern::FourCorners => {
                if rows == 0 || cols == 0 {
                    return Vec::new();
                }
                vec![[
                    Position::new(0, 0),
                    Position::new(0, cols - 1),
                    Position::new(rows - 1, 0),
                    Position::new(rows - 1, cols - 1),
                ]
                .into_iter()
                .collect()]
            }
            WinPattern::FullHouse => {
                vec![board.cells().filter(|(_, cell)| !cell.is_empty()).map(|(p, _)| p).collect()]
            }
        }
    }
}

impl fmt::Display for WinPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PatternParseError {
    #[error("unknown win pattern: '{0}'")]
    Unknown(String),
}

impl FromStr for WinPattern {
    type Err = PatternParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String =
            s.trim().chars().filter(|c| !matches!(c, ' ' | '-' | '_')).collect();
        match key.to_ascii_lowercase().as_str() {
            "row" | "rows" | "line" => Ok(WinPattern::Row),
            "fourcorners" | "corners" => Ok(WinPattern::FourCorners),
            "fullhouse" | "house" | "bingo" => Ok(WinPattern::FullHouse),
            _ => Err(PatternParseError::Unknown(s.to_string())),
        }
    }
}

/// Patterns with at least one fully marked winning set, and those sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WinCheck {
    achieved: BTreeMap<WinPattern, Vec<WinningSet>>,
}

impl WinCheck {
    pub fn has_win(&self) -> bool {
        !self.achieved.is_empty()
    }

    pub fn len(&self) -> usize {
        self.achieved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.achieved.is_empty()
    }

    pub fn contains(&self, pattern: WinPattern) -> bool {
        self.achieved.contains_key(&pattern)
    }

    pub fn get(&self, pattern: WinPattern) -> Option<&[WinningSet]> {
        self.achieved.get(&pattern).map(Vec::as_slice)
    }

    /// Look up by display name, e.g. `"Four Corners"`.
    pub fn get_by_name(&self, name: &str) -> Option<&[WinningSet]> {
        self.achieved.iter().find(|(p, _)| p.name() == name).map(|(_, sets)| sets.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (WinPattern, &[WinningSet])> + '_ {
        self.achieved.iter().map(|(p, sets)| (*p, sets.as_slice()))
    }

    /// Union of every completed winning set, for highlighting.
    pub fn winning_positions(&self) -> BTreeSet<Position> {
        self.achieved.values().flatten().flatten().copied().collect()
    }
}

/// Evaluate `patterns` against the positions marked by `drawn`.
///
/// ```
/// use bingo_rs::balls::DrawnSet;
/// use bingo_rs::board::Board;
/// use bingo_rs::patterns::{check_wins, WinPattern};
///
/// let board: Board = "1 2 3; 4 5 6; 7 8 9".parse().unwrap();
/// let drawn: DrawnSet = [1, 2, 3].into_iter().collect();
/// let wins = check_wins(&board, &drawn, &WinPattern::ALL);
/// assert!(wins.contains(WinPattern::Row));
/// assert!(!wins.contains(WinPattern::FullHouse));
/// ```
pub fn check_wins(board: &Board, drawn: &DrawnSet, patterns: &[WinPattern]) -> WinCheck {
    let marked = board.marked_positions(drawn);
    let achieved = patterns
        .iter()
        .filter_map(|&pattern| {
            let ok: Vec<WinningSet> = pattern
                .positions(board)
                .into_iter()
                .filter(|set| set.is_subset(&marked))
                .collect();
            (!ok.is_empty()).then_some((pattern, ok))
        })
        .collect();
    WinCheck { achieved }
}
