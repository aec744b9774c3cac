//! Birth/survival rule for cave generation, written `B<digits>/S<digits>`.
//!
//! `B678/S345678` means: an empty cell turns to wall with 6, 7 or 8 wall
//! neighbors, and a wall stays wall with 3 through 8.

use std::fmt;
use std::str::FromStr;

use crate::core::error::{EngineError, EngineResult};

/// Moore neighborhood counts run 0..=8
const NEIGHBOR_SLOTS: usize = 9;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    birth: [bool; NEIGHBOR_SLOTS],
    survival: [bool; NEIGHBOR_SLOTS],
}

impl Rule {
    pub fn parse(text: &str) -> EngineResult<Self> {
        let fail = |reason: String| EngineError::Format {
            rule: text.to_string(),
            reason,
        };

        let mut halves = text.split('/');
        let (Some(birth), Some(survival), None) = (halves.next(), halves.next(), halves.next())
        else {
            return Err(fail("expected exactly one '/'".to_string()));
        };

        Ok(Self {
            birth: parse_counts(birth, 'B').map_err(fail)?,
            survival: parse_counts(survival, 'S').map_err(fail)?,
        })
    }

    #[inline]
    pub fn births(&self, neighbors: u8) -> bool {
        self.birth.get(neighbors as usize).copied().unwrap_or(false)
    }

    #[inline]
    pub fn survives(&self, neighbors: u8) -> bool {
        self.survival.get(neighbors as usize).copied().unwrap_or(false)
    }

    pub fn birth_counts(&self) -> Vec<u8> {
        counts_of(&self.birth)
    }

    pub fn survival_counts(&self) -> Vec<u8> {
        counts_of(&self.survival)
    }
}

impl FromStr for Rule {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rule::parse(s)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B")?;
        for n in self.birth_counts() {
            write!(f, "{}", n)?;
        }
        write!(f, "/S")?;
        for n in self.survival_counts() {
            write!(f, "{}", n)?;
        }
        Ok(())
    }
}

fn parse_counts(half: &str, letter: char) -> Result<[bool; NEIGHBOR_SLOTS], String> {
    let mut chars = half.chars();
    match chars.next() {
        Some(c) if c == letter => {}
        Some(c) => return Err(format!("expected '{}' but found '{}'", letter, c)),
        None => return Err(format!("missing '{}' section", letter)),
    }

    let mut counts = [false; NEIGHBOR_SLOTS];
    for c in chars {
        let digit = c
            .to_digit(10)
            .ok_or_else(|| format!("'{}' is not a digit in the {} section", c, letter))?;
        let slot = counts
            .get_mut(digit as usize)
            .ok_or_else(|| format!("neighbor count {} is above 8", digit))?;
        *slot = true;
    }
    Ok(counts)
}

fn counts_of(slots: &[bool; NEIGHBOR_SLOTS]) -> Vec<u8> {
    slots
        .iter()
        .enumerate()
        .filter(|&(_, &on)| on)
        .map(|(n, _)| n as u8)
        .collect()
}
