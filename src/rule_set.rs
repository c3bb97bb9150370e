use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Rules of Conway's Game of Life.
pub const B3S23: RuleSet = RuleSet::new(0b1000, 0b1100);

/// # Representation
/// Life rules are represented as
/// ```notrust
/// |------birth------|
/// 0000_0000_0000_0000_0000_0000_0000_0000
///                     |----survival-----|
/// ```
///
/// # Examples
/// ```notrust
/// b3s23:                0000_0000_0000_1000_0000_0000_0000_1100
///
/// b0s0:                 0000_0000_0000_0000_0000_0000_0000_0000
/// b12345678s012345678:  0000_0001_1111_1110_0000_0001_1111_1111
/// ```
///
/// Births on zero neighbors are never representable: a sparse world only looks at cells next to
/// life, so `B0` would require evaluating the whole plane.
///
/// See: https://conwaylife.com/wiki/Rulestring
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct RuleSet {
    rule: u32,
}

impl Default for RuleSet {
    fn default() -> Self {
        B3S23
    }
}

impl RuleSet {
    /// Create a new `RuleSet` for the given births and survivals. For both `b` and
    /// `s`, numbers are set on a bit basis. For instance if bit `i` in `b` is on, it
    /// means `i` is included in the set of births. Any bit past the 8th is ignored, as is bit 0
    /// of `b`.
    pub const fn new(b: u16, s: u16) -> Self {
        let b = b & 0x1FE;
        let s = s & 0x1FF;

        Self {
            rule: (b as u32) << 16 | s as u32,
        }
    }

    pub fn births(&self) -> u16 {
        ((self.rule & 0x1FF0000) >> 0x10) as u16
    }

    pub fn survivals(&self) -> u16 {
        (self.rule & 0x1FF) as u16
    }

    /// Whether a cell is alive in the next generation, given whether it's alive now and how many
    /// of its 8 neighbors are.
    pub fn next_state(&self, alive: bool, neighbors: u8) -> bool {
        if neighbors > 8 {
            return false;
        }

        let mask = 1 << neighbors;

        if alive {
            self.survivals() & mask == mask
        } else {
            self.births() & mask == mask
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleError {
    #[error("Rule is empty")]
    Empty,

    #[error("Expected a '/' between births and survivals")]
    MissingSeparator,

    #[error("Expected digits only, but got '{got}'")]
    InvalidDigit { got: char },

    #[error("Neighbor count {got} is larger than 8")]
    OutOfRange { got: u32 },

    #[error("Births on 0 neighbors are not supported")]
    BirthOnZero,
}

/// Convert the human readable birth/survival digits to a packed bit representation
fn digits_to_num(digits: &str) -> Result<u16, RuleError> {
    let mut n = 0;

    for c in digits.chars() {
        let d = c.to_digit(10).ok_or(RuleError::InvalidDigit { got: c })?;

        if d > 8 {
            return Err(RuleError::OutOfRange { got: d });
        }

        n |= 1 << d;
    }

    Ok(n)
}

/// Accepts `B3/S23`, `b3s23` and the nameless `3/23` form.
impl FromStr for RuleSet {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if s.is_empty() {
            return Err(RuleError::Empty);
        }

        let (b, s) = match s.strip_prefix(['b', 'B']) {
            Some(rest) => {
                let (b, s) = rest
                    .split_once(['s', 'S'])
                    .ok_or(RuleError::MissingSeparator)?;

                (b.strip_suffix('/').unwrap_or(b), s)
            }
            None => s.split_once('/').ok_or(RuleError::MissingSeparator)?,
        };

        let b = digits_to_num(b)?;
        let s = digits_to_num(s)?;

        if b & 1 == 1 {
            return Err(RuleError::BirthOnZero);
        }

        Ok(RuleSet::new(b, s))
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = |mask: u16| -> String {
            (0..=8u8)
                .filter(|&n| mask & (1u16 << n) != 0)
                .map(|n| char::from(b'0' + n))
                .collect()
        };

        write!(f, "B{}/S{}", digits(self.births()), digits(self.survivals()))
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RuleSet({self})")
    }
}
