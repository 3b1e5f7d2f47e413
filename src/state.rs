use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::{Result, ToggleError};
use crate::types::{Vertex, MAX_VERTICES};

/// A fixed-length on/off assignment over the vertices of a graph.
///
/// Bit `v` of `bits` is the state of vertex `v`. Bits at or above `len` are
/// always zero, so derived equality and hashing are exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameState {
    bits: u128,
    len: u8,
}

#[inline]
fn full_mask(n: usize) -> u128 {
    if n >= MAX_VERTICES {
        u128::MAX
    } else {
        (1u128 << n) - 1
    }
}

impl GameState {
    /// All vertices off.
    pub fn all_off(n: usize) -> Result<Self> {
        Self::from_bits(0, n)
    }

    /// All vertices on.
    pub fn all_on(n: usize) -> Result<Self> {
        Self::from_bits(u128::MAX, n)
    }

    /// Build from a raw bit pattern; bits at or above `n` are dropped.
    pub fn from_bits(bits: u128, n: usize) -> Result<Self> {
        if n > MAX_VERTICES {
            return Err(ToggleError::GraphTooLarge { n, max: MAX_VERTICES });
        }
        Ok(Self {
            bits: bits & full_mask(n),
            len: n as u8,
        })
    }

    /// Parse a bitstring such as `"0110"`, character `i` giving vertex `i`.
    /// The text must be exactly `n` characters over `{0, 1}`.
    pub fn parse(text: &str, n: usize) -> Result<Self> {
        if n > MAX_VERTICES {
            return Err(ToggleError::GraphTooLarge { n, max: MAX_VERTICES });
        }
        let count = text.chars().count();
        if count != n {
            return Err(ToggleError::invalid_state(format!(
                "expected {n} bits, got {count} in '{text}'"
            )));
        }
        let mut bits = 0u128;
        for (i, ch) in text.chars().enumerate() {
            match ch {
                '0' => {}
                '1' => bits |= 1u128 << i,
                other => {
                    return Err(ToggleError::invalid_state(format!(
                        "non-binary character '{other}' at position {i}"
                    )))
                }
            }
        }
        Ok(Self { bits, len: n as u8 })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn bits(&self) -> u128 {
        self.bits
    }

    /// Unchecked read used on hot paths where `v < len` is already known.
    #[inline]
    pub(crate) fn is_on(&self, v: Vertex) -> bool {
        debug_assert!(v < self.len());
        (self.bits >> v) & 1 == 1
    }

    /// Checked read of vertex `v`.
    pub fn get(&self, v: Vertex) -> Result<bool> {
        if v >= self.len() {
            return Err(ToggleError::IndexOutOfRange { vertex: v, n: self.len() });
        }
        Ok(self.is_on(v))
    }

    #[inline]
    pub fn count_on(&self) -> u32 {
        self.bits.count_ones()
    }

    /// Flip every vertex whose bit is set in `mask`.
    #[inline]
    pub(crate) fn xor_mask(self, mask: u128) -> Self {
        Self {
            bits: (self.bits ^ mask) & full_mask(self.len()),
            len: self.len,
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in 0..self.len() {
            f.write_str(if self.is_on(v) { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl Serialize for GameState {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Starting configuration selected on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StartConfig {
    /// Every vertex on.
    #[default]
    All,
    /// Second half of the vertex order on (the inner cycle of a Petersen graph).
    Inner,
    /// First half of the vertex order on (the outer cycle of a Petersen graph).
    Outer,
    /// Twisted-ladder position left after an inner move on an all-on board:
    /// both rows lit except the row ends and the vertices next to the twist.
    InnerTwist { k: usize },
    /// Twisted-ladder position left after an outer move on an all-on board.
    OuterTwist,
    /// Literal bitstring.
    Bits(String),
}

impl StartConfig {
    /// `i`, `o` and `a` select the named halves; anything else is taken as a bitstring.
    pub fn from_token(token: &str) -> Self {
        match token {
            "a" | "A" | "" => StartConfig::All,
            "i" | "I" => StartConfig::Inner,
            "o" | "O" => StartConfig::Outer,
            other => StartConfig::Bits(other.to_string()),
        }
    }

    /// Like [`StartConfig::from_token`], plus `ti` and `to` for the two twist
    /// positions of a ladder with offset `k`.
    pub fn from_ladder_token(token: &str, k: usize) -> Self {
        match token {
            "ti" => StartConfig::InnerTwist { k },
            "to" => StartConfig::OuterTwist,
            other => Self::from_token(other),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StartConfig::All => "all 1's",
            StartConfig::Inner => "1's inside",
            StartConfig::Outer => "1's outside",
            StartConfig::InnerTwist { .. } => "inner twist",
            StartConfig::OuterTwist => "outer twist",
            StartConfig::Bits(_) => "custom",
        }
    }

    /// Materialize the configuration for a graph with `n` vertices.
    pub fn to_state(&self, n: usize) -> Result<GameState> {
        match self {
            StartConfig::All => GameState::all_on(n),
            StartConfig::Inner | StartConfig::Outer => {
                if n % 2 != 0 {
                    return Err(ToggleError::invalid_state(format!(
                        "'{}' needs an even vertex count, graph has {n}",
                        self.label()
                    )));
                }
                let half = full_mask(n / 2);
                let bits = if *self == StartConfig::Outer { half } else { half << (n / 2) };
                GameState::from_bits(bits, n)
            }
            StartConfig::InnerTwist { k } => {
                let w = n / 2;
                if n % 2 != 0 || *k == 0 || w < 2 || *k > (w - 2) / 2 {
                    return Err(ToggleError::invalid_state(format!(
                        "inner twist with k = {k} needs 2k + 2 <= n/2, graph has {n} vertices"
                    )));
                }
                let top = format!("0{}0", "1".repeat(w - 2));
                let side = format!("0{}0", "1".repeat(k - 1));
                let bottom = format!("{side}{}{side}", "1".repeat(w - 2 - 2 * k));
                GameState::parse(&format!("{top}{bottom}"), n)
            }
            StartConfig::OuterTwist => {
                let w = n / 2;
                if n % 2 != 0 || w < 4 {
                    return Err(ToggleError::invalid_state(format!(
                        "outer twist needs an even vertex count of at least 8, graph has {n}"
                    )));
                }
                let text = format!("00{}000{}0", "1".repeat(w - 4), "1".repeat(w - 2));
                GameState::parse(&text, n)
            }
            StartConfig::Bits(text) => GameState::parse(text, n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display_agree() {
        let s = GameState::parse("0110", 4).unwrap();
        assert_eq!(s.bits(), 0b0110);
        assert_eq!(s.to_string(), "0110");
        assert_eq!(s.count_on(), 2);
    }

    #[test]
    fn parse_rejects_wrong_length_and_alphabet() {
        assert!(matches!(GameState::parse("011", 4), Err(ToggleError::InvalidState { .. })));
        assert!(matches!(GameState::parse("01101", 4), Err(ToggleError::InvalidState { .. })));
        assert!(matches!(GameState::parse("01a0", 4), Err(ToggleError::InvalidState { .. })));
        assert!(matches!(GameState::parse(" 0110", 4), Err(ToggleError::InvalidState { .. })));
        assert!(matches!(GameState::parse("0110 ", 4), Err(ToggleError::InvalidState { .. })));
    }

    #[test]
    fn full_width_state() {
        let s = GameState::all_on(MAX_VERTICES).unwrap();
        assert_eq!(s.count_on(), 128);
        assert!(GameState::all_on(MAX_VERTICES + 1).is_err());
    }

    #[test]
    fn halves() {
        assert_eq!(StartConfig::Outer.to_state(6).unwrap().to_string(), "111000");
        assert_eq!(StartConfig::Inner.to_state(6).unwrap().to_string(), "000111");
        assert!(StartConfig::Inner.to_state(5).is_err());
        assert_eq!(StartConfig::from_token("0101"), StartConfig::Bits("0101".into()));
    }

    #[test]
    fn twist_positions() {
        let inner = StartConfig::from_ladder_token("ti", 2);
        assert_eq!(inner, StartConfig::InnerTwist { k: 2 });
        assert_eq!(inner.to_state(14).unwrap().to_string(), "01111100101010");
        assert_eq!(StartConfig::OuterTwist.to_state(14).unwrap().to_string(), "00111000111110");
        // w = 5 leaves no room between the two twisted ends
        assert!(inner.to_state(10).is_err());
        assert!(StartConfig::OuterTwist.to_state(6).is_err());
        assert!(StartConfig::InnerTwist { k: usize::MAX }.to_state(14).is_err());
        assert_eq!(StartConfig::from_ladder_token("i", 2), StartConfig::Inner);
    }
}
