//! Ledger account names
//!
//! Names are 64-bit values over the alphabet `.12345abcdefghijklmnopqrstuvwxyz`.
//! The first twelve characters take five bits each starting from the most
//! significant end; an optional thirteenth character fills the remaining four
//! bits. Pool tables live under an account name, so lookups only succeed when
//! this encoding matches the ledger's.

use crate::common::errors::NameError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const CHARMAP: &[u8; 32] = b".12345abcdefghijklmnopqrstuvwxyz";
const MAX_LEN: usize = 13;

/// Encoded account name
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountName(u64);

impl AccountName {
    /// Encode a name string
    pub fn new(name: &str) -> Result<Self, NameError> {
        if name.len() > MAX_LEN {
            return Err(NameError::TooLong {
                name: name.to_string(),
            });
        }

        let mut value = 0u64;
        for (i, c) in name.chars().enumerate() {
            let symbol = char_to_value(c).ok_or_else(|| NameError::InvalidCharacter {
                name: name.to_string(),
                found: c,
            })?;

            if i < 12 {
                value |= (symbol & 0x1f) << (64 - 5 * (i + 1));
            } else {
                if symbol > 0x0f {
                    return Err(NameError::InvalidThirteenthCharacter {
                        name: name.to_string(),
                    });
                }
                value |= symbol;
            }
        }

        Ok(Self(value))
    }

    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

fn char_to_value(c: char) -> Option<u64> {
    match c {
        '.' => Some(0),
        '1'..='5' => Some(c as u64 - '1' as u64 + 1),
        'a'..='z' => Some(c as u64 - 'a' as u64 + 6),
        _ => None,
    }
}

impl fmt::Display for AccountName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = [b'.'; MAX_LEN];
        let mut tmp = self.0;
        for i in 0..MAX_LEN {
            let (mask, shift) = if i == 0 { (0x0f, 4) } else { (0x1f, 5) };
            out[MAX_LEN - 1 - i] = CHARMAP[(tmp & mask) as usize];
            tmp >>= shift;
        }

        let len = out.iter().rposition(|c| *c != b'.').map_or(0, |p| p + 1);
        for c in &out[..len] {
            write!(f, "{}", *c as char)?;
        }
        Ok(())
    }
}

impl FromStr for AccountName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for AccountName {
    type Error = NameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<AccountName> for String {
    fn from(name: AccountName) -> Self {
        name.to_string()
    }
}
