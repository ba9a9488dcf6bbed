use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Currency amount in hundredths of a coin.
///
/// Integer fixed-point keeps payouts exact across many rounds, where repeated
/// float multiplication would drift.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Coins(u64);

impl Coins {
    pub const ZERO: Coins = Coins(0);

    pub const fn from_whole(coins: u64) -> Self {
        Self(coins * 100)
    }

    pub const fn from_hundredths(hundredths: u64) -> Self {
        Self(hundredths)
    }

    pub const fn hundredths(self) -> u64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub const fn saturating_add(self, rhs: Coins) -> Coins {
        Coins(self.0.saturating_add(rhs.0))
    }

    pub const fn checked_sub(self, rhs: Coins) -> Option<Coins> {
        match self.0.checked_sub(rhs.0) {
            Some(value) => Some(Coins(value)),
            None => None,
        }
    }

    /// Scales the amount by a whole percentage, e.g. `percent = 150` for 1.5x.
    /// The division truncates toward zero.
    pub const fn scale_percent(self, percent: u16) -> Coins {
        Coins(self.0.saturating_mul(percent as u64) / 100)
    }
}

impl fmt::Display for Coins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
#[error("Invalid coin amount")]
pub struct ParseCoinsError;

impl FromStr for Coins {
    type Err = ParseCoinsError;

    /// Accepts `"12"`, `"12.3"`, and `"12.34"`. More than two fractional digits
    /// is rejected rather than silently truncated.
    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        let s = s.trim();
        let (whole, frac) = match s.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (s, ""),
        };

        if whole.is_empty() && frac.is_empty() {
            return Err(ParseCoinsError);
        }

        let whole: u64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| ParseCoinsError)?
        };

        let frac: u64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<u64>().map_err(|_| ParseCoinsError)? * 10,
            2 => frac.parse().map_err(|_| ParseCoinsError)?,
            _ => return Err(ParseCoinsError),
        };

        whole
            .checked_mul(100)
            .and_then(|hundredths| hundredths.checked_add(frac))
            .map(Coins)
            .ok_or(ParseCoinsError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_whole_and_fractional_amounts() {
        assert_eq!("12".parse(), Ok(Coins::from_whole(12)));
        assert_eq!("12.3".parse(), Ok(Coins::from_hundredths(1230)));
        assert_eq!("12.34".parse(), Ok(Coins::from_hundredths(1234)));
        assert_eq!(".5".parse(), Ok(Coins::from_hundredths(50)));
    }

    #[test]
    fn rejects_malformed_amounts() {
        assert_eq!(Coins::from_str(""), Err(ParseCoinsError));
        assert_eq!(Coins::from_str("."), Err(ParseCoinsError));
        assert_eq!(Coins::from_str("1.234"), Err(ParseCoinsError));
        assert_eq!(Coins::from_str("abc"), Err(ParseCoinsError));
        assert_eq!(Coins::from_str("-5"), Err(ParseCoinsError));
    }

    #[test]
    fn scale_percent_is_exact_for_payouts() {
        let bet = Coins::from_whole(20);
        assert_eq!(bet.scale_percent(150), Coins::from_whole(30));
        assert_eq!(Coins::from_hundredths(1).scale_percent(150), Coins::from_hundredths(1));
    }

    #[test]
    fn displays_two_fractional_digits() {
        assert_eq!(Coins::from_hundredths(10050).to_string(), "100.50");
        assert_eq!(Coins::from_hundredths(5).to_string(), "0.05");
    }
}
