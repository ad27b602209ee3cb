//! Clock and reset classification results.
//!
//! Clocks and resets are recognized purely by name, against small fixed
//! alias sets. A recognized clock input marks the module sequential; a
//! reset's active level follows the `_n` naming convention (names ending
//! in `_n` are active-low). Matching is exact and case-sensitive, like
//! Verilog identifiers themselves.

use serde::{Deserialize, Serialize};

/// Input names recognized as clocks.
pub const CLOCK_ALIASES: [&str; 4] = ["clk", "clk_n", "clock", "clock_n"];

/// Input names recognized as resets.
pub const RESET_ALIASES: [&str; 4] = ["rst", "rst_n", "reset", "reset_n"];

/// The asserted (effective) level of a reset signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResetLevel {
    /// Asserted at logic 1.
    High,
    /// Asserted at logic 0.
    Low,
}

impl ResetLevel {
    /// The binary digit that asserts the reset.
    pub fn assert_bit(self) -> u8 {
        match self {
            ResetLevel::High => 1,
            ResetLevel::Low => 0,
        }
    }

    /// The binary digit that releases the reset.
    pub fn release_bit(self) -> u8 {
        match self {
            ResetLevel::High => 0,
            ResetLevel::Low => 1,
        }
    }
}

/// The recognized clock input of a sequential module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockInfo {
    /// The clock signal's name.
    pub name: String,
}

impl ClockInfo {
    /// Matches an input name against the clock alias set.
    pub fn match_name(name: &str) -> Option<ClockInfo> {
        if CLOCK_ALIASES.contains(&name) {
            Some(ClockInfo {
                name: name.to_string(),
            })
        } else {
            None
        }
    }
}

/// The recognized reset input of a module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetInfo {
    /// The reset signal's name.
    pub name: String,
    /// The asserted level, per the `_n` suffix rule.
    pub active: ResetLevel,
}

impl ResetInfo {
    /// Matches an input name against the reset alias set.
    ///
    /// Names ending in `_n` are active-low, all others active-high.
    pub fn match_name(name: &str) -> Option<ResetInfo> {
        if RESET_ALIASES.contains(&name) {
            let active = if name.ends_with("_n") {
                ResetLevel::Low
            } else {
                ResetLevel::High
            };
            Some(ResetInfo {
                name: name.to_string(),
                active,
            })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_aliases_match() {
        for alias in CLOCK_ALIASES {
            assert!(ClockInfo::match_name(alias).is_some(), "alias {alias}");
        }
    }

    #[test]
    fn clock_match_is_exact() {
        assert!(ClockInfo::match_name("clk2").is_none());
        assert!(ClockInfo::match_name("my_clk").is_none());
        assert!(ClockInfo::match_name("CLK").is_none());
        assert!(ClockInfo::match_name("").is_none());
    }

    #[test]
    fn reset_polarity_from_suffix() {
        assert_eq!(
            ResetInfo::match_name("rst").unwrap().active,
            ResetLevel::High
        );
        assert_eq!(
            ResetInfo::match_name("rst_n").unwrap().active,
            ResetLevel::Low
        );
        assert_eq!(
            ResetInfo::match_name("reset").unwrap().active,
            ResetLevel::High
        );
        assert_eq!(
            ResetInfo::match_name("reset_n").unwrap().active,
            ResetLevel::Low
        );
    }

    #[test]
    fn reset_match_is_exact() {
        assert!(ResetInfo::match_name("rstn").is_none());
        assert!(ResetInfo::match_name("soft_reset").is_none());
        assert!(ResetInfo::match_name("Reset").is_none());
    }

    #[test]
    fn assert_and_release_bits() {
        assert_eq!(ResetLevel::High.assert_bit(), 1);
        assert_eq!(ResetLevel::High.release_bit(), 0);
        assert_eq!(ResetLevel::Low.assert_bit(), 0);
        assert_eq!(ResetLevel::Low.release_bit(), 1);
    }

    #[test]
    fn clock_is_not_a_reset() {
        // The alias sets are disjoint; a clock name never classifies as reset.
        for alias in CLOCK_ALIASES {
            assert!(ResetInfo::match_name(alias).is_none());
        }
    }

    #[test]
    fn reset_info_serde_roundtrip() {
        let rst = ResetInfo::match_name("reset_n").unwrap();
        let json = serde_json::to_string(&rst).unwrap();
        let restored: ResetInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, rst);
    }
}
