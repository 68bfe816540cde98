//! Path-Dependent Option Payoffs
//!
//! # Variant Matrix
//!
//! Each strategy names the statistic that feeds each leg and the payoff
//! applied to it. `S_T` is the terminal price of the path.
//!
//! | Variant           | call stat | put stat | call            | put             |
//! |-------------------|-----------|----------|-----------------|-----------------|
//! | Asian fixed       | mean      | mean     | max(avg - E, 0) | max(E - avg, 0) |
//! | Asian floating    | mean      | mean     | max(S_T - avg,0)| max(avg - S_T,0)|
//! | Lookback fixed    | max       | min      | max(max - E, 0) | max(E - min, 0) |
//! | Lookback floating | min       | max      | max(S_T - min,0)| max(max - S_T,0)|
//!
//! The lookback rows are asymmetric: the fixed call looks at the running
//! maximum while the floating call looks at the running minimum.

use crate::stats::Statistic;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrikeMode {
    Fixed,
    Floating,
}

/// The four priceable contracts, without any strike attached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionVariant {
    AsianFixedStrike,
    AsianFloatingStrike,
    LookbackFixedStrike,
    LookbackFloatingStrike,
}

impl OptionVariant {
    pub const ALL: [OptionVariant; 4] = [
        OptionVariant::AsianFixedStrike,
        OptionVariant::AsianFloatingStrike,
        OptionVariant::LookbackFixedStrike,
        OptionVariant::LookbackFloatingStrike,
    ];

    pub fn strike_mode(self) -> StrikeMode {
        match self {
            OptionVariant::AsianFixedStrike | OptionVariant::LookbackFixedStrike => {
                StrikeMode::Fixed
            }
            OptionVariant::AsianFloatingStrike | OptionVariant::LookbackFloatingStrike => {
                StrikeMode::Floating
            }
        }
    }

    /// Bind the variant to a strike. Floating variants ignore `strike`.
    pub fn strategy(self, strike: f64) -> PayoffStrategy {
        match self {
            OptionVariant::AsianFixedStrike => PayoffStrategy::AsianFixed { strike },
            OptionVariant::AsianFloatingStrike => PayoffStrategy::AsianFloating,
            OptionVariant::LookbackFixedStrike => PayoffStrategy::LookbackFixed { strike },
            OptionVariant::LookbackFloatingStrike => PayoffStrategy::LookbackFloating,
        }
    }
}

impl fmt::Display for OptionVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OptionVariant::AsianFixedStrike => "Asian Option Fixed Strike",
            OptionVariant::AsianFloatingStrike => "Asian Option floating Strike",
            OptionVariant::LookbackFixedStrike => "Lookback Option Fixed Strike",
            OptionVariant::LookbackFloatingStrike => "Lookback Option floating Strike",
        };
        f.write_str(name)
    }
}

/// Payoff of one variant, with the fixed strike captured where it applies
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PayoffStrategy {
    AsianFixed { strike: f64 },
    AsianFloating,
    LookbackFixed { strike: f64 },
    LookbackFloating,
}

impl PayoffStrategy {
    pub fn variant(&self) -> OptionVariant {
        match self {
            PayoffStrategy::AsianFixed { .. } => OptionVariant::AsianFixedStrike,
            PayoffStrategy::AsianFloating => OptionVariant::AsianFloatingStrike,
            PayoffStrategy::LookbackFixed { .. } => OptionVariant::LookbackFixedStrike,
            PayoffStrategy::LookbackFloating => OptionVariant::LookbackFloatingStrike,
        }
    }

    /// Statistics feeding the (call, put) legs
    pub fn statistics(&self) -> (Statistic, Statistic) {
        match self {
            PayoffStrategy::AsianFixed { .. } | PayoffStrategy::AsianFloating => {
                (Statistic::Mean, Statistic::Mean)
            }
            PayoffStrategy::LookbackFixed { .. } => (Statistic::Max, Statistic::Min),
            PayoffStrategy::LookbackFloating => (Statistic::Min, Statistic::Max),
        }
    }

    /// Whether the payoff reads the terminal price of the path
    pub fn needs_terminal(&self) -> bool {
        self.variant().strike_mode() == StrikeMode::Floating
    }

    /// Call payoff from its leg statistic. `terminal` is only read by
    /// floating-strike variants.
    pub fn call(&self, stat: f64, terminal: f64) -> f64 {
        match self {
            PayoffStrategy::AsianFixed { strike } | PayoffStrategy::LookbackFixed { strike } => {
                (stat - strike).max(0.0)
            }
            PayoffStrategy::AsianFloating | PayoffStrategy::LookbackFloating => {
                (terminal - stat).max(0.0)
            }
        }
    }

    /// Put payoff from its leg statistic. `terminal` is only read by
    /// floating-strike variants.
    pub fn put(&self, stat: f64, terminal: f64) -> f64 {
        match self {
            PayoffStrategy::AsianFixed { strike } | PayoffStrategy::LookbackFixed { strike } => {
                (strike - stat).max(0.0)
            }
            PayoffStrategy::AsianFloating | PayoffStrategy::LookbackFloating => {
                (stat - terminal).max(0.0)
            }
        }
    }
}
