//! Herfindahl-Hirschman style counterparty concentration.
//!
//! Bands follow the usual market-concentration cut-offs: an index of 2500 or
//! more is highly concentrated, 1500 or more is moderately concentrated.

use serde::Serialize;

pub const HIGH_HHI_THRESHOLD: f64 = 2500.0;
pub const MODERATE_HHI_THRESHOLD: f64 = 1500.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum RiskBand {
    Low,
    Moderate,
    High,
}

impl RiskBand {
    #[must_use]
    pub fn from_hhi(hhi: f64) -> Self {
        if hhi >= HIGH_HHI_THRESHOLD {
            Self::High
        } else if hhi >= MODERATE_HHI_THRESHOLD {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }

    /// Lowercase token for CSS modifiers.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Concentration {
    pub total: u64,
    /// Largest single share, in percent (0..=100).
    pub top_share: f64,
    /// Sum of squared shares scaled to 0..=10000.
    pub hhi: f64,
    pub risk_band: RiskBand,
}

impl Concentration {
    pub const EMPTY: Self = Self {
        total: 0,
        top_share: 0.0,
        hhi: 0.0,
        risk_band: RiskBand::Low,
    };
}

#[must_use]
pub fn partner_concentration(counts: &[u32]) -> Concentration {
    let total = counts.iter().map(|c| u64::from(*c)).sum::<u64>();
    if total == 0 {
        return Concentration::EMPTY;
    }

    #[allow(clippy::cast_precision_loss)]
    let total_f = total as f64;
    let top = counts.iter().copied().max().unwrap_or_default();
    let top_share = f64::from(top) / total_f * 100.0;
    let hhi = counts
        .iter()
        .map(|c| {
            let share = f64::from(*c) / total_f;
            share * share
        })
        .sum::<f64>()
        * 10_000.0;

    Concentration {
        total,
        top_share,
        hhi,
        risk_band: RiskBand::from_hhi(hhi),
    }
}

#[cfg(test)]
#[path = "concentration_test.rs"]
mod tests;
