use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};

/// The five extreme-condition categories an analysis reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Condition {
    VeryHot,
    VeryCold,
    VeryWindy,
    VeryWet,
    VeryUncomfortable,
}

impl Condition {
    pub const ALL: [Condition; 5] = [
        Condition::VeryHot,
        Condition::VeryCold,
        Condition::VeryWindy,
        Condition::VeryWet,
        Condition::VeryUncomfortable,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Condition::VeryHot => "veryHot",
            Condition::VeryCold => "veryCold",
            Condition::VeryWindy => "veryWindy",
            Condition::VeryWet => "veryWet",
            Condition::VeryUncomfortable => "veryUncomfortable",
        }
    }
}

impl Display for Condition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of classifying one sampled day: one flag per condition.
///
/// A flag is only ever raised from a present measurement; absent fields leave
/// their conditions `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConditionFlags {
    pub very_hot: bool,
    pub very_cold: bool,
    pub very_windy: bool,
    pub very_wet: bool,
    pub very_uncomfortable: bool,
}

impl ConditionFlags {
    pub fn get(self, condition: Condition) -> bool {
        match condition {
            Condition::VeryHot => self.very_hot,
            Condition::VeryCold => self.very_cold,
            Condition::VeryWindy => self.very_windy,
            Condition::VeryWet => self.very_wet,
            Condition::VeryUncomfortable => self.very_uncomfortable,
        }
    }

    /// Whether any condition fired.
    pub fn any(self) -> bool {
        Condition::ALL.iter().any(|&condition| self.get(condition))
    }
}

/// How many sampled years met each condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtremeCounts {
    pub very_hot: u32,
    pub very_cold: u32,
    pub very_windy: u32,
    pub very_wet: u32,
    pub very_uncomfortable: u32,
}

impl ExtremeCounts {
    pub fn get(self, condition: Condition) -> u32 {
        match condition {
            Condition::VeryHot => self.very_hot,
            Condition::VeryCold => self.very_cold,
            Condition::VeryWindy => self.very_windy,
            Condition::VeryWet => self.very_wet,
            Condition::VeryUncomfortable => self.very_uncomfortable,
        }
    }

    /// Folds one classified sample into the tallies.
    pub(crate) fn record(&mut self, flags: ConditionFlags) {
        if flags.very_hot {
            self.very_hot += 1;
        }
        if flags.very_cold {
            self.very_cold += 1;
        }
        if flags.very_windy {
            self.very_windy += 1;
        }
        if flags.very_wet {
            self.very_wet += 1;
        }
        if flags.very_uncomfortable {
            self.very_uncomfortable += 1;
        }
    }
}

/// Empirical probability of each condition, sharing one denominator: the
/// number of years with at least one usable measurement.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtremeProbabilities {
    pub very_hot: f64,
    pub very_cold: f64,
    pub very_windy: f64,
    pub very_wet: f64,
    pub very_uncomfortable: f64,
}

impl ExtremeProbabilities {
    pub fn get(self, condition: Condition) -> f64 {
        match condition {
            Condition::VeryHot => self.very_hot,
            Condition::VeryCold => self.very_cold,
            Condition::VeryWindy => self.very_windy,
            Condition::VeryWet => self.very_wet,
            Condition::VeryUncomfortable => self.very_uncomfortable,
        }
    }

    /// Divides every count by `years_sampled`; all probabilities are zero when
    /// no year was sampled.
    pub(crate) fn from_counts(counts: ExtremeCounts, years_sampled: u32) -> ExtremeProbabilities {
        if years_sampled == 0 {
            return ExtremeProbabilities::default();
        }
        let denominator = f64::from(years_sampled);
        ExtremeProbabilities {
            very_hot: f64::from(counts.very_hot) / denominator,
            very_cold: f64::from(counts.very_cold) / denominator,
            very_windy: f64::from(counts.very_windy) / denominator,
            very_wet: f64::from(counts.very_wet) / denominator,
            very_uncomfortable: f64::from(counts.very_uncomfortable) / denominator,
        }
    }
}
