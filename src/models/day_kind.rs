use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Classification of a day inside the cycle.
///
/// Only the `lunch_deduction` hours policy gives the classification a
/// meaning; under the plain policy every day is computed from its raw span.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum DayKind {
    #[default]
    Ordinary,
    HalfDay,
    DayOff,
}

impl DayKind {
    pub fn label(&self) -> &'static str {
        match self {
            DayKind::Ordinary => "Ordinary",
            DayKind::HalfDay => "Half day",
            DayKind::DayOff => "Day off",
        }
    }

    /// Stable textual form, identical to the serialized one.
    pub fn as_str(&self) -> &'static str {
        match self {
            DayKind::Ordinary => "ordinary",
            DayKind::HalfDay => "half_day",
            DayKind::DayOff => "day_off",
        }
    }

    pub fn is_ordinary(&self) -> bool {
        matches!(self, DayKind::Ordinary)
    }
}
