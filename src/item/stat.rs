//! Item stat lines
//!
//! Exports describe stats loosely: a proc stat carries `level` and `chance%`,
//! a value stat carries `value` or a `min`/`max` roll. [`Stat`] resolves that
//! shape once at parse time into an explicit [`StatKind`]. Numbers stay as
//! written so a stat serializes back to the export unchanged.

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Rolled range shown after a stat, e.g. `[10 - 20]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatRange {
    pub min: Number,
    pub max: Number,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StatValue {
    /// Damage roll, `max` may be missing in the export
    Roll { min: Number, max: Option<Number> },
    Scalar(Number),
    Empty,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StatKind {
    /// Chance-based skill trigger
    Proc { chance: Option<Number>, level: Number },
    Value(StatValue),
}

/// Corrupted marker as it appears in exports: a number or a boolean
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CorruptedFlag {
    Bool(bool),
    Number(Number),
}

impl CorruptedFlag {
    pub fn is_set(&self) -> bool {
        match self {
            CorruptedFlag::Bool(b) => *b,
            CorruptedFlag::Number(n) => !super::is_zero(n),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawStat", into = "RawStat")]
pub struct Stat {
    pub name: String,
    pub skill: Option<String>,
    pub range: Option<StatRange>,
    pub corrupted: Option<CorruptedFlag>,
    pub kind: StatKind,
}

impl Stat {
    pub fn value(name: &str, value: Number) -> Self {
        Self {
            name: name.to_string(),
            skill: None,
            range: None,
            corrupted: None,
            kind: StatKind::Value(StatValue::Scalar(value)),
        }
    }

    pub fn is_proc(&self) -> bool {
        matches!(self.kind, StatKind::Proc { .. })
    }

    pub fn is_corrupted(&self) -> bool {
        self.corrupted.as_ref().is_some_and(CorruptedFlag::is_set)
    }
}

/// Wire shape of a stat
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RawStat {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    skill: Option<String>,
    #[serde(rename = "chance%", default, skip_serializing_if = "Option::is_none")]
    chance: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    level: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    range: Option<StatRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    min: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    corrupted: Option<CorruptedFlag>,
}

impl From<RawStat> for Stat {
    fn from(raw: RawStat) -> Self {
        // `level` wins when an export carries both shapes
        let kind = match (raw.level, raw.min, raw.value) {
            (Some(level), _, _) => StatKind::Proc {
                chance: raw.chance,
                level,
            },
            (None, Some(min), _) => StatKind::Value(StatValue::Roll { min, max: raw.max }),
            (None, None, Some(value)) => StatKind::Value(StatValue::Scalar(value)),
            (None, None, None) => StatKind::Value(StatValue::Empty),
        };

        Self {
            name: raw.name,
            skill: raw.skill,
            range: raw.range,
            corrupted: raw.corrupted,
            kind,
        }
    }
}

impl From<Stat> for RawStat {
    fn from(stat: Stat) -> Self {
        let mut raw = RawStat {
            name: stat.name,
            skill: stat.skill,
            range: stat.range,
            corrupted: stat.corrupted,
            ..RawStat::default()
        };

        match stat.kind {
            StatKind::Proc { chance, level } => {
                raw.chance = chance;
                raw.level = Some(level);
            }
            StatKind::Value(StatValue::Roll { min, max }) => {
                raw.min = Some(min);
                raw.max = max;
            }
            StatKind::Value(StatValue::Scalar(value)) => raw.value = Some(value),
            StatKind::Value(StatValue::Empty) => {}
        }

        raw
    }
}
