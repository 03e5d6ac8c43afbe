use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{collections::BTreeMap, fmt};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HabitKind {
    Tick,
    Numeric,
}

impl fmt::Display for HabitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HabitKind::Tick => f.write_str("tick"),
            HabitKind::Numeric => f.write_str("numeric"),
        }
    }
}

/// A recorded day. An empty day is simply absent from the log.
///
/// On disk `Done` is the JSON literal `true` and `Value` is a plain number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LogValue {
    Done,
    Value(f64),
}

impl LogValue {
    pub fn number(self) -> Option<f64> {
        match self {
            LogValue::Value(value) => Some(value),
            LogValue::Done => None,
        }
    }

    pub fn kind(self) -> HabitKind {
        match self {
            LogValue::Done => HabitKind::Tick,
            LogValue::Value(_) => HabitKind::Numeric,
        }
    }
}

impl fmt::Display for LogValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogValue::Done => f.write_str("done"),
            LogValue::Value(value) => write!(f, "value {}", format_number(*value)),
        }
    }
}

impl Serialize for LogValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            LogValue::Done => serializer.serialize_bool(true),
            LogValue::Value(value) => serializer.serialize_f64(*value),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredValue {
    Flag(bool),
    Number(f64),
}

impl<'de> Deserialize<'de> for LogValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match StoredValue::deserialize(deserializer)? {
            StoredValue::Flag(true) => Ok(LogValue::Done),
            StoredValue::Flag(false) => Err(serde::de::Error::custom(
                "false is not a log value, omit the entry instead",
            )),
            StoredValue::Number(value) => Ok(LogValue::Value(value)),
        }
    }
}

// Older front-ends wrote `false` for an unticked day; absence already means that.
fn deserialize_logs<'de, D>(deserializer: D) -> Result<BTreeMap<String, LogValue>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, StoredValue>::deserialize(deserializer)?;
    let mut logs = BTreeMap::new();
    for (date, value) in raw {
        match value {
            StoredValue::Flag(true) => {
                logs.insert(date, LogValue::Done);
            }
            StoredValue::Flag(false) => warn!(%date, "dropping stored false log entry"),
            StoredValue::Number(value) => {
                logs.insert(date, LogValue::Value(value));
            }
        }
    }
    Ok(logs)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: HabitKind,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub target: Option<f64>,
    #[serde(default)]
    pub rank: String,
    pub created_at: i64,
    #[serde(default, deserialize_with = "deserialize_logs")]
    pub logs: BTreeMap<String, LogValue>,
}

impl Habit {
    pub fn log(&self, date_key: &str) -> Option<LogValue> {
        self.logs.get(date_key).copied()
    }

    pub fn target(&self) -> Option<f64> {
        self.target.filter(|target| target.is_finite())
    }
}

/// The persisted document. Habits are kept newest-first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppData {
    pub habits: Vec<Habit>,
}

#[derive(Debug, Clone)]
pub struct NewHabit {
    pub name: String,
    pub kind: HabitKind,
    pub unit: Option<String>,
    pub target: Option<f64>,
    pub rank: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NumberInput {
    Number(f64),
    Text(String),
}

impl NumberInput {
    /// Blank text means "no number"; anything else must parse as a finite float.
    pub fn parse(&self) -> Result<Option<f64>, String> {
        let value = match self {
            NumberInput::Number(value) => *value,
            NumberInput::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    return Ok(None);
                }
                text.parse::<f64>().map_err(|_| text.to_string())?
            }
        };
        if value.is_finite() {
            Ok(Some(value))
        } else {
            Err(value.to_string())
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateHabitRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: HabitKind,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub target: Option<NumberInput>,
    #[serde(default)]
    pub rank: Option<String>,
}

impl CreateHabitRequest {
    pub fn into_new_habit(self) -> NewHabit {
        // An unparseable target is dropped rather than rejected.
        let target = self.target.and_then(|raw| raw.parse().ok().flatten());
        NewHabit {
            name: self.name,
            kind: self.kind,
            unit: self.unit,
            target,
            rank: self.rank,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LogValueInput {
    Flag(bool),
    Number(f64),
    Text(String),
}

#[derive(Debug, Deserialize)]
pub struct SetLogRequest {
    #[serde(default)]
    pub value: Option<LogValueInput>,
}

#[derive(Debug, Deserialize)]
pub struct SelectRequest {
    #[serde(default)]
    pub id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ResetRequest {
    #[serde(default)]
    pub confirm: bool,
}

#[derive(Debug, Deserialize)]
pub struct DateQuery {
    pub date: Option<String>,
}

pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
