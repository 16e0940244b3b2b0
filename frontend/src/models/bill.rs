use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::format::parse_whole;

/// Expense categories offered by the New Bill form. Serialized with the
/// labels the API stores.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpenseType {
    #[default]
    #[serde(rename = "Transports")]
    Transports,
    #[serde(rename = "Restaurants et bars")]
    Restaurants,
    #[serde(rename = "Hôtel et logement")]
    Hotel,
    #[serde(rename = "Services en ligne")]
    OnlineServices,
    #[serde(rename = "IT et électronique")]
    Electronics,
    #[serde(rename = "Equipement et matériel")]
    Equipment,
    #[serde(rename = "Fournitures de bureau")]
    OfficeSupplies,
}

impl ExpenseType {
    pub const ALL: [ExpenseType; 7] = [
        ExpenseType::Transports,
        ExpenseType::Restaurants,
        ExpenseType::Hotel,
        ExpenseType::OnlineServices,
        ExpenseType::Electronics,
        ExpenseType::Equipment,
        ExpenseType::OfficeSupplies,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ExpenseType::Transports => "Transports",
            ExpenseType::Restaurants => "Restaurants et bars",
            ExpenseType::Hotel => "Hôtel et logement",
            ExpenseType::OnlineServices => "Services en ligne",
            ExpenseType::Electronics => "IT et électronique",
            ExpenseType::Equipment => "Equipement et matériel",
            ExpenseType::OfficeSupplies => "Fournitures de bureau",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.label() == label)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    #[default]
    Pending,
    Accepted,
    Refused,
}

impl BillStatus {
    pub fn label(self) -> &'static str {
        match self {
            BillStatus::Pending => "En attente",
            BillStatus::Accepted => "Accepté",
            BillStatus::Refused => "Refused",
        }
    }
}

/// A single expense-report record, as exchanged with the API.
///
/// Reading is forgiving: numbers may arrive as text and text as numbers,
/// and `null` counts as an empty value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub email: String,
    #[serde(rename = "type")]
    pub expense_type: ExpenseType,
    #[serde(default, deserialize_with = "loose_text")]
    pub name: String,
    #[serde(default, deserialize_with = "loose_text")]
    pub date: String,
    #[serde(default, deserialize_with = "loose_whole")]
    pub amount: i64,
    #[serde(default, deserialize_with = "loose_text")]
    pub vat: String,
    #[serde(default, deserialize_with = "loose_whole")]
    pub pct: i64,
    #[serde(default, deserialize_with = "loose_text")]
    pub commentary: String,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub status: BillStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_admin: Option<String>,
}

fn loose_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(text)) => Ok(text),
        Some(Value::Number(number)) => Ok(number.to_string()),
        Some(other) => Err(de::Error::custom(format!("expected text, got {other}"))),
    }
}

/// Whole units: `80.5` and `"80.5"` read as `80`, `null` and `""` as `0`.
fn loose_whole<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => return Ok(0),
        Some(Value::Number(number)) => match number.as_i64() {
            Some(whole) => return Ok(whole),
            None => number.to_string(),
        },
        Some(Value::String(text)) if text.trim().is_empty() => return Ok(0),
        Some(Value::String(text)) => text,
        Some(other) => return Err(de::Error::custom(format!("expected a number, got {other}"))),
    };
    parse_whole(&text).ok_or_else(|| de::Error::custom(format!("expected a number, got {text:?}")))
}

/// Decodes each record on its own. Records that cannot be read are logged
/// and left out, so one bad entry does not hide the others.
pub fn decode_bills(records: Vec<Value>) -> Vec<Bill> {
    records
        .into_iter()
        .enumerate()
        .filter_map(|(idx, record)| match serde_json::from_value::<Bill>(record) {
            Ok(bill) => Some(bill),
            Err(err) => {
                log::warn!("skipping unreadable bill #{idx}: {err}");
                None
            }
        })
        .collect()
}

/// Location of an uploaded receipt. `key` identifies the bill the receipt
/// was attached to and is reused as the bill id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredReceipt {
    pub file_url: String,
    pub key: String,
}
