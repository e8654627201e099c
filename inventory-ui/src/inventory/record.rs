use serde::{Deserialize, Serialize};
use std::fmt;

/// Physical condition of an inventory line.
///
/// The REST API and the form disagree on one spelling: the wire value is
/// `"open box"` while the form option is `"open-box"`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Condition {
    #[serde(rename = "new")]
    New,
    #[serde(rename = "used")]
    Used,
    #[serde(rename = "open box")]
    OpenBox,
}

impl Condition {
    pub const ALL: [Condition; 3] = [Condition::New, Condition::Used, Condition::OpenBox];

    pub fn as_wire(&self) -> &'static str {
        match self {
            Condition::New => "new",
            Condition::Used => "used",
            Condition::OpenBox => "open box",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "new" => Some(Condition::New),
            "used" => Some(Condition::Used),
            "open box" => Some(Condition::OpenBox),
            _ => None,
        }
    }

    pub fn as_ui(&self) -> &'static str {
        match self {
            Condition::New => "new",
            Condition::Used => "used",
            Condition::OpenBox => "open-box",
        }
    }

    pub fn from_ui(value: &str) -> Option<Self> {
        match value {
            "new" => Some(Condition::New),
            "used" => Some(Condition::Used),
            "open-box" => Some(Condition::OpenBox),
            _ => None,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

pub const AVAILABLE_TRUE: i64 = 1;
pub const AVAILABLE_FALSE: i64 = 0;

/// Full inventory record as sent to and echoed by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InventoryRecord {
    pub product_id: i64,
    pub condition: Condition,
    pub quantity: i64,
    pub restock_level: i64,
    pub available: i64,
}

impl InventoryRecord {
    pub fn is_available(&self) -> bool {
        self.available == AVAILABLE_TRUE
    }
}

/// Body of an update; the key fields travel in the path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InventoryUpdate {
    pub quantity: i64,
    pub restock_level: i64,
    pub available: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RestockRequest {
    pub amount: i64,
}

/// Error payload returned by the API on non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}
