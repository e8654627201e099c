use super::record::{Condition, InventoryRecord, AVAILABLE_FALSE, AVAILABLE_TRUE};

pub const AVAILABLE_UI_TRUE: &str = "true";
pub const AVAILABLE_UI_FALSE: &str = "false";

/// The five input fields of the inventory form, holding exactly what the
/// user typed or picked (UI spellings, not wire values).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub product_id: String,
    pub condition: String,
    pub quantity: String,
    pub restock_level: String,
    pub available: String,
}

/// Form values mapped to wire representations. Numeric fields stay raw text
/// because validation runs on the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    pub product_id: String,
    pub condition: Option<Condition>,
    pub quantity: String,
    pub restock_level: String,
    pub available: Option<i64>,
}

impl FormSnapshot {
    pub fn condition_wire(&self) -> &'static str {
        self.condition.map(|c| c.as_wire()).unwrap_or("")
    }

    pub fn available_wire(&self) -> String {
        self.available.map(|a| a.to_string()).unwrap_or_default()
    }
}

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read(&self) -> FormSnapshot {
        let available = match self.available.as_str() {
            AVAILABLE_UI_TRUE => Some(AVAILABLE_TRUE),
            AVAILABLE_UI_FALSE => Some(AVAILABLE_FALSE),
            _ => None,
        };

        FormSnapshot {
            product_id: self.product_id.clone(),
            condition: Condition::from_ui(&self.condition),
            quantity: self.quantity.clone(),
            restock_level: self.restock_level.clone(),
            available,
        }
    }

    /// Overwrites every field with a record echoed by the server.
    pub fn write(&mut self, record: &InventoryRecord) {
        self.product_id = record.product_id.to_string();
        self.quantity = record.quantity.to_string();
        self.restock_level = record.restock_level.to_string();
        self.available = if record.is_available() {
            AVAILABLE_UI_TRUE.to_string()
        } else {
            AVAILABLE_UI_FALSE.to_string()
        };
        self.condition = record.condition.as_ui().to_string();
    }

    pub fn clear(&mut self) {
        self.product_id.clear();
        self.condition.clear();
        self.quantity.clear();
        self.restock_level.clear();
        self.available.clear();
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(condition: &str, available: &str) -> FormFields {
        FormFields {
            product_id: "7".to_string(),
            condition: condition.to_string(),
            quantity: "3".to_string(),
            restock_level: "1".to_string(),
            available: available.to_string(),
        }
    }

    #[test]
    fn read_maps_ui_values_to_wire() {
        let snapshot = filled("open-box", "true").read();
        assert_eq!(snapshot.condition, Some(Condition::OpenBox));
        assert_eq!(snapshot.condition_wire(), "open box");
        assert_eq!(snapshot.available, Some(1));
        assert_eq!(snapshot.available_wire(), "1");

        let snapshot = filled("used", "false").read();
        assert_eq!(snapshot.condition, Some(Condition::Used));
        assert_eq!(snapshot.available, Some(0));
    }

    #[test]
    fn read_leaves_unmapped_values_absent() {
        let snapshot = filled("open box", "yes").read();
        assert_eq!(snapshot.condition, None);
        assert_eq!(snapshot.condition_wire(), "");
        assert_eq!(snapshot.available, None);
        assert_eq!(snapshot.available_wire(), "");
    }

    #[test]
    fn write_restores_ui_spellings() {
        let mut form = FormFields::new();
        form.write(&InventoryRecord {
            product_id: 12,
            condition: Condition::OpenBox,
            quantity: 40,
            restock_level: 5,
            available: 0,
        });

        assert_eq!(form, filled_with(12, "open-box", 40, 5, "false"));
    }

    #[test]
    fn write_treats_anything_but_one_as_unavailable() {
        let mut form = FormFields::new();
        form.write(&InventoryRecord {
            product_id: 1,
            condition: Condition::New,
            quantity: 1,
            restock_level: 1,
            available: 5,
        });
        assert_eq!(form.available, "false");
    }

    #[test]
    fn round_trip_reproduces_user_input() {
        for (condition, available) in [("new", "true"), ("used", "false"), ("open-box", "true")] {
            let original = filled(condition, available);
            let snapshot = original.read();
            let echoed = InventoryRecord {
                product_id: snapshot.product_id.parse().unwrap(),
                condition: snapshot.condition.unwrap(),
                quantity: snapshot.quantity.parse().unwrap(),
                restock_level: snapshot.restock_level.parse().unwrap(),
                available: snapshot.available.unwrap(),
            };

            let mut form = FormFields::new();
            form.write(&echoed);
            assert_eq!(form, original);
        }
    }

    #[test]
    fn clear_empties_every_field() {
        let mut form = filled("new", "true");
        form.clear();
        assert!(form.is_empty());
    }

    fn filled_with(pid: i64, condition: &str, qty: i64, lvl: i64, available: &str) -> FormFields {
        FormFields {
            product_id: pid.to_string(),
            condition: condition.to_string(),
            quantity: qty.to_string(),
            restock_level: lvl.to_string(),
            available: available.to_string(),
        }
    }
}
