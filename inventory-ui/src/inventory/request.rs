//! Turns a form snapshot into the HTTP request an action issues.
//!
//! Everything here is pure: no I/O happens until the request reaches
//! `InventoryClient::send`.

use reqwest::Method;
use serde_json::Value;

use super::actions::InventoryAction;
use super::form::FormSnapshot;
use super::record::{Condition, InventoryRecord, InventoryUpdate, RestockRequest};
use super::validation::{
    is_integer, is_non_negative_integer, is_valid_condition, validate_all, ValidationFailure,
};

pub const DEFAULT_COLLECTION: &str = "/api/inventory";

/// What a successful response body is decoded into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    Record,
    Records,
    Empty,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InventoryRequest {
    pub method: Method,
    /// Unencoded path segments; `open box` stays a single segment.
    pub segments: Vec<String>,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    pub expects: ResponseShape,
}

impl InventoryRequest {
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }

    /// Method, path and query for logs and assertions, e.g.
    /// `GET /api/inventory?product_id=7`.
    pub fn target(&self) -> String {
        let mut target = format!("{} {}", self.method, self.path());
        if !self.query.is_empty() {
            let query: Vec<String> = self.query.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
            target.push('?');
            target.push_str(&query.join("&"));
        }
        target
    }
}

/// Builds requests under one collection prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    collection: Vec<String>,
}

impl Default for Endpoint {
    fn default() -> Self {
        Self::new(DEFAULT_COLLECTION)
    }
}

impl Endpoint {
    pub fn new(prefix: &str) -> Self {
        Self {
            collection: prefix
                .split('/')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn prefix(&self) -> String {
        format!("/{}", self.collection.join("/"))
    }

    fn request(&self, method: Method, extra: &[&str], body: Option<Value>, expects: ResponseShape) -> InventoryRequest {
        let mut segments = self.collection.clone();
        segments.extend(extra.iter().map(|s| s.to_string()));
        InventoryRequest {
            method,
            segments,
            query: Vec::new(),
            body,
            expects,
        }
    }

    pub fn create(&self, record: &InventoryRecord) -> InventoryRequest {
        self.request(Method::POST, &[], to_body(record), ResponseShape::Record)
    }

    /// `product_id` is passed through untouched; retrieve only requires it
    /// to be non-empty.
    pub fn retrieve(&self, product_id: &str, condition: Condition) -> InventoryRequest {
        self.request(
            Method::GET,
            &[product_id, "condition", condition.as_wire()],
            None,
            ResponseShape::Record,
        )
    }

    pub fn search(&self, product_id: Option<&str>) -> InventoryRequest {
        let mut request = self.request(Method::GET, &[], None, ResponseShape::Records);
        if let Some(pid) = product_id.filter(|p| !p.is_empty()) {
            request.query.push(("product_id".to_string(), pid.to_string()));
        }
        request
    }

    pub fn update(&self, product_id: i64, condition: Condition, update: &InventoryUpdate) -> InventoryRequest {
        let pid = product_id.to_string();
        self.request(
            Method::PUT,
            &[&pid, "condition", condition.as_wire()],
            to_body(update),
            ResponseShape::Record,
        )
    }

    pub fn restock(&self, product_id: i64, condition: Condition, amount: i64) -> InventoryRequest {
        let pid = product_id.to_string();
        self.request(
            Method::PUT,
            &[&pid, "condition", condition.as_wire(), "restock"],
            to_body(&RestockRequest { amount }),
            ResponseShape::Record,
        )
    }

    pub fn activate(&self, product_id: i64, condition: Condition) -> InventoryRequest {
        let pid = product_id.to_string();
        self.request(
            Method::PUT,
            &[&pid, "condition", condition.as_wire(), "activate"],
            None,
            ResponseShape::Record,
        )
    }

    pub fn deactivate(&self, product_id: i64, condition: Condition) -> InventoryRequest {
        let pid = product_id.to_string();
        self.request(
            Method::PUT,
            &[&pid, "condition", condition.as_wire(), "deactivate"],
            None,
            ResponseShape::Record,
        )
    }

    pub fn delete(&self, product_id: i64, condition: Condition) -> InventoryRequest {
        let pid = product_id.to_string();
        self.request(
            Method::DELETE,
            &[&pid, "condition", condition.as_wire()],
            None,
            ResponseShape::Empty,
        )
    }

    /// Validates the snapshot for `action` and builds its request.
    ///
    /// Returns `Ok(None)` for actions that never touch the network.
    pub fn prepare(
        &self,
        action: InventoryAction,
        form: &FormSnapshot,
    ) -> Result<Option<InventoryRequest>, ValidationFailure> {
        let request = match action {
            InventoryAction::Create => {
                let record = full_record(form).ok_or_else(ValidationFailure::all_fields)?;
                self.create(&record)
            }
            InventoryAction::Update => {
                let record = full_record(form).ok_or_else(ValidationFailure::all_fields)?;
                let update = InventoryUpdate {
                    quantity: record.quantity,
                    restock_level: record.restock_level,
                    available: record.available,
                };
                self.update(record.product_id, record.condition, &update)
            }
            InventoryAction::Retrieve => match form.condition {
                Some(condition) if !form.product_id.is_empty() => {
                    self.retrieve(&form.product_id, condition)
                }
                _ => return Err(ValidationFailure::key_fields()),
            },
            InventoryAction::Search => self.search(Some(&form.product_id)),
            InventoryAction::Restock => {
                let (pid, condition) = key_fields(form).ok_or_else(ValidationFailure::restock_fields)?;
                if !is_non_negative_integer(&form.quantity) {
                    return Err(ValidationFailure::restock_fields());
                }
                let amount = form
                    .quantity
                    .parse::<i64>()
                    .map_err(|_| ValidationFailure::restock_fields())?;
                self.restock(pid, condition, amount)
            }
            InventoryAction::Activate => {
                let (pid, condition) = key_fields(form).ok_or_else(ValidationFailure::key_fields)?;
                self.activate(pid, condition)
            }
            InventoryAction::Deactivate => {
                let (pid, condition) = key_fields(form).ok_or_else(ValidationFailure::key_fields)?;
                self.deactivate(pid, condition)
            }
            InventoryAction::Delete => {
                let (pid, condition) = key_fields(form).ok_or_else(ValidationFailure::key_fields)?;
                self.delete(pid, condition)
            }
            InventoryAction::Clear => return Ok(None),
        };

        Ok(Some(request))
    }
}

fn to_body<T: serde::Serialize>(value: &T) -> Option<Value> {
    serde_json::to_value(value).ok()
}

fn key_fields(form: &FormSnapshot) -> Option<(i64, Condition)> {
    if !is_integer(&form.product_id) || !is_valid_condition(form.condition_wire()) {
        return None;
    }
    let pid = form.product_id.parse::<i64>().ok()?;
    Some((pid, form.condition?))
}

fn full_record(form: &FormSnapshot) -> Option<InventoryRecord> {
    if !validate_all(
        &form.product_id,
        &form.quantity,
        &form.restock_level,
        form.condition_wire(),
        &form.available_wire(),
    ) {
        return None;
    }

    Some(InventoryRecord {
        product_id: form.product_id.parse().ok()?,
        condition: form.condition?,
        quantity: form.quantity.parse().ok()?,
        restock_level: form.restock_level.parse().ok()?,
        available: form.available?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::form::FormFields;
    use crate::inventory::validation::{ALL_FIELDS_MESSAGE, KEY_FIELDS_MESSAGE, RESTOCK_FIELDS_MESSAGE};
    use serde_json::json;

    fn form(pid: &str, condition: &str, qty: &str, lvl: &str, available: &str) -> FormSnapshot {
        FormFields {
            product_id: pid.to_string(),
            condition: condition.to_string(),
            quantity: qty.to_string(),
            restock_level: lvl.to_string(),
            available: available.to_string(),
        }
        .read()
    }

    fn prepared(action: InventoryAction, snapshot: &FormSnapshot) -> InventoryRequest {
        Endpoint::default()
            .prepare(action, snapshot)
            .expect("validation passes")
            .expect("action issues a request")
    }

    #[test]
    fn create_posts_the_full_wire_record() {
        let request = prepared(InventoryAction::Create, &form("7", "open-box", "3", "1", "true"));

        assert_eq!(request.target(), "POST /api/inventory");
        assert_eq!(
            request.body,
            Some(json!({
                "product_id": 7,
                "condition": "open box",
                "quantity": 3,
                "restock_level": 1,
                "available": 1
            }))
        );
        assert_eq!(request.expects, ResponseShape::Record);
    }

    #[test]
    fn update_sends_only_mutable_fields() {
        let request = prepared(InventoryAction::Update, &form("7", "used", "10", "2", "false"));

        assert_eq!(request.target(), "PUT /api/inventory/7/condition/used");
        assert_eq!(
            request.body,
            Some(json!({"quantity": 10, "restock_level": 2, "available": 0}))
        );
    }

    #[test]
    fn create_and_update_reject_incomplete_forms() {
        for action in [InventoryAction::Create, InventoryAction::Update] {
            for snapshot in [
                form("", "new", "1", "1", "true"),
                form("7", "", "1", "1", "true"),
                form("7", "new", "-1", "1", "true"),
                form("7", "new", "1", "1.5", "true"),
                form("7", "new", "1", "1", ""),
            ] {
                let err = Endpoint::default().prepare(action, &snapshot).unwrap_err();
                assert_eq!(err.message, ALL_FIELDS_MESSAGE);
            }
        }
    }

    #[test]
    fn search_adds_product_filter_only_when_present() {
        let all = prepared(InventoryAction::Search, &form("", "", "", "", ""));
        assert_eq!(all.target(), "GET /api/inventory");
        assert!(all.query.is_empty());
        assert_eq!(all.expects, ResponseShape::Records);

        let filtered = prepared(InventoryAction::Search, &form("7", "", "", "", ""));
        assert_eq!(filtered.target(), "GET /api/inventory?product_id=7");
    }

    #[test]
    fn retrieve_only_needs_a_product_id_and_condition() {
        let request = prepared(InventoryAction::Retrieve, &form("7", "new", "", "", ""));
        assert_eq!(request.target(), "GET /api/inventory/7/condition/new");
        assert!(request.body.is_none());
    }

    #[test]
    fn key_actions_require_product_id_and_condition() {
        let missing = [form("", "used", "", "", ""), form("7", "", "", "", ""), form("x", "used", "", "", "")];
        for action in [
            InventoryAction::Retrieve,
            InventoryAction::Activate,
            InventoryAction::Deactivate,
            InventoryAction::Delete,
        ] {
            for snapshot in &missing[..2] {
                let err = Endpoint::default().prepare(action, snapshot).unwrap_err();
                assert_eq!(err.message, KEY_FIELDS_MESSAGE, "{:?}", action);
            }
        }
        for action in [InventoryAction::Activate, InventoryAction::Deactivate, InventoryAction::Delete] {
            let err = Endpoint::default().prepare(action, &missing[2]).unwrap_err();
            assert_eq!(err.message, KEY_FIELDS_MESSAGE);
        }
    }

    #[test]
    fn state_change_actions_target_sub_resources() {
        let snapshot = form("7", "open-box", "", "", "");

        let activate = prepared(InventoryAction::Activate, &snapshot);
        assert_eq!(activate.target(), "PUT /api/inventory/7/condition/open box/activate");
        assert_eq!(activate.segments.len(), 6);
        assert!(activate.body.is_none());

        let deactivate = prepared(InventoryAction::Deactivate, &snapshot);
        assert_eq!(deactivate.target(), "PUT /api/inventory/7/condition/open box/deactivate");

        let delete = prepared(InventoryAction::Delete, &snapshot);
        assert_eq!(delete.target(), "DELETE /api/inventory/7/condition/open box");
        assert_eq!(delete.expects, ResponseShape::Empty);
    }

    #[test]
    fn restock_sends_quantity_as_amount() {
        let request = prepared(InventoryAction::Restock, &form("7", "new", "20", "", ""));
        assert_eq!(request.target(), "PUT /api/inventory/7/condition/new/restock");
        assert_eq!(request.body, Some(json!({"amount": 20})));
    }

    #[test]
    fn restock_rejects_non_numeric_quantity() {
        for snapshot in [form("7", "new", "lots", "", ""), form("7", "", "5", "", ""), form("", "new", "5", "", "")] {
            let err = Endpoint::default().prepare(InventoryAction::Restock, &snapshot).unwrap_err();
            assert_eq!(err.message, RESTOCK_FIELDS_MESSAGE);
        }
    }

    #[test]
    fn out_of_range_values_are_rejected_when_building_bodies() {
        let wide = "99999999999999999999";

        let err = Endpoint::default()
            .prepare(InventoryAction::Create, &form("7", "new", wide, "1", "true"))
            .unwrap_err();
        assert_eq!(err.message, ALL_FIELDS_MESSAGE);

        let err = Endpoint::default()
            .prepare(InventoryAction::Restock, &form("7", "new", wide, "", ""))
            .unwrap_err();
        assert_eq!(err.message, RESTOCK_FIELDS_MESSAGE);
    }

    #[test]
    fn clear_needs_no_request() {
        let result = Endpoint::default().prepare(InventoryAction::Clear, &form("", "", "", "", ""));
        assert_eq!(result, Ok(None));
    }

    #[test]
    fn custom_prefix_is_normalised() {
        let endpoint = Endpoint::new("inventory/");
        assert_eq!(endpoint.prefix(), "/inventory");
        let request = endpoint.search(None);
        assert_eq!(request.path(), "/inventory");
    }
}
