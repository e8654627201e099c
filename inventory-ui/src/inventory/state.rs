use super::form::FormFields;
use super::results::ResultsTable;

pub const SUCCESS_MESSAGE: &str = "Success";
pub const DELETED_MESSAGE: &str = "Inventory has been Deleted!";
pub const SERVER_ERROR_MESSAGE: &str = "Server error!";

/// Everything the form shows. Mutated only from the UI thread.
#[derive(Debug, Clone, Default)]
pub struct InventoryState {
    pub form: FormFields,

    // Flash message area
    pub message: String,

    // Last successful search, if any
    pub results: Option<ResultsTable>,
}

impl InventoryState {
    /// Replaces the message area contents.
    pub fn show_message(&mut self, text: &str) {
        self.message.clear();
        self.message.push_str(text);
    }

    pub fn has_message(&self) -> bool {
        !self.message.is_empty()
    }

    pub fn show_results(&mut self, table: ResultsTable) {
        self.results = Some(table);
    }
}
