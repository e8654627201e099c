pub mod actions;
pub mod client;
pub mod controller;
pub mod form;
pub mod record;
pub mod request;
pub mod results;
pub mod state;
pub mod validation;


pub use actions::InventoryAction;
pub use client::{ApiResponse, InventoryClient};
pub use controller::{ActionOutcome, Completion, InventoryController};
pub use form::{FormFields, FormSnapshot};
pub use record::{Condition, InventoryRecord, InventoryUpdate};
pub use request::{Endpoint, InventoryRequest};
pub use results::ResultsTable;
pub use state::InventoryState;

// Re-export for convenience
pub mod prelude {
    pub use super::actions::InventoryAction;
    pub use super::controller::{ActionOutcome, InventoryController};
    pub use super::form::FormFields;
    pub use super::record::{Condition, InventoryRecord};
    pub use super::results::ResultsTable;
    pub use super::state::InventoryState;
}
