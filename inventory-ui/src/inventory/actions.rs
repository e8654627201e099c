/// One button on the inventory form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InventoryAction {
    Create,
    Retrieve,
    Search,
    Update,
    Restock,
    Activate,
    Deactivate,
    Delete,
    Clear,
}

impl InventoryAction {
    /// Button order on the form.
    pub const ALL: [InventoryAction; 9] = [
        InventoryAction::Create,
        InventoryAction::Retrieve,
        InventoryAction::Search,
        InventoryAction::Update,
        InventoryAction::Restock,
        InventoryAction::Activate,
        InventoryAction::Deactivate,
        InventoryAction::Delete,
        InventoryAction::Clear,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            InventoryAction::Create => "Create",
            InventoryAction::Retrieve => "Retrieve",
            InventoryAction::Search => "Search",
            InventoryAction::Update => "Update",
            InventoryAction::Restock => "Restock",
            InventoryAction::Activate => "Activate",
            InventoryAction::Deactivate => "Deactivate",
            InventoryAction::Delete => "Delete",
            InventoryAction::Clear => "Clear",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            InventoryAction::Create => "Creating inventory record",
            InventoryAction::Retrieve => "Retrieving inventory record",
            InventoryAction::Search => "Searching inventory",
            InventoryAction::Update => "Updating inventory record",
            InventoryAction::Restock => "Restocking inventory record",
            InventoryAction::Activate => "Activating inventory record",
            InventoryAction::Deactivate => "Deactivating inventory record",
            InventoryAction::Delete => "Deleting inventory record",
            InventoryAction::Clear => "Clearing the form",
        }
    }

    pub fn is_async(&self) -> bool {
        match self {
            InventoryAction::Create
            | InventoryAction::Retrieve
            | InventoryAction::Search
            | InventoryAction::Update
            | InventoryAction::Restock
            | InventoryAction::Activate
            | InventoryAction::Deactivate
            | InventoryAction::Delete => true,

            InventoryAction::Clear => false,
        }
    }
}
