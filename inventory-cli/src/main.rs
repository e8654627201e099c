use clap::{Args, Parser, Subcommand};
use inventory_ui::config::ApiArgs;
use inventory_ui::inventory::prelude::*;

#[derive(Parser, Debug)]
#[command(about = "Drive the inventory form from the terminal")]
struct Cli {
    #[command(flatten)]
    api: ApiArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Form fields, spelled the way the form offers them.
#[derive(Args, Debug, Default)]
struct FieldArgs {
    #[arg(long, default_value = "")]
    product_id: String,

    /// new, used or open-box
    #[arg(long, default_value = "")]
    condition: String,

    #[arg(long, default_value = "")]
    quantity: String,

    #[arg(long, default_value = "")]
    restock_level: String,

    /// true or false
    #[arg(long, default_value = "")]
    available: String,
}

impl From<FieldArgs> for FormFields {
    fn from(args: FieldArgs) -> Self {
        FormFields {
            product_id: args.product_id,
            condition: args.condition,
            quantity: args.quantity,
            restock_level: args.restock_level,
            available: args.available,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create a new inventory record
    Create(FieldArgs),
    /// Fetch one record by product id and condition
    Retrieve(FieldArgs),
    /// List records, optionally filtered by --product-id
    Search(FieldArgs),
    /// Replace quantity, restock level and availability
    Update(FieldArgs),
    /// Add --quantity to the stored quantity
    Restock(FieldArgs),
    /// Mark a record available
    Activate(FieldArgs),
    /// Mark a record unavailable
    Deactivate(FieldArgs),
    /// Remove a record
    Delete(FieldArgs),
}

impl Commands {
    fn into_parts(self) -> (InventoryAction, FieldArgs) {
        match self {
            Commands::Create(f) => (InventoryAction::Create, f),
            Commands::Retrieve(f) => (InventoryAction::Retrieve, f),
            Commands::Search(f) => (InventoryAction::Search, f),
            Commands::Update(f) => (InventoryAction::Update, f),
            Commands::Restock(f) => (InventoryAction::Restock, f),
            Commands::Activate(f) => (InventoryAction::Activate, f),
            Commands::Deactivate(f) => (InventoryAction::Deactivate, f),
            Commands::Delete(f) => (InventoryAction::Delete, f),
        }
    }
}

fn print_state(state: &InventoryState) {
    println!("{}", state.message);

    let form = &state.form;
    if !form.is_empty() {
        println!();
        println!("Product ID:    {}", form.product_id);
        println!("Condition:     {}", form.condition);
        println!("Quantity:      {}", form.quantity);
        println!("Restock Level: {}", form.restock_level);
        println!("Available:     {}", form.available);
    }

    if let Some(table) = &state.results {
        println!();
        println!("{}", table.to_text());
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.api.into_config();
    let (action, fields) = cli.command.into_parts();

    let mut controller = InventoryController::from_config(&config)?;
    *controller.form_mut() = fields.into();

    let outcome = controller.run(action).await;
    print_state(controller.state());

    match outcome {
        ActionOutcome::Succeeded => Ok(()),
        ActionOutcome::Rejected => anyhow::bail!("{} rejected by validation", action.label()),
        ActionOutcome::Failed => anyhow::bail!("{} failed", action.label()),
        ActionOutcome::Pending => anyhow::bail!("{} did not complete", action.label()),
    }
}
