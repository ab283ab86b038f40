//! Simple Store CLI - Product file management tools.
//!
//! # Usage
//!
//! ```bash
//! # Create an empty product file
//! store-cli init
//!
//! # Add a product
//! store-cli add --id P1 -n Widget -d "A small widget" -p 9.99 -q 3
//!
//! # Edit a product (every field is replaced)
//! store-cli edit P1 -n Widget -d "Now blue" -p 8.99 -q 10
//!
//! # Delete a product
//! store-cli delete P1
//!
//! # Preview a cart holding P1 twice
//! store-cli cart P1 P1
//! ```
//!
//! # Environment Variables
//!
//! - `STORE_PRODUCTS_FILE` - Product CSV file (default: products.csv), overridden by `--file`

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use simple_store_catalog::{Catalog, RecordStore};

mod commands;

#[derive(Parser)]
#[command(name = "store-cli")]
#[command(author, version, about = "Simple Store CLI tools")]
struct Cli {
    /// Product CSV file
    #[arg(
        short,
        long,
        global = true,
        env = "STORE_PRODUCTS_FILE",
        default_value = "products.csv"
    )]
    file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the product file with a header row if it is missing
    Init,
    /// List every product
    List,
    /// Show one product
    Show {
        /// Product ID
        id: String,
    },
    /// Add a new product
    Add {
        /// Product ID (must be unique)
        #[arg(long)]
        id: String,

        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Replace the fields of an existing product
    Edit {
        /// Product ID
        id: String,

        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Delete a product
    Delete {
        /// Product ID
        id: String,
    },
    /// Resolve a list of product ids as a cart and show the total
    Cart {
        /// Product IDs, one per "add to cart" click
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

/// Product fields shared by `add` and `edit`.
#[derive(Args)]
struct FieldArgs {
    /// Product name
    #[arg(short, long)]
    name: String,

    /// Description
    #[arg(short, long, default_value = "")]
    description: String,

    /// Price (non-negative decimal)
    #[arg(short, long)]
    price: String,

    /// Quantity in stock
    #[arg(short, long)]
    quantity: String,

    /// Image URL
    #[arg(long)]
    image_url: Option<String>,
}

fn main() {
    // Load .env before parsing so STORE_PRODUCTS_FILE can come from it
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::new(RecordStore::new(cli.file));

    match cli.command {
        Commands::Init => commands::products::init(&catalog)?,
        Commands::List => commands::products::list(&catalog)?,
        Commands::Show { id } => commands::products::show(&catalog, &id)?,
        Commands::Add { id, fields } => {
            commands::products::add(&catalog, &id, fields.into_input())?;
        }
        Commands::Edit { id, fields } => {
            commands::products::edit(&catalog, &id, fields.into_input())?;
        }
        Commands::Delete { id } => commands::products::delete(&catalog, &id)?,
        Commands::Cart { ids } => commands::cart::preview(&catalog, &ids)?,
    }
    Ok(())
}

impl FieldArgs {
    fn into_input(self) -> commands::products::FieldInput {
        commands::products::FieldInput {
            name: self.name,
            description: self.description,
            price: self.price,
            quantity: self.quantity,
            image_url: self.image_url,
        }
    }
}
