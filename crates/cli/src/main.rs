//! Localcart CLI - drives the session/cart widget from a terminal.
//!
//! State persists in a JSON file between runs (`LOCALCART_DATA_FILE`,
//! default `localcart.json`), standing in for browser-local storage.
//!
//! # Usage
//!
//! ```bash
//! # Log in and show the session state
//! localcart login --first-name Ana
//! localcart status
//!
//! # Work the cart
//! localcart cart add --id sku-1 --name "Mug" --price 10.00 --quantity 2
//! localcart cart increment --id sku-1
//! localcart cart set-quantity --id sku-1 --quantity 4
//! localcart cart checkout
//!
//! # Log out (clears the session entries)
//! localcart logout
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;
mod console;

#[derive(Parser)]
#[command(name = "localcart")]
#[command(author, version, about = "Localcart widget CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show session and cart state
    Status,
    /// Write the session flag and user profile
    Login {
        /// First name (preferred display name)
        #[arg(long)]
        first_name: Option<String>,

        /// Last name
        #[arg(long)]
        last_name: Option<String>,

        /// Full name (display-name fallback)
        #[arg(long)]
        name: Option<String>,

        /// Email address
        #[arg(long)]
        email: Option<String>,
    },
    /// Clear the session entries
    Logout,
    /// Cart operations
    Cart {
        #[command(subcommand)]
        action: CartCommand,
    },
}

#[derive(Subcommand)]
enum CartCommand {
    /// Render the current cart
    Show,
    /// Add an item (existing id bumps quantity)
    Add {
        /// Item identifier
        #[arg(long)]
        id: String,

        /// Display name
        #[arg(long)]
        name: String,

        /// Unit price (e.g., 19.99)
        #[arg(long)]
        price: String,

        /// Quantity to add
        #[arg(long, default_value = "1")]
        quantity: u32,

        /// Image reference
        #[arg(long, default_value = "")]
        image: String,
    },
    /// Remove an item
    Remove {
        /// Item identifier
        #[arg(long)]
        id: String,
    },
    /// Increase an item's quantity by one
    Increment {
        /// Item identifier
        #[arg(long)]
        id: String,
    },
    /// Decrease an item's quantity by one (floors at one)
    Decrement {
        /// Item identifier
        #[arg(long)]
        id: String,
    },
    /// Set an item's quantity (zero or negative removes it)
    SetQuantity {
        /// Item identifier
        #[arg(long)]
        id: String,

        /// New quantity, as typed
        #[arg(long)]
        quantity: String,
    },
    /// Persist the cart and total, then hand off to the checkout page
    Checkout,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Status => commands::session::status()?,
        Commands::Login {
            first_name,
            last_name,
            name,
            email,
        } => commands::session::login(first_name, last_name, name, email)?,
        Commands::Logout => commands::session::logout()?,
        Commands::Cart { action } => match action {
            CartCommand::Show => commands::cart::show()?,
            CartCommand::Add {
                id,
                name,
                price,
                quantity,
                image,
            } => commands::cart::add(&id, name, &price, quantity, image)?,
            CartCommand::Remove { id } => commands::cart::remove(&id)?,
            CartCommand::Increment { id } => commands::cart::increment(&id)?,
            CartCommand::Decrement { id } => commands::cart::decrement(&id)?,
            CartCommand::SetQuantity { id, quantity } => {
                commands::cart::set_quantity(&id, &quantity)?;
            }
            CartCommand::Checkout => commands::cart::checkout()?,
        },
    }
    Ok(())
}
