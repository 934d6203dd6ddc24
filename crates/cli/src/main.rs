//! ToyChest CLI - terminal storefront for the toy-store backend.
//!
//! # Usage
//!
//! ```bash
//! # Create an account, then log in
//! toychest register -n "Ada" -e ada@example.com -p s3cret
//! toychest login -e ada@example.com -p s3cret
//!
//! # Browse and search the catalog
//! toychest products
//! toychest search -q ball --max-price 20 --in-stock
//!
//! # Cart and checkout
//! toychest cart add <product-id> -q 2
//! toychest cart show
//! toychest cart update <product-id> -q 3
//! toychest cart remove <product-id>
//! toychest checkout
//!
//! # Analytics
//! toychest sales
//! toychest popular
//! ```
//!
//! # Commands
//!
//! - `register` / `login` / `logout` - Account management
//! - `products` / `search` - Catalog browsing
//! - `cart` - Show and mutate the cart
//! - `checkout` - Place an order for the whole cart
//! - `sales` / `popular` - Analytics dashboard
//!
//! Every command except `register` and `login` requires a stored session and
//! fails with a log-in prompt otherwise.

#![cfg_attr(not(test), forbid(unsafe_code))]
// The CLI's output IS the UI; printing is its job.
#![allow(clippy::print_stdout)]
#![allow(clippy::print_stderr)]

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

mod commands;

use toychest_storefront::backend::BackendClient;
use toychest_storefront::backend::types::ProductFilter;
use toychest_storefront::config::StorefrontConfig;
use toychest_storefront::error::AppError;
use toychest_storefront::session::SessionStore;

#[derive(Parser)]
#[command(name = "toychest")]
#[command(author, version, about = "Terminal storefront for the toy store")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new account
    Register {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password
        #[arg(short, long)]
        password: String,
    },
    /// Log in and store the session
    Login {
        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password
        #[arg(short, long)]
        password: String,
    },
    /// Log out and clear the stored session
    Logout {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// List the product catalog
    Products,
    /// Search the catalog
    Search {
        /// Free-text query
        #[arg(short, long)]
        query: Option<String>,

        /// Category filter
        #[arg(short, long)]
        category: Option<String>,

        /// Minimum price in dollars
        #[arg(long)]
        min_price: Option<Decimal>,

        /// Maximum price in dollars
        #[arg(long)]
        max_price: Option<Decimal>,

        /// Only show products in stock
        #[arg(long)]
        in_stock: bool,
    },
    /// Show and mutate the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Place an order for everything in the cart
    Checkout,
    /// Show total revenue
    Sales,
    /// Show the most ordered products
    Popular,
}

#[derive(Subcommand)]
enum CartAction {
    /// Show the cart and its total
    Show,
    /// Add a product to the cart
    Add {
        /// Product ID from the catalog listing
        product_id: String,

        /// How many to add
        #[arg(short, long, default_value = "1")]
        quantity: String,
    },
    /// Set the quantity of a product already in the cart
    Update {
        /// Product ID from the cart listing
        product_id: String,

        /// New quantity
        #[arg(short, long)]
        quantity: String,
    },
    /// Remove a product from the cart
    Remove {
        /// Product ID from the cart listing
        product_id: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        eprintln!("{}", e.user_message());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let config = StorefrontConfig::from_env()?;
    let backend = BackendClient::new(&config);
    let sessions = SessionStore::new(config.session_file.clone());

    match cli.command {
        Commands::Register {
            name,
            email,
            password,
        } => commands::auth::register(&backend, &sessions, &name, &email, &password).await,
        Commands::Login { email, password } => {
            commands::auth::login(&backend, &sessions, &email, &password).await
        }
        Commands::Logout { yes } => commands::auth::logout(&backend, &sessions, yes),
        Commands::Products => commands::catalog::products(&backend, &sessions).await,
        Commands::Search {
            query,
            category,
            min_price,
            max_price,
            in_stock,
        } => {
            let filter = ProductFilter {
                query,
                category,
                min_price: min_price.map(Into::into),
                max_price: max_price.map(Into::into),
                in_stock,
            };
            commands::catalog::search(&backend, &sessions, &filter).await
        }
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&backend, &sessions).await,
            CartAction::Add {
                product_id,
                quantity,
            } => commands::cart::add(&backend, &sessions, &product_id, &quantity).await,
            CartAction::Update {
                product_id,
                quantity,
            } => commands::cart::update(&backend, &sessions, &product_id, &quantity).await,
            CartAction::Remove { product_id, yes } => {
                commands::cart::remove(&backend, &sessions, &product_id, yes).await
            }
        },
        Commands::Checkout => commands::orders::checkout(&backend, &sessions).await,
        Commands::Sales => commands::analytics::sales(&backend, &sessions).await,
        Commands::Popular => commands::analytics::popular(&backend, &sessions).await,
    }
}
