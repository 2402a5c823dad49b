//! Waybill storefront CLI

use std::process;

use clap::{Args, Parser, Subcommand};
use waybill::{
    access::{Role, Session},
    geo::Coordinate,
};
use waybill_app::{
    config::{ApiSettings, LoggingSettings, SessionSettings, WarehouseSettings},
    context::AppContext,
    flow::CheckoutFlow,
    logging,
    session::SessionStore,
};

#[derive(Debug, Parser)]
#[command(name = "waybill", about = "Storefront shipping & checkout client", long_about = None)]
struct Cli {
    #[command(flatten)]
    api: ApiSettings,

    #[command(flatten)]
    warehouse: WarehouseSettings,

    #[command(flatten)]
    session: SessionSettings,

    #[command(flatten)]
    logging: LoggingSettings,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Save the signed-in user for subsequent commands.
    Login(LoginArgs),

    /// Forget the saved user.
    Logout,

    /// Cart operations.
    Cart(CartCommand),

    /// Request a shipping quote for a destination.
    Quote(DestinationArgs),

    /// Run the full checkout: quote, tax id, payment session.
    Pay(PayArgs),
}

#[derive(Debug, Args)]
struct LoginArgs {
    /// Backend user id.
    #[arg(long)]
    user_id: u64,

    /// Granted role.
    #[arg(long, value_enum, default_value_t = RoleArg::Customer)]
    role: RoleArg,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum RoleArg {
    Customer,
    Admin,
}

impl From<RoleArg> for Role {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::Customer => Role::Customer,
            RoleArg::Admin => Role::Admin,
        }
    }
}

#[derive(Debug, Args)]
struct CartCommand {
    #[command(subcommand)]
    command: CartSubcommand,
}

#[derive(Debug, Subcommand)]
enum CartSubcommand {
    /// Add a product variant to the cart.
    Add {
        /// Product variant id.
        #[arg(long)]
        variant_id: u64,

        /// Quantity to add.
        #[arg(long, default_value_t = 1)]
        quantity: u32,
    },

    /// Change the quantity of a cart line.
    Update {
        /// Product variant id.
        #[arg(long)]
        variant_id: u64,

        /// New quantity, at least 1.
        #[arg(long)]
        quantity: u32,
    },

    /// Remove a cart line.
    Remove {
        /// Product variant id.
        #[arg(long)]
        variant_id: u64,
    },

    /// Empty the cart.
    Clear,

    /// Print the cart contents.
    Show,
}

#[derive(Debug, Args)]
struct DestinationArgs {
    /// Destination latitude.
    #[arg(long)]
    lat: f64,

    /// Destination longitude.
    #[arg(long)]
    lng: f64,
}

#[derive(Debug, Args)]
struct PayArgs {
    #[command(flatten)]
    destination: DestinationArgs,

    /// Tax id for the invoice; `CF` requests none.
    #[arg(long, default_value = "CF")]
    nit: String,
}

#[tokio::main]
async fn main() {
    let _env = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(error) = logging::init(&cli.logging) {
        eprintln!("{error}");
        process::exit(1);
    }

    if let Err(error) = run(cli).await {
        eprintln!("{error}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), String> {
    let Cli {
        api,
        warehouse,
        session,
        logging: _,
        command,
    } = cli;

    let store = SessionStore::new(session.session_file);

    match command {
        Commands::Login(args) => {
            let session = Session {
                user_id: args.user_id,
                role: args.role.into(),
            };

            store
                .save(&session)
                .map_err(|error| format!("failed to save session: {error}"))?;

            println!("signed in as user {}", session.user_id);

            Ok(())
        }
        Commands::Logout => {
            store
                .clear()
                .map_err(|error| format!("failed to clear session: {error}"))?;

            println!("signed out");

            Ok(())
        }
        Commands::Cart(cart) => {
            let mut flow = build_flow(&api, &warehouse, &store)?;

            run_cart(&mut flow, cart.command).await
        }
        Commands::Quote(args) => {
            let mut flow = build_flow(&api, &warehouse, &store)?;

            run_quote(&mut flow, args).await
        }
        Commands::Pay(args) => {
            let mut flow = build_flow(&api, &warehouse, &store)?;

            run_pay(&mut flow, args).await
        }
    }
}

fn build_flow(
    api: &ApiSettings,
    warehouse: &WarehouseSettings,
    store: &SessionStore,
) -> Result<CheckoutFlow, String> {
    let context = AppContext::from_api_config(&api.api_config())
        .map_err(|error| format!("failed to initialise services: {error}"))?;

    let session = store
        .load()
        .map_err(|error| format!("failed to load session: {error}"))?;

    Ok(CheckoutFlow::new(context, session, warehouse.origin()))
}

async fn run_cart(flow: &mut CheckoutFlow, command: CartSubcommand) -> Result<(), String> {
    match command {
        CartSubcommand::Add {
            variant_id,
            quantity,
        } => {
            flow.add_line(variant_id, quantity)
                .await
                .map_err(|error| error.to_string())?;

            println!("added variant {variant_id} × {quantity}");
        }
        CartSubcommand::Update {
            variant_id,
            quantity,
        } => {
            flow.update_quantity(variant_id, quantity)
                .await
                .map_err(|error| error.to_string())?;

            println!("variant {variant_id} now × {quantity}");
        }
        CartSubcommand::Remove { variant_id } => {
            flow.remove_line(variant_id)
                .await
                .map_err(|error| error.to_string())?;

            println!("removed variant {variant_id}");
        }
        CartSubcommand::Clear => {
            flow.clear_cart().await.map_err(|error| error.to_string())?;

            println!("cart cleared");
        }
        CartSubcommand::Show => {
            flow.reload_cart().await.map_err(|error| error.to_string())?;

            print_cart(flow);
        }
    }

    Ok(())
}

fn print_cart(flow: &CheckoutFlow) {
    if flow.checkout().lines().is_empty() {
        println!("the cart is empty");
        return;
    }

    let mut subtotal = rust_decimal::Decimal::ZERO;

    for line in flow.checkout().lines() {
        let total = line.line_total();
        subtotal += total;

        println!(
            "{} × {}  @ {}  = {}",
            line.display_name(),
            line.quantity,
            line.unit_price.unwrap_or_default(),
            total
        );
    }

    println!("subtotal: {subtotal:.2}");
}

async fn run_quote(flow: &mut CheckoutFlow, args: DestinationArgs) -> Result<(), String> {
    flow.reload_cart().await.map_err(|error| error.to_string())?;

    let preview = flow.set_destination(Coordinate::new(args.lat, args.lng));
    println!("preview distance: {preview:.1} km");

    let quote = flow.request_quote().await.map_err(|error| error.to_string())?;

    println!("distance: {:.1} km", quote.distance_km);
    println!("base cost: {}", quote.base_cost);
    println!("distance surcharge: {}", quote.distance_surcharge);
    println!(
        "discount: {} ({}%)",
        quote.discount_total, quote.discount_pct
    );
    println!("total shipping: {}", quote.total);

    Ok(())
}

async fn run_pay(flow: &mut CheckoutFlow, args: PayArgs) -> Result<(), String> {
    flow.reload_cart().await.map_err(|error| error.to_string())?;
    flow.set_destination(Coordinate::new(args.destination.lat, args.destination.lng));

    flow.request_quote().await.map_err(|error| error.to_string())?;
    flow.set_tax_id(args.nit);

    let url = flow
        .confirm_payment()
        .await
        .map_err(|error| error.to_string())?;

    println!("payment session created; complete it at:");
    println!("{url}");
    println!("you will be redirected back to the store when done");

    Ok(())
}
