use catalog_sdk::{CatalogClient, ClientError, Product};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "catalog-cli")]
#[command(about = "Management CLI for the product catalog service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every product
    List,
    /// Show one product
    Get { id: String },
    /// Add a new product
    Create(ProductArgs),
    /// Replace an existing product
    Update(ProductArgs),
    /// Remove a product
    Delete { id: String },
}

#[derive(Args)]
struct ProductArgs {
    id: String,

    #[arg(long)]
    title: String,

    #[arg(long, default_value = "")]
    description: String,

    #[arg(long)]
    price: f64,

    /// Discount label, e.g. "-30%"
    #[arg(long)]
    discount: Option<String>,

    /// Flag the product as new
    #[arg(long)]
    new: bool,
}

impl ProductArgs {
    fn into_product(self) -> Product {
        Product {
            id: self.id,
            title: self.title,
            description: self.description,
            price: self.price,
            discount: self.discount,
            is_new: self.new,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let client = CatalogClient::new(&cli.url);

    let outcome = match cli.command {
        Commands::List => print_json(client.list_products().await),
        Commands::Get { id } => print_json(client.get_product(&id).await),
        Commands::Create(args) => {
            let product = args.into_product();
            print_json(client.create_product(&product).await)
        }
        Commands::Update(args) => {
            let product = args.into_product();
            print_json(client.update_product(&product.id, &product).await)
        }
        Commands::Delete { id } => client.delete_product(&id).await.map(|()| {
            println!("Deleted product {}", id);
        }),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn print_json<T: Serialize>(result: Result<T, ClientError>) -> Result<(), ClientError> {
    let value = result?;
    match serde_json::to_string_pretty(&value) {
        Ok(text) => println!("{}", text),
        Err(e) => eprintln!("Error: could not render response: {}", e),
    }
    Ok(())
}
