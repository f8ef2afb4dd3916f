use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use polaris_client::models::catalogs::{CreateCatalogRequest, StorageConfig};
use polaris_client::models::namespaces::CreateNamespaceRequest;
use polaris_client::models::tables::{CreateTableRequest, SchemaField, TableSchema};
use polaris_client::{ClientConfig, PolarisClient};

#[derive(Parser)]
#[command(name = "polaris-cli")]
#[command(about = "Polaris catalog CLI client", long_about = None)]
struct Cli {
    /// Catalog service host (host:port)
    #[arg(long, env = "POLARIS_HOST", default_value = "localhost:8183")]
    host: String,

    /// OAuth client id
    #[arg(long, env = "POLARIS_CLIENT_ID", default_value = "admin")]
    client_id: String,

    /// OAuth client secret
    #[arg(
        long,
        env = "POLARIS_CLIENT_SECRET",
        default_value = "admin",
        hide_env_values = true
    )]
    client_secret: String,

    /// Catalog to operate on
    #[arg(long, default_value = "polaris4")]
    catalog: String,

    /// Namespace to operate on
    #[arg(long, default_value = "polaris4_namespace")]
    namespace: String,

    /// Table to inspect
    #[arg(long, default_value = "customers")]
    table: String,

    /// Enable verbose logging
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a catalog
    CreateCatalog {
        /// Catalog name
        name: String,

        /// Default base location for table data
        #[arg(long)]
        base_location: String,

        /// IAM role ARN granting access to the base location (S3 storage)
        #[arg(long)]
        role_arn: Option<String>,

        /// Storage region
        #[arg(long, default_value = "us-east-1")]
        region: String,
    },

    /// Create a namespace in the target catalog
    CreateNamespace {
        /// Namespace name; dots separate segments
        name: String,

        /// Namespace properties as key=value pairs
        #[arg(long = "property", value_parser = parse_property)]
        properties: Vec<(String, String)>,
    },

    /// Create a demonstration table in the target namespace
    CreateTable {
        /// Table name
        name: String,
    },
}

fn parse_property(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("invalid property '{}', expected key=value", s))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging
    let filter_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_level)))
        .init();

    // Authenticate once; the token lives for the rest of the run
    let config = ClientConfig::build(&cli.host, &cli.client_id, &cli.client_secret).build()?;

    println!("Getting authentication token...");
    let client = match PolarisClient::authenticate(config).await {
        Ok(client) => client,
        Err(e) => {
            eprintln!("✗ Authentication failed: {}", e);
            std::process::exit(1);
        }
    };
    println!("✓ Authenticated");

    // Execute command
    match cli.command {
        None => run_listing(&client, &cli.catalog, &cli.namespace, &cli.table).await?,

        Some(Commands::CreateCatalog {
            name,
            base_location,
            role_arn,
            region,
        }) => {
            let storage = match role_arn {
                Some(role_arn) => StorageConfig::s3(role_arn, region),
                None => StorageConfig::file(),
            };
            let request = CreateCatalogRequest::internal(&name, &base_location, storage);

            match client.create_catalog(&request).await? {
                Some(catalog) => {
                    println!("\n✓ Created catalog\n");
                    println!("{}", catalog);
                }
                None => println!("✗ Catalog '{}' was not created", name),
            }
        }

        Some(Commands::CreateNamespace { name, properties }) => {
            let segments = name.split('.').map(str::to_string).collect();
            let mut request = CreateNamespaceRequest::with_segments(segments);
            for (key, value) in properties {
                request = request.with_property(key, value);
            }

            match client.create_namespace(&cli.catalog, &request).await? {
                Some(namespace) => {
                    println!("✓ Created namespace '{}'", namespace.namespace.join("."))
                }
                None => println!("✗ Namespace '{}' was not created", name),
            }
        }

        Some(Commands::CreateTable { name }) => {
            let request = demo_table(&name);

            match client
                .create_table(&cli.catalog, &cli.namespace, &request)
                .await?
            {
                Some(table) => {
                    println!("\n✓ Created table '{}'\n", name);
                    println!("{}", table.metadata);
                }
                None => println!("✗ Table '{}' was not created", name),
            }
        }
    }

    Ok(())
}

async fn run_listing(
    client: &PolarisClient,
    catalog: &str,
    namespace: &str,
    table: &str,
) -> polaris_client::Result<()> {
    println!("\nListing catalogs...");
    match client.list_catalogs().await? {
        Some(response) => {
            println!("Catalogs ({} total):", response.catalogs.len());
            for catalog in &response.catalogs {
                println!("  - {}", catalog.name);
            }
        }
        None => println!("✗ Catalog listing produced no result"),
    }

    println!("\nListing namespaces in catalog '{}'...", catalog);
    match client.list_namespaces(catalog).await? {
        Some(response) => {
            println!("Namespaces ({} total):", response.namespaces.len());
            for namespace in &response.namespaces {
                println!("  - {}", namespace.join("."));
            }
        }
        None => println!("✗ Namespace listing produced no result"),
    }

    println!("\nListing tables in namespace '{}'...", namespace);
    match client.list_tables(catalog, namespace).await? {
        Some(response) => {
            println!("Tables ({} total):", response.identifiers.len());
            for identifier in &response.identifiers {
                println!("  - {}", identifier.full_name());
            }
        }
        None => println!("✗ Table listing produced no result"),
    }

    println!("\nGetting metadata for table '{}'...", table);
    match client.get_table_metadata(catalog, namespace, table).await? {
        Some(response) => {
            println!();
            println!("{}", response.metadata);
        }
        None => println!("✗ Table metadata produced no result"),
    }

    Ok(())
}

fn demo_table(name: &str) -> CreateTableRequest {
    let schema = TableSchema::new(
        0,
        vec![
            SchemaField::new(1, "id", true, "long"),
            SchemaField::new(2, "created_at", true, "timestamp"),
            SchemaField::new(3, "account_balance", true, "long"),
            SchemaField::new(4, "renewal_date", true, "date"),
        ],
    );

    CreateTableRequest::new(name, schema)
        .with_property("write.format.default", "parquet")
        .with_property("write.parquet.compression-codec", "snappy")
}
