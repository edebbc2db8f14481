use clap::{Parser, Subcommand};
use dv_client::{
    models::{ListTablesForRoleParams, PrimaryCatalogInfo, TurnOnPolicyV2Params},
    Authenticator, DVClient,
};
use std::time::Duration;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "dv-client")]
#[command(about = "Data Virtualization CLI client", long_about = None)]
struct Cli {
    /// Service endpoint URL
    #[arg(short, long, env = "DATA_VIRTUALIZATION_URL")]
    service_url: String,

    /// Bearer token for authentication
    #[arg(
        short,
        long,
        env = "DATA_VIRTUALIZATION_BEARER_TOKEN",
        hide_env_values = true
    )]
    token: String,

    /// Enable verbose logging
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List data source connections
    Connections,

    /// Show the policy enforcement status
    PolicyStatus,

    /// Set the policy enforcement status
    SetPolicy {
        /// Desired status (enabled or disabled)
        #[arg(value_name = "STATUS")]
        status: String,
    },

    /// List virtualized tables granted to a role
    Tables {
        /// Role name (MANAGER, STEWARD, ENGINEER, or USER)
        #[arg(value_name = "ROLE")]
        rolename: String,
    },

    /// Show the primary catalog
    Catalog,
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

    // Create client
    let client = DVClient::builder(cli.service_url, Authenticator::bearer(cli.token))
        .timeout(Duration::from_secs(60))
        .build()?;

    // Execute command
    match cli.command {
        Commands::Connections => {
            println!("Fetching data source connections...");

            match client.list_datasource_connections(None).await {
                Ok(response) => {
                    let nodes = response.result.datasource_connections.unwrap_or_default();
                    println!("\n✓ {} connection node(s) retrieved\n", nodes.len());
                    for node in nodes {
                        println!("{}", node);
                    }
                }
                Err(e) => {
                    eprintln!("✗ Failed to list connections: {}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::PolicyStatus => match client.check_policy_status_v2(None).await {
            Ok(response) => {
                println!("✓ Policy enforcement: {}", response.result.status);
            }
            Err(e) => {
                eprintln!("✗ Failed to check policy status: {}", e);
                std::process::exit(1);
            }
        },

        Commands::SetPolicy { status } => {
            match client.turn_on_policy_v2(TurnOnPolicyV2Params::new(status)).await {
                Ok(response) => {
                    println!("✓ Policy enforcement now: {}", response.result.status);
                }
                Err(e) => {
                    eprintln!("✗ Failed to set policy status: {}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Tables { rolename } => {
            println!("Fetching tables granted to role: {}", rolename);

            match client
                .list_tables_for_role(ListTablesForRoleParams::new(rolename))
                .await
            {
                Ok(response) => {
                    let objects = response.result.objects.unwrap_or_default();
                    println!("\n✓ {} table(s) retrieved\n", objects.len());
                    println!("{:<30} {:<30}", "Schema", "Table");
                    println!("{}", "-".repeat(60));
                    for table in &objects {
                        println!(
                            "{:<30} {:<30}",
                            table.table_schema.as_deref().unwrap_or("-"),
                            table.table_name.as_deref().unwrap_or("-"),
                        );
                    }
                }
                Err(e) => {
                    eprintln!("✗ Failed to list tables: {}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Catalog => match client.get_primary_catalog(None).await {
            Ok(response) => {
                println!("✓ Primary catalog retrieved\n");
                print_catalog(&response.result);
            }
            Err(e) => {
                eprintln!("✗ Failed to get primary catalog: {}", e);
                std::process::exit(1);
            }
        },
    }

    Ok(())
}

fn print_catalog(info: &PrimaryCatalogInfo) {
    if let Some(entity) = &info.entity {
        println!("Name:        {}", entity.name.as_deref().unwrap_or("-"));
        println!(
            "Description: {}",
            entity.description.as_deref().unwrap_or("-")
        );
        if let Some(governed) = entity.is_governed {
            println!("Governed:    {}", governed);
        }
    }
    if let Some(metadata) = &info.metadata {
        println!("GUID:        {}", metadata.guid.as_deref().unwrap_or("-"));
        let created = metadata
            .create_time_as_datetime()
            .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("Created:     {}", created);
    }
    if let Some(href) = &info.href {
        println!("Href:        {}", href);
    }
}
