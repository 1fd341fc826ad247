//! route-resolver
//!
//! Compiles a route manifest and answers queries against the resulting table.
//!
//! ```text
//! routes.toml ──▶ config::load_config ──▶ RouteManifest
//!                                              │
//!                                              ▼
//!                                  routing::RouteCompiler
//!                                              │
//!                                              ▼
//!                 list / match / tags ◀── RoutingTable ──▶ watch (hot reload)
//! ```
//!
//! Results are printed as JSON on stdout; logs go to stderr.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use route_resolver::config::{load_config, ManifestWatcher, RouteManifest};
use route_resolver::observability::logging::init_logging;
use route_resolver::routing::{RequestMethod, RoutingTable, SharedRoutingTable, Tag};

#[derive(Parser)]
#[command(name = "route-resolver")]
#[command(about = "Compile route templates and query the routing table", long_about = None)]
struct Cli {
    /// Route manifest to load.
    #[arg(short, long, default_value = "routes.toml")]
    config: PathBuf,

    /// Base scope to compile; repeat for several. Overrides the manifest.
    #[arg(short, long)]
    scope: Vec<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every compiled route
    List,
    /// Find routes serving a concrete path
    Match {
        path: String,

        /// Resolve a single entry for this method
        #[arg(short, long)]
        method: Option<RequestMethod>,
    },
    /// Find routes carrying a tag
    Tags {
        tag: String,

        #[arg(short, long, value_enum, default_value_t = TagLevel::Any)]
        level: TagLevel,
    },
    /// Keep the table current while the manifest changes
    Watch,
}

#[derive(Clone, Copy, ValueEnum)]
enum TagLevel {
    Any,
    Group,
    Route,
    Parameter,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut manifest = load_config(&cli.config)?;
    apply_scope_override(&mut manifest, &cli.scope);

    init_logging(&manifest.observability)?;
    tracing::info!(
        config = %cli.config.display(),
        groups = manifest.groups.len(),
        strict = manifest.strict,
        "Route manifest loaded"
    );

    let table = manifest.build_table()?;

    match cli.command {
        Commands::List => print_json(&table.all())?,
        Commands::Match { path, method } => match method {
            Some(method) => print_json(&table.find_exact(&path, method))?,
            None => print_json(&table.find_by_path(&path))?,
        },
        Commands::Tags { tag, level } => {
            let tag = Tag::new(tag);
            let found = match level {
                TagLevel::Any => table.find_by_tag(&tag),
                TagLevel::Group => table.find_by_group_tag(&tag),
                TagLevel::Route => table.find_by_route_tag(&tag),
                TagLevel::Parameter => table.find_by_parameter_tag(&tag),
            };
            print_json(&found)?;
        }
        Commands::Watch => watch(&cli.config, &cli.scope, table).await?,
    }

    Ok(())
}

async fn watch(
    config: &Path,
    scopes: &[String],
    table: RoutingTable,
) -> Result<(), Box<dyn std::error::Error>> {
    let shared = SharedRoutingTable::new(table);
    let (watcher, mut updates) = ManifestWatcher::new(config);
    let _watcher = watcher.run()?;
    tracing::info!(routes = shared.load().len(), "Watching for manifest changes");

    loop {
        tokio::select! {
            Some(mut manifest) = updates.recv() => {
                apply_scope_override(&mut manifest, scopes);
                match manifest.build_table() {
                    Ok(table) => {
                        shared.replace(table);
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Rebuild failed, keeping current routes");
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Shutdown signal received");
                break;
            }
        }
    }

    Ok(())
}

fn apply_scope_override(manifest: &mut RouteManifest, scopes: &[String]) {
    if !scopes.is_empty() {
        manifest.scopes = scopes.to_vec();
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
