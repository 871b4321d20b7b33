//! Lexigraph CLI: build, lay out and encode a snapshot from a page of
//! query results

use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use lexigraph::{GraphAssembler, LexigraphConfig, RecordPage, RenderAdapter, StaticRadialLayout};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lexigraph", version, about = "Lexigraph snapshot builder")]
struct Cli {
    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a positioned snapshot from a JSON page of query rows
    Build {
        /// Page file (`{"rows": [...]}` or a bare row array)
        input: PathBuf,

        /// YAML configuration file
        #[arg(long, env = "LEXIGRAPH_CONFIG")]
        config: Option<PathBuf>,

        /// Canvas width (overrides the configuration)
        #[arg(long)]
        width: Option<f64>,

        /// Canvas height (overrides the configuration)
        #[arg(long)]
        height: Option<f64>,

        /// Seed for a reproducible layout
        #[arg(long)]
        seed: Option<u64>,

        /// Print build statistics
        #[arg(long)]
        stats: bool,
    },
    /// Print the effective configuration as YAML
    Config {
        /// YAML configuration file
        #[arg(long, env = "LEXIGRAPH_CONFIG")]
        config: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Build {
            input,
            config,
            width,
            height,
            seed,
            stats,
        } => run_build(&input, config.as_deref(), width, height, seed, stats, &cli.format),
        Commands::Config { config } => run_config(config.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<LexigraphConfig, Box<dyn std::error::Error>> {
    Ok(match path {
        Some(path) => LexigraphConfig::from_file(path)?,
        None => LexigraphConfig::default(),
    })
}

fn run_build(
    input: &Path,
    config_path: Option<&Path>,
    width: Option<f64>,
    height: Option<f64>,
    seed: Option<u64>,
    show_stats: bool,
    format: &OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = load_config(config_path)?;
    if let Some(w) = width {
        config.width = w;
    }
    if let Some(h) = height {
        config.height = h;
    }
    config.validate()?;

    let page = RecordPage::from_json_str(&std::fs::read_to_string(input)?)?;
    let assembler = GraphAssembler::with_options(config.registry.clone());
    let (mut snapshot, stats) = assembler.build_with_stats(&page, &config.plan);
    info!(
        "Built snapshot from {}: {} nodes, {} links",
        input.display(),
        snapshot.node_count(),
        snapshot.link_count()
    );

    let layout = StaticRadialLayout::with_config(config.layout.clone());
    match seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            layout.layout_with_rng(&mut snapshot.nodes, config.width, config.height, &mut rng)
        }
        None => layout.layout(&mut snapshot.nodes, config.width, config.height),
    };

    let adapter = RenderAdapter::with_config(&snapshot.nodes, config.render.clone());
    let visuals = adapter.encode_snapshot(&snapshot);

    match format {
        OutputFormat::Json => {
            let mut output = json!({
                "snapshot": snapshot,
                "visuals": visuals,
            });
            if show_stats {
                output["stats"] = serde_json::to_value(stats)?;
            }
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Table => {
            if visuals.is_empty() {
                println!("(no nodes)");
            } else {
                let mut table = Table::new();
                table.set_content_arrangement(ContentArrangement::Dynamic);
                table.set_header(vec!["id", "type", "color", "radius", "x", "y"]);
                for v in &visuals {
                    table.add_row(vec![
                        v.id.clone(),
                        v.node_type.clone(),
                        v.color.to_string(),
                        format!("{:.2}", v.radius),
                        format_coord(v.x),
                        format_coord(v.y),
                    ]);
                }
                println!("{}", table);
            }

            if !snapshot.links.is_empty() {
                let mut table = Table::new();
                table.set_content_arrangement(ContentArrangement::Dynamic);
                table.set_header(vec!["source", "target", "type"]);
                for link in &snapshot.links {
                    table.add_row(vec![link.source.clone(), link.target.clone(), link.link_type.clone()]);
                }
                println!("{}", table);
            }
            println!("{} node(s), {} link(s)", snapshot.node_count(), snapshot.link_count());

            if show_stats {
                println!("Rows:             {}", stats.rows);
                println!("Nodes added:      {}", stats.nodes_added);
                println!("Nodes missing id: {}", stats.nodes_missing_id);
                println!("Nodes no type:    {}", stats.nodes_missing_type);
                println!("Nodes duplicate:  {}", stats.nodes_duplicate);
                println!("Links added:      {}", stats.links_added);
                println!("Links dangling:   {}", stats.links_dangling);
                println!("Links no handle:  {}", stats.links_missing_endpoint);
            }
        }
    }

    Ok(())
}

fn run_config(config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    print!("{}", config.to_yaml()?);
    Ok(())
}

fn format_coord(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}", v),
        None => "-".to_string(),
    }
}
