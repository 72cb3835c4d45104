//! Growth Explorer
//!
//! CLI commands:
//! - gui: Launch the native viewer
//! - list: List the complexity catalog
//! - table: Print the comparison sample table
//! - breakdown: Print the mathematical breakdown for one class
//! - export: Write the full series to a JSON file

mod catalog;
mod config;
mod gui;
mod logging;
mod series;
mod view;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use catalog::Complexity;

#[derive(Parser)]
#[command(name = "growth_explorer")]
#[command(about = "Interactive visualizations of algorithmic growth rates")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the YAML config
    #[arg(short, long, default_value = "growth_explorer.yaml")]
    config: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch native GUI viewer
    Gui,

    /// List the complexity catalog
    List,

    /// Print the comparison sample table
    Table {
        /// Range endpoint (clamped into [1, 100])
        #[arg(short, long, default_value = "100")]
        max_n: u32,
    },

    /// Print the mathematical breakdown for one complexity class
    Breakdown {
        /// Class key ("quadratic") or display name ("O(n²)")
        complexity: String,

        /// Range endpoint (the breakdown itself stops at 15)
        #[arg(short, long, default_value = "15")]
        max_n: u32,
    },

    /// Write the full series to a JSON file
    Export {
        /// Range endpoint (clamped into [1, 100])
        #[arg(short, long, default_value = "100")]
        max_n: u32,

        /// Output path
        #[arg(short, long, default_value = "growth_series.json")]
        output: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    logging::init_logging("logs");
    tracing::info!("Growth Explorer starting up");

    let cli = Cli::parse();

    let config = if cli.config.exists() {
        tracing::info!("Loading config from {:?}", cli.config);
        config::Config::load(&cli.config)?
    } else {
        tracing::warn!("Config file not found: {:?}, using defaults", cli.config);
        config::Config::default()
    };

    match cli.command {
        Commands::Gui => {
            tracing::info!("Launching native GUI viewer");
            gui::run_viewer(config)?;
        }

        Commands::List => {
            list_catalog();
        }

        Commands::Table { max_n } => {
            print_table(&config, max_n);
        }

        Commands::Breakdown { complexity, max_n } => {
            let class = Complexity::from_key(&complexity)?;
            print_breakdown(class, max_n);
        }

        Commands::Export { max_n, output } => {
            export_series(max_n, &output)?;
        }
    }

    Ok(())
}

/// List the complexity catalog
fn list_catalog() {
    println!("Complexity catalog ({} classes):", Complexity::ALL.len());
    println!();

    for class in Complexity::ALL {
        println!("## {} — {}", class.name(), class.formula());
        println!("  {}", class.explanation());
        println!("  e.g. {}", class.example());
        println!();
    }
}

/// Print the comparison sample table for the configured visible classes
fn print_table(config: &config::Config, max_n: u32) {
    let visible = config.visible_classes();
    if visible.is_empty() {
        println!("Select at least one complexity class (check the 'visible' config section).");
        return;
    }

    let rows = series::comparison_rows(max_n, &visible);

    print!("{:>8}", "");
    for class in &visible {
        print!("{:>16}", class.name());
    }
    println!();

    for row in rows {
        print!("{:>8}", row.label);
        for (_, value) in &row.values {
            print!("{:>16.1}", value);
        }
        println!();
    }
}

/// Print the mathematical breakdown for one class
fn print_breakdown(class: Complexity, max_n: u32) {
    println!("{}   {}", class.name(), class.formula());
    println!("{}", class.explanation());
    println!();
    println!("{:>4} {:>14} {:>14}", "n", "f(n)", "growth");

    for row in series::breakdown(class, max_n) {
        let growth = match row.growth_factor {
            None => "baseline".to_string(),
            Some(factor) if factor.is_finite() => format!("×{:.2}", factor),
            Some(_) => "—".to_string(),
        };
        println!("{:>4} {:>14.2} {:>14}", row.n, row.value, growth);
    }
}

/// Write the full series to a JSON file
fn export_series(max_n: u32, output: &PathBuf) -> anyhow::Result<()> {
    let points = series::generate_series(max_n);

    let data = serde_json::json!({
        "generated_at": chrono::Utc::now().to_rfc3339(),
        "max_n": series::clamp_max_n(max_n),
        "classes": Complexity::ALL.iter().map(|c| serde_json::json!({
            "name": c.name(),
            "key": c.key(),
            "formula": c.formula(),
        })).collect::<Vec<_>>(),
        "points": points.iter().map(|p| serde_json::json!({
            "n": p.n,
            "values": p.values.iter()
                .map(|(class, value)| (class.name().to_string(), serde_json::json!(value)))
                .collect::<serde_json::Map<String, serde_json::Value>>(),
        })).collect::<Vec<_>>(),
    });

    std::fs::write(output, serde_json::to_string_pretty(&data)?)?;
    println!("Wrote {} points -> {:?}", points.len(), output);
    Ok(())
}
