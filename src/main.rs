use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::info;

use course_registry::{demo, CatalogStorage, Registry, RegistryReport};

#[derive(Parser)]
#[command(name = "course_registry")]
#[command(version, about = "Student and course enrollment registry", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the built-in demonstration scenario
    Demo {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Number of students in the ranking
        #[arg(long, default_value_t = 2)]
        top: usize,
    },

    /// Load a catalog file and report on it
    Report {
        /// Catalog file (.toml, .yaml, .yml or .json)
        catalog: PathBuf,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Number of students in the ranking, overrides the catalog setting
        #[arg(long)]
        top: Option<usize>,

        /// Write the JSON report to this file instead of printing
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();
}

fn print_report(report: &RegistryReport, json: bool) -> Result<()> {
    if json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.render_text());
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Demo { json, top } => {
            let mut registry = Registry::new();
            demo::run(&mut registry)?;
            print_report(&RegistryReport::build(&registry, top), json)?;
        }
        Commands::Report { catalog, json, top, output } => {
            let catalog = CatalogStorage::new(&catalog).load()?;
            let (registry, stats) = catalog.build_registry()?;
            if stats.grades_ignored > 0 {
                info!("{} grades were ignored", stats.grades_ignored);
            }

            let top = top.unwrap_or(catalog.settings.top_students);
            let report = RegistryReport::build(&registry, top);
            match output {
                Some(path) => report.write_to(&path)?,
                None => print_report(&report, json)?,
            }
        }
    }

    Ok(())
}
