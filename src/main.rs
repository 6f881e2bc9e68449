//! Circuit Plotter CLI
//!
//! Usage:
//!   circuit-plotter serve [--bind ADDR]
//!   circuit-plotter render <RESISTANCES> --topology <series|parallel> [-o FILE] [--format png|svg]
//!   circuit-plotter total <RESISTANCES> --topology <series|parallel>
//!   circuit-plotter palette
//!
//! Global options:
//!   -c, --config <FILE>       Settings file (TOML)
//!   -s, --stylesheet <FILE>   Stylesheet file for colors (TOML)
//!   --zero-branch <POLICY>    exclude | short

use std::fs;
use std::io::{self, Write};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use circuit_plotter::config::Settings;
use circuit_plotter::{
    parse, server, stylesheet, Circuit, PlotError, Plotter, Topology, ZeroBranchPolicy,
};

#[derive(Parser)]
#[command(name = "circuit-plotter")]
#[command(about = "Series/parallel resistance calculator and schematic renderer")]
struct Cli {
    /// Settings file (TOML)
    #[arg(short, long, global = true, env = "CIRCUIT_PLOTTER_CONFIG")]
    config: Option<PathBuf>,

    /// Stylesheet file for colors (TOML format)
    #[arg(short, long, global = true)]
    stylesheet: Option<PathBuf>,

    /// How zero-ohm branches count in parallel totals
    #[arg(long, global = true, value_enum)]
    zero_branch: Option<ZeroBranchPolicy>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the web form and plot endpoint
    Serve {
        /// Address to listen on
        #[arg(short, long, env = "CIRCUIT_PLOTTER_BIND")]
        bind: Option<SocketAddr>,
    },
    /// Draw a schematic
    Render {
        /// Comma-separated resistances in ohms, e.g. "10,20,30"
        resistances: String,
        /// Circuit topology
        #[arg(short, long)]
        topology: Topology,
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Png)]
        format: Format,
    },
    /// Print the equivalent resistance
    Total {
        /// Comma-separated resistances in ohms, e.g. "10,20,30"
        resistances: String,
        /// Circuit topology
        #[arg(short, long)]
        topology: Topology,
    },
    /// Print the default stylesheet
    Palette,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Png,
    Svg,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut settings = match &cli.config {
        Some(path) => Settings::from_file(path)
            .with_context(|| format!("loading config '{}'", path.display()))?,
        None => Settings::default(),
    };
    if let Some(path) = cli.stylesheet {
        settings.render.stylesheet = Some(path);
    }
    if let Some(policy) = cli.zero_branch {
        settings.calculator.zero_branch = policy;
    }

    match cli.command {
        Command::Palette => {
            print!("{}", stylesheet::default_palette_toml());
            Ok(())
        }
        Command::Total {
            resistances,
            topology,
        } => {
            let circuit = read_circuit(&resistances, topology)?;
            let total = circuit.total(settings.calculator.zero_branch)?;
            println!("{:.2} Ω", total);
            Ok(())
        }
        Command::Render {
            resistances,
            topology,
            output,
            format,
        } => {
            let circuit = read_circuit(&resistances, topology)?;
            let mut config = settings.render_config()?;
            if matches!(format, Format::Svg) {
                // Vector output needs no fonts
                config.png.load_system_fonts = false;
            }
            let plotter = Plotter::new(config);
            let bytes = match format {
                Format::Png => plotter.png(&circuit)?,
                Format::Svg => plotter.svg(&circuit)?.into_bytes(),
            };
            write_output(&bytes, output.as_ref())
        }
        Command::Serve { bind } => {
            let addr = bind.unwrap_or(settings.server.bind);
            let plotter = Plotter::new(settings.render_config()?);
            let runtime = tokio::runtime::Runtime::new().context("starting async runtime")?;
            runtime.block_on(server::serve(addr, plotter))?;
            Ok(())
        }
    }
}

/// Parse the resistance list, printing source-annotated errors on failure
fn read_circuit(resistances: &str, topology: Topology) -> anyhow::Result<Circuit> {
    match parse(resistances) {
        Ok(list) => Ok(Circuit::new(list.ohms(), topology)),
        Err(errors) => {
            for e in &errors {
                eprint!("{}", e.format(resistances, "resistances"));
            }
            Err(PlotError::Parse(errors).into())
        }
    }
}

fn write_output(bytes: &[u8], output: Option<&PathBuf>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            fs::write(path, bytes).with_context(|| format!("writing '{}'", path.display()))?;
            tracing::info!(path = %path.display(), bytes = bytes.len(), "schematic written");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(bytes)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
