use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use mindgraph::{sample, RenderTree};

#[derive(Debug, Parser)]
#[command(
    name = "mindgraph",
    about = "Print the demo mind map as an outline or as a renderer-ready JSON snapshot."
)]
struct Args {
    /// Output format.
    #[arg(short = 'f', long = "format", default_value = "outline")]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
enum OutputFormat {
    /// Indented text outline plus the cross-link list.
    Outline,
    /// Nested hierarchy and link list for visualization libraries.
    Json,
}

fn main() {
    if let Err(err) = dispatch() {
        eprintln!("\u{001b}[31merror:\u{001b}[0m {err:?}");
        std::process::exit(1);
    }
}

fn dispatch() -> Result<()> {
    let args = Args::parse();
    let map = sample::sample_map();

    match args.format {
        OutputFormat::Outline => print!("{}", map.outline()),
        OutputFormat::Json => {
            let tree = RenderTree::from_map(&map).context("demo map has no root")?;
            let json = tree
                .to_json()
                .context("failed to serialize the render snapshot")?;
            println!("{json}");
        }
    }

    Ok(())
}
