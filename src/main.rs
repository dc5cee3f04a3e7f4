use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use piggy_icon_gen::{gradient, simple};

#[derive(Debug, Parser)]
#[clap(
    name = "piggy-icon-gen",
    about = "Generate the piggy-bank app icon set as PNG assets"
)]
struct Args {
    /// Output directory for the generated PNG files.
    #[clap(short, long, value_name = "DIR", default_value = "assets/icons")]
    output: PathBuf,

    /// Custom icon sizes for the gradient set. When set, only these sizes
    /// are generated next to the master file.
    #[clap(short, long, value_delimiter = ',', value_name = "SIZES")]
    png: Option<Vec<u32>>,

    /// Generate the flat ring-and-dollar icon instead of the gradient set
    #[clap(long)]
    simple: bool,

    /// Base color for the flat icon (CSS color format)
    #[clap(long, default_value = "#3c2fcf")]
    color: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.simple {
        // The flat icon keeps its own top-level catch: report and exit clean.
        if let Err(err) = simple::generate(&args.output, &args.color) {
            println!("Error: {err:#}");
        }
        return Ok(());
    }

    let sizes = args
        .png
        .unwrap_or_else(|| gradient::DEFAULT_SIZES.to_vec());
    gradient::generate(&args.output, &sizes)
}
