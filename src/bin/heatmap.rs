use std::{fs::File,
          io::{self, BufReader, BufWriter, Read, Write},
          path::PathBuf};
use anyhow::{Context, Result};
use clap::Parser;
use heatmap_cells::{Heatmap, HeatmapTable, parse_int, parse_stop};
use rgb::RGB8;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "heatmap", version,
          about = "Color the cells of a table according to their values")]
struct Args {
    /// JSON description of the table (`-` or absent: standard input)
    input: Option<PathBuf>,

    /// Where to write the HTML page (absent: standard output)
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Color of the cells with value 0
    #[arg(long, default_value = "white", value_parser = stop)]
    start: RGB8,

    /// Color of the cells with the maximum value
    #[arg(long, default_value = "yellow", value_parser = stop)]
    end: RGB8,

    /// Number of interpolation steps
    #[arg(long, default_value_t = Heatmap::STEPS)]
    steps: u32,

    /// Print the color of each of these values instead of a page
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true,
          conflicts_with_all = ["input", "output"])]
    values: Option<Vec<String>>,
}

fn stop(s: &str) -> Result<RGB8, String> {
    parse_stop(s).map_err(|e| e.to_string())
}

fn read_table(input: Option<&PathBuf>) -> Result<HeatmapTable> {
    match input {
        Some(path) if path.as_os_str() != "-" => {
            let fh = File::open(path)
                .with_context(|| format!("cannot open {}", path.display()))?;
            HeatmapTable::from_reader(BufReader::new(fh))
                .with_context(|| format!("cannot read {}", path.display()))
        }
        _ => {
            let mut s = String::new();
            io::stdin().read_to_string(&mut s)
                .context("cannot read standard input")?;
            s.parse().context("invalid table on standard input")
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();
    let heatmap = Heatmap::new(args.start, args.end).steps(args.steps)?;

    if let Some(values) = &args.values {
        let values: Vec<f64> = values.iter().map(|v| parse_int(v)).collect();
        let mut out = io::stdout().lock();
        for c in heatmap.colors(&values) {
            writeln!(out, "{c}")?;
        }
        return Ok(())
    }

    let mut table = read_table(args.input.as_ref())?;
    let n = table.colorize(&heatmap);
    info!(cells = n, rows = table.rows().len(), "colored heatmap");
    match &args.output {
        Some(path) => {
            let fh = File::create(path)
                .with_context(|| format!("cannot create {}", path.display()))?;
            let mut fh = BufWriter::new(fh);
            table.write_page(&mut fh, &heatmap)?;
            fh.flush()?;
        }
        None => {
            let mut out = io::stdout().lock();
            table.write_page(&mut out, &heatmap)?;
        }
    }
    Ok(())
}
