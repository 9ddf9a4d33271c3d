use std::io::{BufWriter, Write};

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use dense_graph_enumeration::format::{
  format_adjacency, format_grid, format_labeled, format_list, format_matrix,
};
use dense_graph_enumeration::{
  DenseGraph, Graph, Orientation, candidate_edges, enumerate_with, expected_count, new_graph,
};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dense-graph-enumeration")]
#[command(about = "Enumerate every graph with a given number of nodes", long_about = None)]
struct Cli {
  /// Number of nodes
  #[arg(short, long, default_value_t = 2)]
  rank: usize,

  /// Enumerate undirected graphs (edges i <= j, added both ways)
  #[arg(short, long, default_value_t = false)]
  undirected: bool,

  /// How each graph is printed
  #[arg(short, long, value_enum, default_value_t = Format::List)]
  format: Format,

  /// Row/column labels for the labeled format, one per node
  #[arg(long, value_delimiter = ',')]
  labels: Vec<String>,

  /// Refuse ranks above this; output grows as 2^(rank²)
  #[arg(long, default_value_t = 4)]
  max_rank: usize,

  /// Only print the header line
  #[arg(long, default_value_t = false)]
  count_only: bool,

  /// Hide the progress bar
  #[arg(short, long, default_value_t = false)]
  quiet: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
  List,
  Adjacency,
  Grid,
  Matrix,
  Labeled,
}

fn render(g: &DenseGraph, format: Format, labels: &[String]) -> Result<String> {
  Ok(match format {
    Format::List => format_list(g),
    Format::Adjacency => format_adjacency(g),
    Format::Grid => format_grid(g),
    Format::Matrix => format_matrix(g),
    Format::Labeled => format_labeled(g, labels).context("rendering labeled grid")?,
  })
}

/// Checks `--labels` against the format and rank before any work is done.
/// The labeled format falls back to node numbers when no labels are given.
fn resolve_labels(format: Format, labels: Vec<String>, rank: usize) -> Result<Vec<String>> {
  if format != Format::Labeled {
    if !labels.is_empty() {
      bail!("--labels is only used with --format labeled");
    }
    return Ok(labels);
  }
  if labels.is_empty() {
    return Ok((0..rank).map(|i| i.to_string()).collect());
  }
  if labels.len() != rank {
    bail!("got {} labels for a graph of rank {rank}", labels.len());
  }
  Ok(labels)
}

fn enumerate(seed: DenseGraph, orientation: Orientation, quiet: bool) -> Result<Vec<DenseGraph>> {
  let steps = candidate_edges(seed.len(), orientation).len() as u64;
  let pb = if quiet { ProgressBar::hidden() } else { ProgressBar::new(steps) };
  pb.set_style(
    ProgressStyle::with_template(
      "[enumerate] [{elapsed_precise}] {wide_bar:.cyan/blue} {pos}/{len} {msg}",
    )
    .context("building progress bar style")?
    .progress_chars("█▉▊▋▌▍▎▏  "),
  );

  let graphs = enumerate_with(seed, orientation, |n| {
    pb.inc(1);
    pb.set_message(format!("{n} graphs"));
  });

  pb.finish_with_message("✔ Enumeration complete");
  Ok(graphs)
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
    .init();

  let cli = Cli::parse();
  let orientation = if cli.undirected { Orientation::Undirected } else { Orientation::Directed };

  if cli.rank > cli.max_rank {
    bail!("rank {} exceeds --max-rank {}", cli.rank, cli.max_rank);
  }
  let Some(expected) = expected_count(cli.rank, orientation) else {
    bail!("enumerating rank {} would produce more than {} graphs", cli.rank, usize::MAX);
  };

  let labels = resolve_labels(cli.format, cli.labels, cli.rank)?;

  let seed =
    new_graph(cli.rank).with_context(|| format!("creating a graph of rank {}", cli.rank))?;
  info!(
    rank = cli.rank,
    ?orientation,
    expected,
    representation = seed.representation(),
    "starting"
  );

  let graphs = enumerate(seed, orientation, cli.quiet)?;

  let stdout = std::io::stdout();
  let mut out = BufWriter::new(stdout.lock());
  writeln!(out, "len {} {}", cli.rank, graphs.len())?;
  if cli.count_only {
    out.flush()?;
    return Ok(());
  }

  let multiline = cli.format != Format::List;
  for (k, g) in graphs.iter().enumerate() {
    let text = render(g, cli.format, &labels)?;
    if multiline && k > 0 {
      writeln!(out)?;
    }
    if multiline {
      write!(out, "{text}")?;
    } else {
      writeln!(out, "{text}")?;
    }
  }
  out.flush()?;
  Ok(())
}
