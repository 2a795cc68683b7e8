//! Sankey Flow Plugin - Main entry point
//!
//! Reads one host request (editor-panel configuration + columnar element
//! data, JSON) from a file or stdin, runs the shared pipeline, and writes
//! the render model (edge list + color table + series settings, JSON) for
//! the chart component.
//!
//! Diagnostics go to stderr; only the render model is written to stdout,
//! so the output can be piped straight into the chart component.
//!
//! Usage:
//! ```bash
//! sigma_sankey_plugin --request request.json --output model.json
//! cat request.json | sigma_sankey_plugin
//! ```

use anyhow::{Context, Result};
use sigma_sankey_plugin::config::SankeyConfig;
use sigma_sankey_plugin::pipeline;
use sigma_sankey_plugin::sigma::{Frame, PluginPropertyReader, PluginRequest};
use std::io::Read;

fn main() {
    eprintln!("Sankey Flow Plugin v{}", env!("CARGO_PKG_VERSION"));

    let args: Vec<String> = std::env::args().collect();
    let options = parse_args(&args);

    match run(&options) {
        Ok(()) => {
            eprintln!("\n✓ Render model written");
        }
        Err(e) => {
            eprintln!("\n✗ Recomputation failed: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Command-line options
#[derive(Debug, Default)]
struct Options {
    /// Request JSON path (None = stdin)
    request_path: Option<String>,
    /// Output JSON path (None = stdout)
    output_path: Option<String>,
}

/// Parse command-line arguments
fn parse_args(args: &[String]) -> Options {
    let mut options = Options::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--request" if i + 1 < args.len() => {
                options.request_path = Some(args[i + 1].clone());
                i += 2;
            }
            "--output" if i + 1 < args.len() => {
                options.output_path = Some(args[i + 1].clone());
                i += 2;
            }
            _ => i += 1,
        }
    }

    options
}

fn run(options: &Options) -> Result<()> {
    eprintln!("\n[1/4] Reading request...");
    let request_text = read_request(options)?;
    let request = PluginRequest::from_json(&request_text)?;
    eprintln!("  Config properties: {}", request.config.len());
    eprintln!("  Data columns: {}", request.data.len());

    eprintln!("\n[2/4] Resolving configuration...");
    let props = PluginPropertyReader::new(Some(&request.config));
    let config = SankeyConfig::from_properties(&props);
    print_config(&config);

    eprintln!("\n[3/4] Building render model...");
    let frame = Frame::from_columns(&request.data)?;
    eprintln!("  Rows: {}", frame.n_rows());

    let model = pipeline::build_flow(&config, &frame)?;
    eprintln!(
        "  Edges: {}, color entries: {}",
        model.edges.len(),
        model.colors.len()
    );

    eprintln!("\n[4/4] Writing render model...");
    let json = model.to_json()?;
    match &options.output_path {
        Some(path) => {
            std::fs::write(path, &json).with_context(|| format!("writing '{}'", path))?;
            eprintln!("  Saved to {}", path);
        }
        None => println!("{}", json),
    }

    Ok(())
}

fn read_request(options: &Options) -> Result<String> {
    match &options.request_path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("reading '{}'", path))
        }
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("reading request from stdin")?;
            Ok(text)
        }
    }
}

fn print_config(config: &SankeyConfig) {
    if let Some(ref source) = config.source {
        eprintln!("  Source element: {}", source);
    }
    eprintln!("  Dimensions: {:?}", config.dimensions);
    eprintln!("  Measures: {:?}", config.measures);
    eprintln!(
        "  Opacity: {}, link tension: {}",
        config.opacity, config.link_tension
    );
    if config.custom.is_some() {
        eprintln!("  Color overrides: set");
    }
}
