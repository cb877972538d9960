// File: crates/linechart-demo/src/main.rs
// Summary: Demo pulls points from a provider (random, seeded, or CSV) and renders the shadow line chart to PNG/SVG.

mod csv_source;

use anyhow::{Context, Result};
use clap::Parser;
use linechart_core::{svg, theme, CanvasSize, ChartStyle, DataProvider, LineChart, RandomDataProvider};
use linechart_render_skia::SkiaRenderer;
use std::path::PathBuf;

use csv_source::CsvDataProvider;

/// Render a line chart with a gradient shadow under the curve.
#[derive(Parser, Debug)]
#[command(name = "linechart-demo")]
#[command(version)]
#[command(about = "Render a line chart with a gradient shadow", long_about = None)]
struct Cli {
    /// Seed for the sample data (random each run when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of sample points
    #[arg(long, default_value_t = linechart_core::data::SAMPLE_COUNT)]
    count: usize,

    /// Read x,y points from a CSV file instead of sampling
    #[arg(long, conflicts_with_all = ["seed", "count"])]
    csv: Option<PathBuf>,

    /// Canvas width in pixels
    #[arg(long, default_value_t = linechart_core::types::WIDTH)]
    width: f32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = linechart_core::types::HEIGHT)]
    height: f32,

    /// Pixels per dp
    #[arg(long)]
    density: Option<f32>,

    /// Built-in style preset
    #[arg(long, default_value = "shadow")]
    style: String,

    /// JSON style file (overrides --style)
    #[arg(long)]
    style_file: Option<PathBuf>,

    /// PNG output path
    #[arg(short, long, default_value = "target/out/linechart.png")]
    out: PathBuf,

    /// Also write an SVG to this path
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Skip PNG output
    #[arg(long)]
    no_png: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let size = CanvasSize::try_new(cli.width, cli.height)?;
    let style = load_style(&cli)?;
    let mut provider = make_provider(&cli)?;

    let chart = LineChart::from_provider(provider.as_mut(), style);
    log::info!("Loaded {} points", chart.series.len());
    if chart.series.is_empty() {
        log::warn!("no points; rendering axes only");
    }

    let commands = chart.render(size);

    if !cli.no_png {
        SkiaRenderer::new(chart.style.background)
            .render_to_png(&commands, size, &cli.out)
            .with_context(|| format!("writing {}", cli.out.display()))?;
        log::info!("Wrote {}", cli.out.display());
    }
    if let Some(path) = &cli.svg {
        svg::write_svg(path, &commands, size, Some(chart.style.background))
            .with_context(|| format!("writing {}", path.display()))?;
        log::info!("Wrote {}", path.display());
    }
    Ok(())
}

fn load_style(cli: &Cli) -> Result<ChartStyle> {
    let style = match &cli.style_file {
        Some(path) => ChartStyle::from_json_file(path)
            .with_context(|| format!("loading style {}", path.display()))?,
        None => theme::find(&cli.style),
    };
    Ok(match cli.density {
        Some(d) => style.with_density(d),
        None => style,
    })
}

fn make_provider(cli: &Cli) -> Result<Box<dyn DataProvider>> {
    if let Some(path) = &cli.csv {
        log::info!("Using input file: {}", path.display());
        return Ok(Box::new(CsvDataProvider::open(path)?));
    }
    let random = match cli.seed {
        Some(seed) => RandomDataProvider::seeded(seed),
        None => RandomDataProvider::new(),
    };
    Ok(Box::new(random.with_count(cli.count)))
}
