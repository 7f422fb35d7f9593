// SPDX-License-Identifier: (LGPL-2.1 OR BSD-2-Clause)
use clap::Parser;
use wattboard::format::{color_for, group_thousands, key_label, tick_label, PALETTE};
use wattboard::Total;

const PLOTLY_JS: &str = "https://cdn.plot.ly/plotly-2.12.1.min.js";

#[derive(Debug, Parser)]
#[clap(version)]
struct Cli {
    /// Path to the readings (no header), '-' for stdin, or the built-in sample
    #[arg(short, long)]
    input_file: Option<std::path::PathBuf>,
    /// Path to an (html) output file for the dashboard
    #[arg(short, long, default_value = "wb.html")]
    output_file: std::path::PathBuf,
    /// Fail instead of plotting lines with missing fields or non-numeric watts
    #[arg(long)]
    strict: bool,
    /// Height of each chart, in pixels
    #[arg(long, default_value = "300")]
    chart_height: usize,
    /// Verbose debug output
    #[arg(long, short)]
    verbose: bool,
}

fn labels(totals: &[Total]) -> Vec<String> {
    totals
        .iter()
        .map(|t| key_label(t.key.as_deref()).to_string())
        .collect()
}

fn values(totals: &[Total]) -> Vec<f64> {
    totals.iter().map(|t| t.total).collect()
}

fn layout(cfg: &wattboard::Cfg) -> plotly::Layout {
    plotly::Layout::new().height(cfg.chart_height)
}

fn timeline_plot(timeline: &[Total], cfg: &wattboard::Cfg) -> plotly::Plot {
    let ticks: Vec<String> = labels(timeline)
        .iter()
        .map(|ts| tick_label(ts).to_string())
        .collect();
    let x_axis = plotly::layout::Axis::new()
        .type_(plotly::layout::AxisType::Category)
        .tick_values((0..ticks.len()).map(|i| i as f64).collect())
        .tick_text(ticks);
    let t = plotly::Scatter::new(labels(timeline), values(timeline))
        .mode(plotly::common::Mode::LinesMarkers)
        .line(plotly::common::Line::new().color(PALETTE[0]).width(2.0))
        .name("total");
    let mut p = plotly::Plot::new();
    p.set_layout(layout(cfg).x_axis(x_axis));
    p.add_trace(t);
    p
}

fn device_plot(by_device: &[Total], cfg: &wattboard::Cfg) -> plotly::Plot {
    let colors: Vec<&'static str> = (0..by_device.len()).map(color_for).collect();
    let t = plotly::Bar::new(labels(by_device), values(by_device))
        .marker(plotly::common::Marker::new().color_array(colors))
        .name("watts");
    let mut p = plotly::Plot::new();
    p.set_layout(layout(cfg));
    p.add_trace(t);
    p
}

fn room_plot(by_room: &[Total], cfg: &wattboard::Cfg) -> plotly::Plot {
    let t = plotly::Pie::new(values(by_room))
        .labels(labels(by_room))
        .name("watts");
    let mut p = plotly::Plot::new();
    p.set_layout(layout(cfg).colorway(PALETTE.to_vec()));
    p.add_trace(t);
    p
}

fn section(heading: &str, div_id: &str, plot: &plotly::Plot) -> String {
    format!(
        "<section>\n<h2>{heading}</h2>\n{}\n</section>",
        plot.to_inline_html(Some(div_id))
    )
}

fn page(d: &wattboard::Dashboard, cfg: &wattboard::Cfg) -> String {
    let sections = [
        section("Energy Over Time", "timeline", &timeline_plot(&d.timeline, cfg)),
        section("Energy Use by Device", "by-device", &device_plot(&d.by_device, cfg)),
        section("Energy Use by Room", "by-room", &room_plot(&d.by_room, cfg)),
    ];
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8" />
<title>Smart Home Energy Dashboard</title>
<script src="{PLOTLY_JS}"></script>
</head>
<body>
<header>
<h1>Smart Home Energy Dashboard</h1>
<span>Total Energy: {} W</span>
</header>
{}
</body>
</html>
"#,
        group_thousands(d.total_watts),
        sections.join("\n")
    )
}

fn plot_from_text(text: &str, cfg: &wattboard::Cfg) -> Result<String, wattboard::Error> {
    let d = wattboard::Dashboard::try_from_text(text, cfg)?;
    log::debug!(
        "Plotting {} timestamps, {} devices, {} rooms",
        d.timeline.len(),
        d.by_device.len(),
        d.by_room.len()
    );
    Ok(page(&d, cfg))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let opts = Cli::parse();
    let level = if opts.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    let cfg = wattboard::Cfg {
        strict: opts.strict,
        chart_height: opts.chart_height,
    }
    .validate()?;
    let text = wattboard::source::read_text(opts.input_file.as_deref())?;
    std::fs::write(&opts.output_file, plot_from_text(&text, &cfg)?)?;
    log::info!("Wrote {}", opts.output_file.display());
    Ok(())
}
