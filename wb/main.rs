// SPDX-License-Identifier: (LGPL-2.1 OR BSD-2-Clause)
use clap::Parser;
mod outf;
extern crate wattboard;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Columnar,
    Csv,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum Table {
    Readings,
    Device,
    Room,
    Timeline,
    All,
}

impl Table {
    fn name(self) -> &'static str {
        use Table::*;
        match self {
            Readings => "readings",
            Device => "device",
            Room => "room",
            Timeline => "timeline",
            All => "all",
        }
    }
}

#[derive(Debug, Parser)]
#[clap(
    version,
    long_about = r#"
Smart home power readings, summed per device, per room, and over time.

Input is one reading per line, without a header:
    timestamp,room,device,watts
e.g.
    2025-10-01 00:00:00,Living Room,TV,89

Blank lines are skipped and every field is trimmed. Lines with the wrong
number of fields, or with watts that aren't a number, are kept and degrade
their totals (see '--check' and '--strict').

The same input may be drawn as an HTML dashboard with `wb-plot`:
```sh
wb -i readings.csv
wb-plot -i readings.csv -o dashboard.html
```
"#
)]
struct Cli {
    /// Path to the readings, '-' for stdin, or the built-in sample if not given
    #[arg(long, short)]
    input_file: Option<std::path::PathBuf>,
    /// Which table to show
    ///
    /// - readings  every parsed line
    /// - device    watts summed per device
    /// - room      watts summed per room
    /// - timeline  watts summed per timestamp
    /// - all       timeline, device, and room
    #[arg(long, short, default_value = "all", verbatim_doc_comment)]
    table: Table,
    /// Some output styles are better for humans (columnar), others for machines
    ///
    /// - columnar
    ///   Kitchen              3153
    /// - csv
    ///   room,Kitchen,3153.0
    /// - json
    ///   {"key":"Kitchen","total":3153.0}
    ///
    /// Totals that aren't numbers are written as "NaN", "Infinity" or
    /// "-Infinity", and a missing key as null (json) or empty (csv).
    #[arg(long, short = 'f', default_value = "columnar", verbatim_doc_comment)]
    output_format: OutputFormat,
    /// Write to this file, if present, or to standard output if not given
    #[arg(long, short = 'o')]
    output_file: Option<std::path::PathBuf>,
    /// Omit the header (column names, and the total in columnar output)
    ///
    /// Has no effect when the output format ('-f, --output-format') is json.
    #[arg(long, verbatim_doc_comment)]
    no_header: bool,
    /// Fail instead of summing lines with missing fields or non-numeric watts
    #[arg(long)]
    strict: bool,
    /// List the lines that would degrade the totals and exit
    #[arg(long, conflicts_with = "strict")]
    check: bool,
    /// Verbose debug output
    #[arg(long, short)]
    verbose: bool,
}

#[derive(serde::Serialize)]
struct TableRow<'a> {
    table: &'a str,
    key: Option<&'a str>,
    #[serde(serialize_with = "wattboard::format::serialize_watts")]
    total: f64,
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn tables_for(table: Table, d: &wattboard::Dashboard) -> Vec<(Table, &[wattboard::Total])> {
    use Table::*;
    match table {
        Device => vec![(Device, &d.by_device[..])],
        Room => vec![(Room, &d.by_room[..])],
        Timeline => vec![(Timeline, &d.timeline[..])],
        All => vec![
            (Timeline, &d.timeline[..]),
            (Device, &d.by_device[..]),
            (Room, &d.by_room[..]),
        ],
        Readings => vec![],
    }
}

fn show_columnar(opts: &Cli, d: &wattboard::Dashboard) {
    use wattboard::format::{group_thousands, key_label};
    if !opts.no_header {
        outf::outfprintln!("Total Energy: {} W", group_thousands(d.total_watts));
    }
    if opts.table == Table::Readings {
        if !opts.no_header {
            outf::outfprintln!("{:<20} {:<14} {:<14} {:<10}", "timestamp", "room", "device", "watts");
        }
        for r in &d.readings {
            let room = key_label(r.room());
            let device = key_label(r.device());
            outf::outfprintln!("{:<20} {room:<14} {device:<14} {:<10}", r.timestamp, r.watts);
        }
        return;
    }
    for (table, totals) in tables_for(opts.table, d) {
        if !opts.no_header {
            outf::outfprintln!("{:<20} {:<14}", table.name(), "total");
        }
        for t in totals {
            outf::outfprintln!("{:<20} {:<14}", key_label(t.key.as_deref()), t.total);
        }
    }
}

fn show_csv(opts: &Cli, d: &wattboard::Dashboard) -> Result<(), Box<dyn std::error::Error>> {
    let mut w = csv::WriterBuilder::new()
        .has_headers(!opts.no_header)
        .from_writer(vec![]);
    if opts.table == Table::Readings {
        for r in &d.readings {
            w.serialize(r)?;
        }
    } else {
        for (table, totals) in tables_for(opts.table, d) {
            for t in totals {
                w.serialize(TableRow {
                    table: table.name(),
                    key: t.key.as_deref(),
                    total: t.total,
                })?;
            }
        }
    }
    let bytes = w.into_inner().map_err(|e| e.into_error())?;
    let text = String::from_utf8(bytes)?;
    for line in text.lines() {
        outf::outfprintln!("{line}");
    }
    Ok(())
}

fn show_json(opts: &Cli, d: &wattboard::Dashboard) -> Result<(), Box<dyn std::error::Error>> {
    use Table::*;
    let s = match opts.table {
        All => serde_json::to_string(d)?,
        Readings => serde_json::to_string(&d.readings)?,
        Device => serde_json::to_string(&d.by_device)?,
        Room => serde_json::to_string(&d.by_room)?,
        Timeline => serde_json::to_string(&d.timeline)?,
    };
    outf::outfprintln!("{s}");
    Ok(())
}

/// Lists each issue on its own line. True when there were none.
fn show_issues(issues: &[wattboard::Issue]) -> bool {
    for issue in issues {
        outf::outfprintln!("{issue}");
    }
    issues.is_empty()
}

fn error_message(e: &dyn std::error::Error) -> String {
    format!("Error: {e}")
}

fn wb(opts: Cli) -> Result<std::process::ExitCode, Box<dyn std::error::Error>> {
    let text = wattboard::source::read_text(opts.input_file.as_deref())?;
    if opts.check {
        if show_issues(&wattboard::diagnose(&text)) {
            return Ok(std::process::ExitCode::SUCCESS);
        }
        return Ok(std::process::ExitCode::FAILURE);
    }
    let cfg = wattboard::Cfg {
        strict: opts.strict,
        ..wattboard::Cfg::default()
    };
    let d = wattboard::Dashboard::try_from_text(&text, &cfg)?;
    log::debug!(
        "{} readings, {} devices, {} rooms, {} timestamps",
        d.readings.len(),
        d.by_device.len(),
        d.by_room.len(),
        d.timeline.len()
    );
    match opts.output_format {
        OutputFormat::Columnar => show_columnar(&opts, &d),
        OutputFormat::Csv => show_csv(&opts, &d)?,
        OutputFormat::Json => show_json(&opts, &d)?,
    }
    Ok(std::process::ExitCode::SUCCESS)
}

fn main() -> std::process::ExitCode {
    let opts = Cli::parse();
    init_logging(opts.verbose);
    let r = match outf::init(&opts.output_file) {
        Ok(()) => wb(opts),
        Err(e) => Err(e.into()),
    };
    r.unwrap_or_else(|e| {
        eprintln!("{}", error_message(e.as_ref()));
        std::process::ExitCode::FAILURE
    })
}
