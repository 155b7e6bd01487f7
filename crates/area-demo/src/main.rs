// File: crates/area-demo/src/main.rs
// Summary: Loads a quote CSV, renders the full-range area chart, then steps an animated
// window change frame by frame and writes every redrawn frame to PNG.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use area_core::{style, AreaView, FrameOutcome, FrameScheduler, Model, Quote, RenderOptions};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use clap::Parser;
use env_logger::Env;
use log::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "area-demo", about = "Render a quote CSV as an animated area chart")]
struct Args {
    /// CSV with a date column and a close column. A synthetic series is used when omitted.
    input: Option<PathBuf>,
    /// Directory receiving the PNG files.
    #[arg(long, default_value = "target/out")]
    out_dir: PathBuf,
    #[arg(long, default_value_t = 640)]
    width: i32,
    #[arg(long, default_value_t = 320)]
    height: i32,
    /// Style preset: mono, dark, light, solarized.
    #[arg(long, default_value = "dark")]
    style: String,
    /// Length of the window animated to, counted back from the last quote.
    #[arg(long, default_value_t = 30)]
    window_days: i64,
    #[arg(long, default_value_t = 30)]
    fps: u32,
    #[arg(long, default_value_t = 1000)]
    duration_ms: u64,
    /// Enable debug logging.
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(if args.debug { "debug" } else { "info" }))
        .format_timestamp_secs()
        .init();

    let quotes = match &args.input {
        Some(raw) => {
            let (path, used_alt) = resolve_path(raw)?;
            info!("Using input file: {}", path.display());
            if used_alt {
                info!("  (extension swapped between .csv/.cvs)");
            }
            load_quotes_csv(&path).with_context(|| format!("failed to load CSV '{}'", path.display()))?
        }
        None => {
            info!("No input given; using a synthetic series");
            synthetic_quotes(180)
        }
    };
    let model = Model::new(quotes);
    let Some((first, last)) = model.date_span() else {
        anyhow::bail!("no quotes loaded; check headers/delimiter.");
    };
    info!("Loaded {} quotes ({first} .. {last})", model.len());
    let window_start = (last - chrono::Duration::days(args.window_days)).max(first);

    let mut opts = RenderOptions::default();
    opts.width = args.width;
    opts.height = args.height;

    let scheduler = FrameScheduler::new();
    let mut view = AreaView::new(scheduler.clone())
        .with_style(style::find(&args.style))
        .with_duration(Duration::from_millis(args.duration_ms));

    // 1) Full range, snapped
    view.set_values(model.values.clone(), false, first);
    view.take_needs_display();
    let out_full = args.out_dir.join("area_full.png");
    view.render_to_png(&opts, &out_full)?;
    info!("Wrote {}", out_full.display());

    // 2) Animate to the trailing window
    view.set_values(model.values, true, window_start);
    let frame_dt = 1.0 / args.fps.max(1) as f64;
    let mut frame = 0u32;
    let mut t = 0.0f64;
    while scheduler.wants_frames() {
        let outcome = view.on_frame(scheduler.tick(t));
        if view.take_needs_display() {
            let out = args.out_dir.join(format!("area_frame_{frame:03}.png"));
            view.render_to_png(&opts, &out)?;
            frame += 1;
        }
        if outcome == FrameOutcome::Finished {
            break;
        }
        t += frame_dt;
    }
    if let Some(w) = view.window() {
        info!("Wrote {frame} animation frames; final window min {:.4} max {:.4}", w.minimum, w.maximum);
    }
    Ok(())
}

/// Resolve path, trying .csv/.cvs swap if needed.
/// Returns (actual_path, used_alt)
fn resolve_path(raw: &Path) -> Result<(PathBuf, bool)> {
    if raw.exists() {
        return Ok((raw.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(raw) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", raw.display());
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => {
            alt.set_extension("csv");
            Some(alt)
        }
        "csv" => {
            alt.set_extension("cvs");
            Some(alt)
        }
        _ => None,
    }
}

/// Load (date, close) rows from a CSV with headers.
fn load_quotes_csv(path: &Path) -> Result<Vec<Quote>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    log::debug!("Headers: {:?}", headers);

    let idx = |names: &[&str]| -> Option<usize> {
        headers.iter().position(|h| names.contains(&h.as_str()))
    };
    let i_date = idx(&["date", "time", "timestamp", "open_time", "datetime"])
        .context("no date/time column")?;
    let i_close = idx(&["close", "c", "adj_close", "close_price"]).context("no close column")?;

    let mut out = Vec::new();
    let mut skipped = 0usize;
    for rec in rdr.records() {
        let rec = rec?;
        let date = rec.get(i_date).and_then(parse_date);
        let close = rec.get(i_close).and_then(|s| s.trim().parse::<f64>().ok());
        match (date, close) {
            (Some(date), Some(close)) => out.push(Quote::new(date, close)),
            _ => skipped += 1,
        }
    }
    if skipped > 0 {
        warn!("Skipped {skipped} rows without a parsable date/close");
    }
    out.sort_by_key(|q| q.date);
    Ok(out)
}

fn parse_date(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(n) = s.parse::<i64>() {
        // epoch ms vs epoch sec
        return if n > 10_i64.pow(12) {
            Utc.timestamp_millis_opt(n).single()
        } else {
            Utc.timestamp_opt(n, 0).single()
        };
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.and_utc());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

fn synthetic_quotes(days: i64) -> Vec<Quote> {
    let base = 1_704_067_200; // 2024-01-01
    (0..days)
        .filter_map(|i| {
            let x = i as f64;
            let close = 100.0 + (x * 0.11).sin() * 6.0 + (x * 0.037).cos() * 3.0 + x * 0.05;
            Quote::from_epoch(base + i * 86_400, close)
        })
        .collect()
}
