// File: crates/area-window/src/main.rs
// Summary: Windowed demo: renders the area view to a window via RGBA blit (CPU) using
// winit + softbuffer, and animates the visible window on key presses.
// Keys: 1 = all quotes, 2 = last 90 days, 3 = last 30 days, 4 = last 7 days,
//       S toggles animated/snap updates.

use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use area_core::render::Color;
use area_core::{AreaStyle, AreaView, FrameOutcome, FrameScheduler, Quote, RenderOptions};
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use env_logger::Env;
use log::{error, info};
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    // Arg: CSV path (supports .csv/.cvs swap); synthetic data otherwise
    let quotes: Arc<[Quote]> = match std::env::args().nth(1) {
        Some(raw) => {
            let path = resolve_path_simple(&raw);
            load_quotes_csv(&path).with_context(|| format!("failed to load '{}'", path.display()))?
        }
        None => synthetic_quotes(365),
    }
    .into();
    let (first, last) = match (quotes.first(), quotes.last()) {
        (Some(f), Some(l)) => (f.date, l.date),
        _ => anyhow::bail!("no quotes loaded"),
    };
    info!("Loaded {} quotes ({first} .. {last})", quotes.len());

    let scheduler = FrameScheduler::new();
    let mut view = AreaView::new(scheduler.clone()).with_style(AreaStyle::dark());
    view.set_values(Arc::clone(&quotes), false, first);

    // Window + softbuffer setup
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Quote Area — Window Demo")
        .with_inner_size(winit::dpi::LogicalSize::new(960.0, 480.0))
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow::anyhow!("softbuffer context: {e:?}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow::anyhow!("softbuffer surface: {e:?}"))?;

    let clock = Instant::now();
    let mut size = window.inner_size();
    let mut animated = true;

    let mut draw = move |view: &AreaView, w: u32, h: u32| -> Result<()> {
        let (Some(nw), Some(nh)) = (NonZeroU32::new(w), NonZeroU32::new(h)) else {
            return Ok(());
        };
        surface
            .resize(nw, nh)
            .map_err(|e| anyhow::anyhow!("resize: {e:?}"))?;

        let mut opts = RenderOptions::default();
        opts.width = w as i32;
        opts.height = h as i32;
        opts.background = Color::from_argb(255, 18, 18, 20);

        let (rgba, _, _, _) = view.render_to_rgba8(&opts)?;
        let mut frame = surface.buffer_mut().map_err(|e| anyhow::anyhow!("buffer: {e:?}"))?;
        for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)) {
            let (r, g, b) = (px[0] as u32, px[1] as u32, px[2] as u32);
            *dst = (r << 16) | (g << 8) | b;
        }
        frame.present().map_err(|e| anyhow::anyhow!("present: {e:?}"))?;
        Ok(())
    };

    event_loop.run(move |event, _, cf| {
        // keep polling only while an animation holds a frame link
        *cf = if scheduler.wants_frames() { ControlFlow::Poll } else { ControlFlow::Wait };
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *cf = ControlFlow::Exit,
                WindowEvent::Resized(new_size) => {
                    size = new_size;
                    window.request_redraw();
                }
                WindowEvent::KeyboardInput {
                    input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(key), .. },
                    ..
                } => {
                    let start = match key {
                        VirtualKeyCode::Key1 => Some(first),
                        VirtualKeyCode::Key2 => Some(last - Duration::days(90)),
                        VirtualKeyCode::Key3 => Some(last - Duration::days(30)),
                        VirtualKeyCode::Key4 => Some(last - Duration::days(7)),
                        VirtualKeyCode::S => {
                            animated = !animated;
                            info!("animated updates: {animated}");
                            None
                        }
                        _ => None,
                    };
                    if let Some(start) = start {
                        view.set_values(Arc::clone(&quotes), animated, start.max(first));
                        *cf = ControlFlow::Poll;
                    }
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                let now = scheduler.tick(clock.elapsed().as_secs_f64());
                if view.on_frame(now) == FrameOutcome::Finished {
                    info!("animation finished");
                }
                if view.take_needs_display() {
                    window.request_redraw();
                }
            }
            Event::RedrawRequested(_) => {
                if let Err(e) = draw(&view, size.width, size.height) {
                    error!("draw failed: {e:#}");
                }
            }
            _ => {}
        }
    });
}

/// Resolve path, trying .csv/.cvs swap if needed.
fn resolve_path_simple(raw: &str) -> PathBuf {
    let p = Path::new(raw);
    if p.exists() { return p.to_path_buf(); }
    let ext = p.extension().map(|e| e.to_string_lossy().to_lowercase());
    let mut alt = p.to_path_buf();
    match ext.as_deref() {
        Some("cvs") => { alt.set_extension("csv"); }
        Some("csv") => { alt.set_extension("cvs"); }
        _ => return p.to_path_buf(),
    }
    if alt.exists() { alt } else { p.to_path_buf() }
}

fn load_quotes_csv(path: &Path) -> Result<Vec<Quote>> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_path(path)?;
    let headers = rdr.headers()?.iter().map(|h| h.trim().to_lowercase()).collect::<Vec<_>>();
    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_date = idx(&["date", "time", "timestamp", "open_time", "datetime"]).context("no date column")?;
    let i_close = idx(&["close", "c", "adj_close", "close_price"]).context("no close column")?;

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let date = rec.get(i_date).and_then(parse_date);
        let close = rec.get(i_close).and_then(|s| s.trim().parse::<f64>().ok());
        if let (Some(date), Some(close)) = (date, close) { out.push(Quote::new(date, close)); }
    }
    out.sort_by_key(|q| q.date);
    Ok(out)
}

fn parse_date(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(n) = s.parse::<i64>() {
        if n > 10_i64.pow(12) { return Utc.timestamp_millis_opt(n).single(); }
        return Utc.timestamp_opt(n, 0).single();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) { return Some(dt.with_timezone(&Utc)); }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc())
}

fn synthetic_quotes(days: i64) -> Vec<Quote> {
    let base = 1_704_067_200; // 2024-01-01
    (0..days)
        .filter_map(|i| {
            let x = i as f64;
            let close = 40.0 + (x * 0.05).sin() * 9.0 + (x * 0.23).sin() * 2.0 + x * 0.02;
            Quote::from_epoch(base + i * 86_400, close)
        })
        .collect()
}
