// File: crates/area-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders deterministic area charts (snapped and mid-animation) to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use area_core::{AreaStyle, AreaView, FrameScheduler, Quote, RenderOptions};
use chrono::{DateTime, Utc};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(path: &std::path::Path, bytes: &[u8]) {
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn sample_quotes() -> Vec<Quote> {
    (0..30)
        .map(|i| {
            let close = 100.0 + (i as f64 * 0.4).sin() * 8.0 + i as f64 * 0.3;
            Quote::from_epoch(1_704_067_200 + i * 86_400, close).unwrap()
        })
        .collect()
}

fn date_of(q: &[Quote], i: usize) -> DateTime<Utc> { q[i].date }

fn opts() -> RenderOptions {
    let mut o = RenderOptions::default();
    o.width = 320;
    o.height = 160;
    o
}

fn snap_path(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name)
}

#[test]
fn golden_snapped_area() {
    let q = sample_quotes();
    let mut view = AreaView::new(FrameScheduler::new()).with_style(AreaStyle::light());
    view.set_values(q.clone(), false, date_of(&q, 0));
    let bytes = view.render_to_png_bytes(&opts()).expect("render bytes");
    write_or_compare(&snap_path("snapped_area.png"), &bytes);
}

#[test]
fn golden_mid_animation_area() {
    let q = sample_quotes();
    let mut view = AreaView::new(FrameScheduler::new()).with_style(AreaStyle::dark());
    view.set_values(q.clone(), false, date_of(&q, 0));
    view.set_values(q.clone(), true, date_of(&q, 20));
    view.on_frame(10.0);
    view.on_frame(10.5);
    let bytes = view.render_to_png_bytes(&opts()).expect("render bytes");
    write_or_compare(&snap_path("mid_animation_area.png"), &bytes);
}
