// File: crates/chart-render-skia/tests/snapshot.rs
// Purpose: Golden snapshots with bless flow.
// Behavior:
// - Renders deterministic charts to PNG bytes with labels off.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.
// - Goldens under tests/__snapshots__ are generated locally and are not committed;
//   bless once per machine since font and Skia builds affect pixels.

use chart_core::config::{BarChartConfig, PieChartConfig, RadarConfig, StackedBarConfig};
use chart_core::{bar, parse_config, pie, radar, stacked_bar};
use chart_render_skia::{Render, RenderOptions};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(name: &str, bytes: &[u8]) {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name);
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(&path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(&path).expect("read snapshot");
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn opts() -> RenderOptions {
    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // deterministic
    opts
}

#[test]
fn golden_bar() {
    let config: BarChartConfig =
        parse_config("categories: [A, B, C, D]\nvalues: [4, 9, 2, 6]\nbarColors: ['#5470c6', '#ee6666']\n").unwrap();
    write_or_compare("bar.png", &bar::build_option(&config).render_to_png_bytes(&opts()).unwrap());
}

#[test]
fn golden_stacked_bar() {
    let config: StackedBarConfig = parse_config(
        "teams:\n  - {name: A, highest: 5, rest: 9, color: '#132257'}\n  - {name: B, highest: 3, rest: 4, color: '#ef0107'}\n",
    )
    .unwrap();
    write_or_compare("stacked_bar.png", &stacked_bar::build_option(&config).render_to_png_bytes(&opts()).unwrap());
}

#[test]
fn golden_pie() {
    let config: PieChartConfig = parse_config("data: [{label: a, value: 2}, {label: b, value: 1}, {label: c, value: 1}]").unwrap();
    write_or_compare("pie.png", &pie::build_option(&config).render_to_png_bytes(&opts()).unwrap());
}

#[test]
fn golden_radar() {
    let config: RadarConfig = parse_config(
        "indicators: [{name: a, max: 10}, {name: b, max: 10}, {name: c, max: 10}, {name: d, max: 10}, {name: e, max: 10}]\n\
         datasets: [{label: x, values: [8, 6, 9, 4, 7]}, {label: y, values: [5, 9, 3, 8, 6], lineColor: '#ee6666'}]\n",
    )
    .unwrap();
    write_or_compare("radar.png", &radar::build_option(&config).render_to_png_bytes(&opts()).unwrap());
}
