use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::{bail, Result};
use serde::Serialize;

use pagedots_core::{
    AnimationStyle, AppConfig, FrameState, IndicatorConfig, MeasureSpec, PageIndicator,
};
use pagedots_tui::pager::{Pager, PagerEvent};

/// Upper bound on sampled frames, in case of a pathological duration
const MAX_FRAMES: usize = 10_000;

/// Command line overrides for a trace run
#[derive(Debug, Clone)]
pub struct TraceOptions {
    pub style: Option<AnimationStyle>,
    pub count: Option<i64>,
    pub from: i64,
    pub to: i64,
    pub swipe: bool,
    pub duration_ms: Option<u64>,
    pub fps: u32,
}

/// One sampled frame
#[derive(Debug, Clone, Serialize)]
pub struct TraceRecord {
    pub t_ms: u64,
    pub selected: usize,
    pub selecting: usize,
    /// Pager scroll position in pages, for swipes only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scroll: Option<f32>,
    pub frame: FrameState,
}

pub fn run(config: &AppConfig, options: &TraceOptions) -> Result<()> {
    if options.fps == 0 {
        bail!("--fps must be positive");
    }

    let records = if options.swipe {
        trace_swipe(config, options)
    } else {
        trace_select(config, options)
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for record in &records {
        writeln!(out, "{}", serde_json::to_string(record)?)?;
    }

    tracing::debug!("Traced {} frames", records.len());
    Ok(())
}

fn indicator_config(
    config: &AppConfig,
    options: &TraceOptions,
    interactive: bool,
) -> IndicatorConfig {
    let mut indicator = config.indicator.clone();
    if let Some(style) = options.style {
        indicator.style = style;
    }
    if let Some(count) = options.count {
        indicator.count = count;
    }
    if let Some(duration_ms) = options.duration_ms {
        indicator.animation_duration_ms = duration_ms;
    }
    indicator.selected = options.from;
    indicator.interactive = interactive;
    indicator
}

/// Build an indicator sized to its own intrinsic dimensions
fn build_indicator(config: &IndicatorConfig) -> PageIndicator {
    let mut indicator = PageIndicator::new(config);
    let (width, height) = indicator.measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified);
    indicator.set_view_size(width, height);
    indicator
}

fn frame_step(fps: u32) -> Duration {
    Duration::from_secs(1) / fps.max(1)
}

fn record(indicator: &PageIndicator, elapsed: Duration, scroll: Option<f32>) -> TraceRecord {
    let state = indicator.selection_state();
    TraceRecord {
        t_ms: elapsed.as_millis() as u64,
        selected: state.selected,
        selecting: state.selecting,
        scroll,
        frame: *indicator.frame(),
    }
}

/// Sample a timed transition started by `select(to)`
pub fn trace_select(config: &AppConfig, options: &TraceOptions) -> Vec<TraceRecord> {
    let mut indicator = build_indicator(&indicator_config(config, options, false));
    let step = frame_step(options.fps);
    let start = Instant::now();

    indicator.select_at(options.to, start);
    let mut records = vec![record(&indicator, Duration::ZERO, None)];

    let mut elapsed = Duration::ZERO;
    while indicator.needs_tick() && records.len() < MAX_FRAMES {
        elapsed += step;
        indicator.tick_at(start + elapsed);
        records.push(record(&indicator, elapsed, None));
    }

    records
}

/// Sample an interactive transition driven by a simulated page swipe
pub fn trace_swipe(config: &AppConfig, options: &TraceOptions) -> Vec<TraceRecord> {
    let mut indicator = build_indicator(&indicator_config(config, options, true));
    let mut pager = Pager::new(indicator.count(), config.pager.clone());
    pager.set_current(indicator.selection());

    let step = frame_step(options.fps);
    let start = Instant::now();
    pager.swipe_to_at(options.to.max(0) as usize, start);

    let mut records = Vec::new();
    let mut elapsed = Duration::ZERO;
    loop {
        for event in pager.update_at(start + elapsed) {
            if let PagerEvent::Scrolled { position, offset } = event {
                indicator.on_scroll(position, offset);
            }
        }
        records.push(record(&indicator, elapsed, Some(pager.scroll_position())));

        if !pager.is_animating() || records.len() >= MAX_FRAMES {
            break;
        }
        elapsed += step;
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(style: AnimationStyle, swipe: bool) -> TraceOptions {
        TraceOptions {
            style: Some(style),
            count: Some(4),
            from: 0,
            to: 2,
            swipe,
            duration_ms: Some(100),
            fps: 50,
        }
    }

    #[test]
    fn test_select_trace_ends_on_target() {
        let records = trace_select(&AppConfig::default(), &options(AnimationStyle::Slide, false));
        // One frame at start plus one per 20ms step
        assert_eq!(records.len(), 6);
        let first = &records[0];
        let last = records.last().unwrap();
        assert_eq!(first.t_ms, 0);
        assert!(first.frame.slide_x < last.frame.slide_x);
        assert_eq!(last.selected, 2);
        assert_eq!(last.t_ms, 100);
    }

    #[test]
    fn test_none_style_trace_is_single_frame() {
        let records = trace_select(&AppConfig::default(), &options(AnimationStyle::None, false));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].selected, 2);
    }

    #[test]
    fn test_swipe_trace_commits_selection() {
        let records = trace_swipe(&AppConfig::default(), &options(AnimationStyle::Worm, true));
        let last = records.last().unwrap();
        assert_eq!(last.selected, 2);
        assert_eq!(last.scroll, Some(2.0));
        assert!(records
            .iter()
            .all(|r| r.frame.worm_left_x <= r.frame.worm_right_x));
    }

    #[test]
    fn test_record_serializes_hex_colors() {
        let records = trace_select(&AppConfig::default(), &options(AnimationStyle::Color, false));
        let json = serde_json::to_string(&records[0]).unwrap();
        assert!(json.contains("\"color\":\"#"));
        assert!(!json.contains("scroll"));
    }
}
