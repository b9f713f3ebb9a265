//! Sentiment Chart Component
//!
//! Aggregate bar chart over the cached history, drawn on an HTML5 canvas.
//! Each redraw animates the bars from zero to their final counts with a
//! time-boxed interpolation sampled from the monotonic clock; restarting
//! cancels the in-flight run and the final frame always lands on the exact
//! counts, so the end state never depends on frame timing.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::anim::{ease, AnimationHandle};
use crate::sentiment::{sentiment_counts, ALL_SENTIMENTS};
use crate::state::session::Session;

/// Bar animation length.
const ANIMATION_MS: f64 = 1500.0;

/// Aggregate sentiment chart component
#[component]
pub fn SentimentChart() -> impl IntoView {
    let session = use_context::<Session>().expect("Session not provided");
    let canvas_ref = create_node_ref::<html::Canvas>();
    let animation = AnimationHandle::new();

    // Redraw (and re-animate) whenever the cached history changes.
    let animation_for_draw = animation.clone();
    create_effect(move |_| {
        let counts = sentiment_counts(&session.history.get());
        if let Some(canvas) = canvas_ref.get() {
            animation_for_draw.start(ANIMATION_MS, move |t| {
                draw_bars(&canvas, &counts, ease(t));
            });
        }
    });

    on_cleanup(move || animation.cancel());

    view! {
        <div class="relative">
            <canvas
                node_ref=canvas_ref
                width="800"
                height="400"
                class="w-full h-64 md:h-96 rounded-lg"
            />

            <ChartLegend />
        </div>
    }
}

/// Legend with per-label counts
#[component]
fn ChartLegend() -> impl IntoView {
    let session = use_context::<Session>().expect("Session not provided");

    view! {
        <div class="flex justify-center flex-wrap gap-4 mt-4">
            {move || {
                let counts = sentiment_counts(&session.history.get());
                ALL_SENTIMENTS
                    .into_iter()
                    .zip(counts)
                    .map(|(sentiment, count)| {
                        view! {
                            <div class="flex items-center space-x-2">
                                <div
                                    class="w-3 h-3 rounded-full"
                                    style=format!("background-color: {}", sentiment.color())
                                />
                                <span class="text-sm text-gray-300">
                                    {format!("{}: {}", sentiment.label(), count)}
                                </span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

/// Bar height in pixels for `count` at `progress` of the animation.
fn bar_height(count: u32, max_count: f64, chart_height: f64, progress: f64) -> f64 {
    count as f64 * progress / max_count * chart_height
}

/// Draw the three bars at `progress` in [0, 1] of their final heights.
fn draw_bars(canvas: &HtmlCanvasElement, counts: &[u32; 3], progress: f64) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 60.0;
    let margin_right = 20.0;
    let margin_top = 30.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    let max_count = counts.iter().copied().max().unwrap_or(0).max(1) as f64;

    // Horizontal grid lines and y-axis labels
    ctx.set_stroke_style(&"#374151".into()); // gray-700
    ctx.set_line_width(1.0);
    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = max_count - (i as f64 / 5.0) * max_count;
        ctx.set_fill_style(&"#9ca3af".into()); // gray-400
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format!("{:.0}", value), 5.0, y + 4.0);
    }

    // Title
    ctx.set_fill_style(&"#e5e7eb".into());
    ctx.set_font("14px sans-serif");
    let _ = ctx.fill_text("Sentiment of all reviews", margin_left, 18.0);

    // Bars
    let slot = chart_width / 3.0;
    let bar_width = slot * 0.5;
    for (i, (sentiment, count)) in ALL_SENTIMENTS
        .into_iter()
        .zip(counts.iter().copied())
        .enumerate()
    {
        let bar = bar_height(count, max_count, chart_height, progress);
        let x = margin_left + i as f64 * slot + (slot - bar_width) / 2.0;
        let y = margin_top + chart_height - bar;

        ctx.set_fill_style(&sentiment.color().into());
        ctx.fill_rect(x, y, bar_width, bar);

        // X-axis label
        ctx.set_fill_style(&"#9ca3af".into());
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(sentiment.label(), x + bar_width / 2.0 - 20.0, height - 10.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn final_frame_reaches_exact_heights() {
        let chart_height = 330.0;
        assert_eq!(bar_height(5, 5.0, chart_height, 1.0), chart_height);
        assert_eq!(bar_height(3, 5.0, chart_height, 1.0), chart_height * 3.0 / 5.0);
        assert_eq!(bar_height(2, 5.0, chart_height, 1.0), chart_height * 2.0 / 5.0);
    }

    #[test]
    fn bars_start_at_zero() {
        assert_eq!(bar_height(5, 5.0, 330.0, 0.0), 0.0);
    }
}
