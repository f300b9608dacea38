//! Chart Component
//!
//! Pie, doughnut and bar charts drawn on HTML5 Canvas from the core's
//! chart configurations.

use folio::charts::{growth_tick_label, ChartConfig, ChartId, ChartKind, LegendPosition};
use folio::AppContext;
use leptos::*;
use std::f64::consts::{PI, TAU};
use std::time::Duration;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::web::canvas_by_id;

/// Scale the entry animation runs over; the animator emits whole numbers
const PROGRESS_STEPS: f64 = 1000.0;

/// Section wrapping each chart
pub fn section_id(id: ChartId) -> &'static str {
    match id {
        ChartId::Portfolio => "portfolio-chart-section",
        ChartId::Allocation => "allocation-chart-section",
        ChartId::Growth => "projection-chart-section",
    }
}

/// Chart card: title, canvas and legend
#[component]
pub fn ChartCard(
    /// Chart to draw
    config: ChartConfig,
    #[prop(into)]
    title: String,
) -> impl IntoView {
    let legend_class = match config.legend {
        LegendPosition::Right => "md:flex md:items-start md:space-x-6",
        _ => "",
    };

    view! {
        <section id={section_id(config.id)} class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">{title}</h2>
            <div class=legend_class>
                <canvas
                    id={config.canvas}
                    width="600"
                    height="400"
                    class="w-full h-64 md:h-96 rounded-lg"
                />
                <ChartLegend config=config />
            </div>
        </section>
    }
}

/// Legend entries with the point's tooltip on hover
#[component]
fn ChartLegend(config: ChartConfig) -> impl IntoView {
    if config.legend == LegendPosition::Hidden {
        return view! {}.into_view();
    }

    let entries: Vec<(String, String, String)> = config
        .legend_labels
        .iter()
        .enumerate()
        .map(|(idx, label)| {
            let color = config.colors.get(idx).cloned().unwrap_or_default();
            let hover = config
                .tooltip(idx)
                .map(|t| t.lines.join("\n"))
                .unwrap_or_default();
            (label.clone(), color, hover)
        })
        .collect();

    view! {
        <div class="flex flex-wrap gap-3 mt-4">
            {entries
                .into_iter()
                .map(|(label, color, hover)| view! {
                    <div class="flex items-center space-x-2" title=hover>
                        <div
                            class="w-3 h-3 rounded-full"
                            style=format!("background-color: {}", color)
                        />
                        <span class="text-sm text-gray-300">{label}</span>
                    </div>
                })
                .collect_view()}
        </div>
    }
    .into_view()
}

/// Start the entry animation of every mounted chart
pub fn animate_charts(ctx: &AppContext) {
    for config in ctx.charts() {
        let Some(canvas) = canvas_by_id(config.canvas) else {
            web_sys::console::warn_1(&format!("Canvas {} not found", config.canvas).into());
            continue;
        };

        let canvas_id = config.canvas;
        let duration = Duration::from_millis(config.animation.duration_ms);
        let handle = ctx
            .animator()
            .clone()
            .with_easing(config.animation.easing)
            .animate(0.0, PROGRESS_STEPS, duration, move |step| {
                draw_chart(&canvas, &config, step / PROGRESS_STEPS);
            });
        ctx.track_animation(canvas_id, handle);
    }
}

/// Draw the chart at `progress` through its entry animation
fn draw_chart(canvas: &HtmlCanvasElement, config: &ChartConfig, progress: f64) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    match config.kind {
        ChartKind::Pie | ChartKind::Doughnut => draw_pie(&ctx, config, progress, width, height),
        ChartKind::Bar => draw_bars(&ctx, config, progress, width, height),
    }
}

fn draw_pie(
    ctx: &CanvasRenderingContext2d,
    config: &ChartConfig,
    progress: f64,
    width: f64,
    height: f64,
) {
    let total = config.series.total();
    if total <= 0.0 {
        return;
    }

    let cx = width / 2.0;
    let cy = height / 2.0;
    let radius = width.min(height) / 2.0 - 10.0;

    let sweep_total = if config.animation.animate_rotate {
        TAU * progress
    } else {
        TAU
    };

    // Start at 12 o'clock
    let mut angle = -PI / 2.0;
    for (idx, point) in config.series.points().iter().enumerate() {
        let sweep = point.value / total * sweep_total;
        let color = config.colors.get(idx).map(String::as_str).unwrap_or("#9ca3af");

        ctx.begin_path();
        ctx.move_to(cx, cy);
        let _ = ctx.arc(cx, cy, radius, angle, angle + sweep);
        ctx.close_path();
        ctx.set_fill_style(&color.into());
        ctx.fill();
        ctx.set_stroke_style(&config.border_color.into());
        ctx.set_line_width(config.border_width as f64);
        ctx.stroke();

        angle += sweep;
    }

    if let Some(cutout) = config.cutout_percent {
        ctx.begin_path();
        let _ = ctx.arc(cx, cy, radius * cutout as f64 / 100.0, 0.0, TAU);
        ctx.set_fill_style(&"#1f2937".into());
        ctx.fill();
    }
}

fn draw_bars(
    ctx: &CanvasRenderingContext2d,
    config: &ChartConfig,
    progress: f64,
    width: f64,
    height: f64,
) {
    // Margins
    let margin_left = 70.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    let points = config.series.points();
    if points.is_empty() {
        return;
    }

    // Round the axis up to a multiple of 5 so ticks land on whole values
    let max = config.series.max().unwrap_or(1.0).max(1.0);
    let top = (max / 5.0).ceil() * 5.0;

    ctx.set_stroke_style(&"#374151".into()); // gray-700
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");

    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = top - (i as f64 / 5.0) * top;
        ctx.set_fill_style(&"#9ca3af".into()); // gray-400
        let _ = ctx.fill_text(&growth_tick_label(value), 5.0, y + 4.0);
    }

    let slot = chart_width / points.len() as f64;
    let bar_width = slot * 0.7;

    for (idx, point) in points.iter().enumerate() {
        let bar_height = point.value / top * chart_height * progress;
        let x = margin_left + idx as f64 * slot + (slot - bar_width) / 2.0;
        let y = margin_top + chart_height - bar_height;
        let color = config.colors.get(idx).map(String::as_str).unwrap_or("#9ca3af");

        ctx.set_fill_style(&color.into());
        ctx.fill_rect(x, y, bar_width, bar_height);
        ctx.set_stroke_style(&config.border_color.into());
        ctx.set_line_width(config.border_width as f64);
        ctx.stroke_rect(x, y, bar_width, bar_height);

        // Every other year keeps the axis readable
        if idx % 2 == 0 {
            ctx.set_fill_style(&"#9ca3af".into());
            let _ = ctx.fill_text(&point.label, x - 4.0, height - 10.0);
        }
    }
}
