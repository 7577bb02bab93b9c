//! Chart Components
//!
//! Bar chart built from plain divs, and a fake / real line chart drawn on an
//! HTML5 canvas.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crisistruth::charts::{bar_fraction, line_max, line_paths, summarize, BarDatum, BarVariant, LinePoint};
use crisistruth::text::format_count;

const FAKE_COLOR: &str = "#ef4444";
const REAL_COLOR: &str = "#10b981";
const BAR_COLOR: &str = "#3b82f6";

/// Category bar chart with totals in the header
#[component]
pub fn BarChart(
    #[prop(into)]
    data: Signal<Vec<BarDatum>>,
    #[prop(into)]
    title: String,
    #[prop(optional)]
    variant: BarVariant,
) -> impl IntoView {
    let summary = create_memo(move |_| data.with(|d| summarize(d, variant)));

    let header = move || {
        let s = summary.get();
        match variant {
            BarVariant::Single => format!(
                "Total {} · Peak {} · Avg {:.1}",
                format_count(s.total.round() as u64),
                format_count(s.max.round() as u64),
                s.average
            ),
            BarVariant::Comparison => format!(
                "Fake {} · Real {}",
                format_count(s.total_fake.round() as u64),
                format_count(s.total_real.round() as u64)
            ),
        }
    };

    view! {
        <div class="bg-white p-8 rounded-3xl border border-slate-200">
            <div class="flex items-baseline justify-between mb-6">
                <h3 class="text-base font-bold">{title}</h3>
                <span class="text-xs font-semibold text-slate-500">{header}</span>
            </div>
            <div class="flex items-end gap-4 h-48">
                {move || {
                    let max = summary.get().max;
                    data.get()
                        .into_iter()
                        .map(|datum| view! { <Bar datum=datum max=max variant=variant /> })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[component]
fn Bar(datum: BarDatum, max: f64, variant: BarVariant) -> impl IntoView {
    let column = |value: f64, color: &'static str| {
        view! {
            <div
                class="flex-1 rounded-t transition-all"
                style=format!(
                    "height: {:.1}%; background: {}; opacity: 0.85",
                    bar_fraction(value, max) * 100.0,
                    color
                )
                title=format!("{}", value)
            />
        }
    };

    view! {
        <div class="flex-1 h-full flex flex-col items-center justify-end gap-2">
            <div class="w-full h-full flex items-end gap-1">
                {match variant {
                    BarVariant::Single => column(datum.value, BAR_COLOR).into_view(),
                    BarVariant::Comparison => view! {
                        {column(datum.fake, FAKE_COLOR)}
                        {column(datum.real, REAL_COLOR)}
                    }.into_view(),
                }}
            </div>
            <span class="text-[10px] font-bold text-slate-500 text-center">{datum.name}</span>
        </div>
    }
}

/// Fake vs real trend line
#[component]
pub fn LineChart(
    #[prop(into)]
    points: Signal<Vec<LinePoint>>,
    #[prop(into)]
    title: String,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw whenever the series changes
    create_effect(move |_| {
        let points = points.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_lines(&canvas, &points);
        }
    });

    view! {
        <div class="bg-white p-8 rounded-3xl border border-slate-200">
            <h3 class="text-base font-bold mb-4">{title}</h3>
            <canvas
                node_ref=canvas_ref
                width="800"
                height="260"
                class="w-full h-64 rounded-lg"
            />
            <div class="flex justify-center gap-6 mt-4 text-sm">
                <LegendEntry color=FAKE_COLOR label="Fake" />
                <LegendEntry color=REAL_COLOR label="Real" />
            </div>
        </div>
    }
}

#[component]
fn LegendEntry(color: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center space-x-2">
            <div class="w-3 h-3 rounded-full" style=format!("background-color: {}", color) />
            <span class="text-slate-600">{label}</span>
        </div>
    }
}

/// Draw both series on canvas
fn draw_lines(canvas: &HtmlCanvasElement, points: &[LinePoint]) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    let margin_left = 50.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 30.0;

    let plot_width = width - margin_left - margin_right;
    let plot_height = height - margin_top - margin_bottom;

    ctx.set_fill_style(&"#ffffff".into());
    ctx.fill_rect(0.0, 0.0, width, height);

    if points.is_empty() {
        ctx.set_fill_style(&"#94a3b8".into());
        ctx.set_font("14px sans-serif");
        let _ = ctx.fill_text("Waiting for data...", width / 2.0 - 60.0, height / 2.0);
        return;
    }

    // Grid and y labels
    let max = line_max(points);
    ctx.set_stroke_style(&"#e2e8f0".into());
    ctx.set_line_width(1.0);
    ctx.set_fill_style(&"#64748b".into());
    ctx.set_font("11px sans-serif");
    for i in 0..=4 {
        let y = margin_top + plot_height * i as f64 / 4.0;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(margin_left + plot_width, y);
        ctx.stroke();

        let label = max * (4 - i) as f64 / 4.0;
        let _ = ctx.fill_text(&format!("{:.0}", label), 8.0, y + 4.0);
    }

    let (fake, real) = line_paths(points, plot_width, plot_height);
    for (series, color) in [(fake, FAKE_COLOR), (real, REAL_COLOR)] {
        ctx.set_stroke_style(&color.into());
        ctx.set_line_width(2.5);
        ctx.begin_path();
        for (i, (x, y)) in series.iter().enumerate() {
            let (x, y) = (margin_left + x, margin_top + y);
            if i == 0 {
                ctx.move_to(x, y);
            } else {
                ctx.line_to(x, y);
            }
        }
        ctx.stroke();
    }

    // First and last x labels
    ctx.set_fill_style(&"#64748b".into());
    if let Some(first) = points.first() {
        let _ = ctx.fill_text(&first.name, margin_left, height - 8.0);
    }
    if points.len() > 1 {
        if let Some(last) = points.last() {
            let _ = ctx.fill_text(&last.name, margin_left + plot_width - 50.0, height - 8.0);
        }
    }
}
