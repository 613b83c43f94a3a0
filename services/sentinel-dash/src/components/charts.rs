// services/sentinel-dash/src/components/charts.rs
//
// Sentinel Console - Analytics Charts
// Hand-rolled SVG primitives in place of an external charting stack
//

use leptos::*;

use opskit::data::{location_mentions, severity_distribution, weekly_activity, CHART_COLORS};
use opskit::types::{Platform, Severity, WeeklyActivity};

/// Weekly threat mentions, one line per platform.
#[component]
pub fn ActivityTrend() -> impl IntoView {
    let days = weekly_activity();
    let max = days
        .iter()
        .flat_map(|day| day.counts)
        .max()
        .unwrap_or(1)
        .max(1);

    view! {
        <div class="chart">
            <svg class="chart-svg" viewBox="0 0 400 200" preserveAspectRatio="none">
                // Grid lines
                <line class="grid-line" x1="24" y1="52" x2="376" y2="52" />
                <line class="grid-line" x1="24" y1="95" x2="376" y2="95" />
                <line class="grid-line" x1="24" y1="138" x2="376" y2="138" />

                {Platform::ALL
                    .iter()
                    .copied()
                    .map(|platform| {
                        view! {
                            <path
                                class="chart-line"
                                d=generate_trend_path(&days, platform, max)
                                fill="none"
                                stroke=line_color(platform)
                                stroke-width="2"
                            />
                        }
                    })
                    .collect_view()}
            </svg>

            <div class="chart-labels">
                {days
                    .iter()
                    .map(|day| view! { <span>{day.day}</span> })
                    .collect_view()}
            </div>

            <div class="chart-legend">
                {Platform::ALL
                    .iter()
                    .copied()
                    .map(|platform| {
                        view! {
                            <span class="legend-entry">
                                <span
                                    class="legend-swatch"
                                    style=format!("background: {}", line_color(platform))
                                ></span>
                                {platform.to_string()}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Severity share of the threat fixture as a stroke-dasharray donut.
#[component]
pub fn SeverityDonut() -> impl IntoView {
    let segments = donut_segments(&severity_distribution());

    view! {
        <div class="chart">
            <svg class="donut-svg" viewBox="0 0 200 200">
                <circle
                    class="donut-bg"
                    cx="100"
                    cy="100"
                    r=DONUT_RADIUS
                    fill="none"
                    stroke="#2D2D2D"
                    stroke-width="24"
                />
                {segments
                    .iter()
                    .map(|segment| {
                        view! {
                            <circle
                                class="donut-slice"
                                cx="100"
                                cy="100"
                                r=DONUT_RADIUS
                                fill="none"
                                stroke=segment.color
                                stroke-width="24"
                                stroke-dasharray=segment.dasharray.clone()
                                stroke-dashoffset=segment.dashoffset
                                transform="rotate(-90 100 100)"
                            />
                        }
                    })
                    .collect_view()}
            </svg>

            <div class="chart-legend">
                {segments
                    .iter()
                    .map(|segment| {
                        view! {
                            <span class="legend-entry">
                                <span
                                    class="legend-swatch"
                                    style=format!("background: {}", segment.color)
                                ></span>
                                {segment.label.clone()}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Mentions by location, one colored bar each.
#[component]
pub fn LocationBars() -> impl IntoView {
    let mentions = location_mentions();
    let max = mentions.iter().map(|(_, n)| *n).max().unwrap_or(1).max(1);
    let slot = (400.0 - 2.0 * BAR_PAD) / mentions.len().max(1) as f64;

    view! {
        <div class="chart">
            <svg class="chart-svg" viewBox="0 0 400 220">
                <line class="grid-line" x1="20" y1="180" x2="380" y2="180" />
                {mentions
                    .iter()
                    .copied()
                    .enumerate()
                    .map(|(i, (name, count))| {
                        let height = count as f64 / max as f64 * 150.0;
                        let x = BAR_PAD + i as f64 * slot + (slot - BAR_WIDTH) / 2.0;
                        let center = BAR_PAD + i as f64 * slot + slot / 2.0;
                        view! {
                            <rect
                                class="bar"
                                x=x
                                y={180.0 - height}
                                width=BAR_WIDTH
                                height=height
                                fill=CHART_COLORS[i % CHART_COLORS.len()]
                            />
                            <text class="bar-value" x=center y={180.0 - height - 6.0} text-anchor="middle">
                                {count}
                            </text>
                            <text class="bar-label" x=center y="200" text-anchor="middle">
                                {name}
                            </text>
                        }
                    })
                    .collect_view()}
            </svg>
        </div>
    }
}

const DONUT_RADIUS: f64 = 70.0;
const BAR_PAD: f64 = 20.0;
const BAR_WIDTH: f64 = 46.0;

struct DonutSegment {
    label: String,
    color: &'static str,
    dasharray: String,
    dashoffset: f64,
}

/// Slice geometry for the donut, clockwise from twelve o'clock.
fn donut_segments(shares: &[(Severity, u32)]) -> Vec<DonutSegment> {
    let total: u32 = shares.iter().map(|(_, n)| n).sum();
    if total == 0 {
        return Vec::new();
    }

    let circumference = 2.0 * std::f64::consts::PI * DONUT_RADIUS;
    let mut consumed = 0.0;

    shares
        .iter()
        .enumerate()
        .map(|(i, (severity, count))| {
            let fraction = *count as f64 / total as f64;
            let length = fraction * circumference;
            let segment = DonutSegment {
                label: format!("{} {:.0}%", severity_label(*severity), fraction * 100.0),
                color: CHART_COLORS[i % CHART_COLORS.len()],
                dasharray: format!("{:.2} {:.2}", length, circumference - length),
                dashoffset: -consumed,
            };
            consumed += length;
            segment
        })
        .collect()
}

/// Generate SVG path for one platform's weekly series.
fn generate_trend_path(days: &[WeeklyActivity], platform: Platform, max: u32) -> String {
    if days.is_empty() {
        return String::new();
    }

    let width = 400.0;
    let height = 200.0;
    let pad_x = 24.0;
    let pad_y = 14.0;
    let step = (width - pad_x * 2.0) / (days.len() - 1).max(1) as f64;

    let points: Vec<String> = days
        .iter()
        .enumerate()
        .map(|(i, day)| {
            let x = pad_x + i as f64 * step;
            let y = height
                - pad_y
                - (day.count(platform) as f64 / max as f64) * (height - pad_y * 2.0);
            format!("{:.1},{:.1}", x, y)
        })
        .collect();

    format!("M {} L {}", points[0], points.join(" L "))
}

fn line_color(platform: Platform) -> &'static str {
    match platform {
        Platform::X => "#1DA1F2",
        Platform::Facebook => "#4267B2",
        Platform::Instagram => "#E1306C",
    }
}

fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Low => "Low",
        Severity::Medium => "Medium",
        Severity::High => "High",
    }
}
