//! SVG charts of trial results.
//!
//! Per dataset: mean time per algorithm, mean with a one-standard-deviation
//! error bar, min/mean/max side by side, a box plot of the run distribution,
//! the individual run traces on linear and log axes, and the improvement
//! over the baseline algorithm. Times are plotted in milliseconds.

use hybridsort::report::ResultSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 480.0;
const MARGIN_LEFT: f64 = 80.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 60.0;
const MARGIN_BOTTOM: f64 = 60.0;
const Y_TICKS: usize = 5;

/// Whiskers reach the furthest run within this many IQRs of the box.
const WHISKER_IQR: f64 = 1.5;

const PALETTE: [&str; 4] = ["#4c72b0", "#55a868", "#c44e52", "#8172b2"];

/// A named list of values, one per category or run.
pub struct Series<'a> {
    pub name: &'a str,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    Linear,
    Log,
}

/// Vertical axis: maps data values to SVG y coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
enum YAxis {
    Linear { min: f64, max: f64 },
    /// Powers of ten `10^low ..= 10^high`
    Log { low: i32, high: i32 },
}

impl YAxis {
    /// Linear axis from zero (or a rounded negative minimum) to a rounded maximum.
    fn linear<I: IntoIterator<Item = f64>>(values: I) -> Self {
        let (lo, hi) = values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold((0.0f64, 0.0f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
        let min = if lo < 0.0 { -nice_ceiling(-lo) } else { 0.0 };
        let max = if hi > 0.0 || min == 0.0 { nice_ceiling(hi) } else { 0.0 };
        YAxis::Linear { min, max }
    }

    /// Log axis spanning the positive values; non-positive values are ignored.
    fn log<I: IntoIterator<Item = f64>>(values: I) -> Self {
        let positive: Vec<f64> = values
            .into_iter()
            .filter(|v| v.is_finite() && *v > 0.0)
            .collect();
        if positive.is_empty() {
            return YAxis::Log { low: 0, high: 1 };
        }
        let lo = positive.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = positive.iter().copied().fold(0.0, f64::max);
        let low = lo.log10().floor() as i32;
        let high = (hi.log10().ceil() as i32).max(low + 1);
        YAxis::Log { low, high }
    }

    fn pos(&self, value: f64) -> f64 {
        let plot_h = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
        let fraction = match *self {
            YAxis::Linear { min, max } => (value - min) / (max - min),
            YAxis::Log { low, high } => {
                let floor = 10f64.powi(low);
                (value.max(floor).log10() - low as f64) / (high - low) as f64
            }
        };
        MARGIN_TOP + plot_h * (1.0 - fraction)
    }

    /// Bottom of the plot area, or the zero line when the axis spans it.
    fn baseline(&self) -> f64 {
        match *self {
            YAxis::Linear { .. } => self.pos(0.0),
            YAxis::Log { low, .. } => self.pos(10f64.powi(low)),
        }
    }

    fn ticks(&self) -> Vec<f64> {
        match *self {
            YAxis::Linear { min, max } => (0..=Y_TICKS)
                .map(|tick| min + (max - min) * tick as f64 / Y_TICKS as f64)
                .collect(),
            YAxis::Log { low, high } => (low..=high).map(|e| 10f64.powi(e)).collect(),
        }
    }
}

/// Quartiles, whisker ends and outliers of one sample.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxStats {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    /// Smallest value within `WHISKER_IQR` IQRs below `q1`
    pub low: f64,
    /// Largest value within `WHISKER_IQR` IQRs above `q3`
    pub high: f64,
    pub outliers: Vec<f64>,
}

impl BoxStats {
    /// `None` for an empty sample.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let q1 = quantile(&sorted, 0.25);
        let median = quantile(&sorted, 0.5);
        let q3 = quantile(&sorted, 0.75);
        let reach = WHISKER_IQR * (q3 - q1);
        let (lo_fence, hi_fence) = (q1 - reach, q3 + reach);

        let inside = |v: &&f64| **v >= lo_fence && **v <= hi_fence;
        let low = sorted.iter().find(inside).copied().unwrap_or(q1);
        let high = sorted.iter().rev().find(inside).copied().unwrap_or(q3);
        let outliers = sorted
            .iter()
            .copied()
            .filter(|v| *v < lo_fence || *v > hi_fence)
            .collect();

        Some(BoxStats {
            q1,
            median,
            q3,
            low,
            high,
            outliers,
        })
    }
}

/// Linear interpolation between closest ranks of a sorted slice.
fn quantile(sorted: &[f64], p: f64) -> f64 {
    let rank = p * (sorted.len() - 1) as f64;
    let below = rank.floor() as usize;
    let above = rank.ceil() as usize;
    sorted[below] + (sorted[above] - sorted[below]) * (rank - below as f64)
}

/// Writes all charts for every dataset in `results` into `dir`.
///
/// The speed-up chart is skipped for datasets without a `baseline` result.
pub fn write_charts(dir: &Path, results: &ResultSet, baseline: &str) -> io::Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;
    let mut written = Vec::new();
    let mut write = |name: String, svg: String| -> io::Result<()> {
        let path = dir.join(name);
        fs::write(&path, svg)?;
        written.push(path);
        Ok(())
    };

    let speedups = results.speedup_vs(baseline);

    for (dataset, algorithms) in results.datasets() {
        let names: Vec<&str> = algorithms.keys().map(String::as_str).collect();
        let ms = |ns: f64| ns / 1e6;

        let means = Series {
            name: "mean",
            values: algorithms.values().map(|r| ms(r.summary.mean)).collect(),
        };
        let std_devs: Vec<f64> = algorithms.values().map(|r| ms(r.summary.std_dev)).collect();
        let mins = Series {
            name: "min",
            values: algorithms.values().map(|r| ms(r.summary.min as f64)).collect(),
        };
        let maxs = Series {
            name: "max",
            values: algorithms.values().map(|r| ms(r.summary.max as f64)).collect(),
        };

        write(
            format!("{}_means.svg", dataset),
            bar_chart(
                &format!("Mean time - {}", dataset),
                "Mean time (ms)",
                &names,
                std::slice::from_ref(&means),
            ),
        )?;

        write(
            format!("{}_means_err.svg", dataset),
            error_bar_chart(
                &format!("Mean ± std dev - {}", dataset),
                "Time (ms)",
                &names,
                &means.values,
                &std_devs,
            ),
        )?;

        write(
            format!("{}_min_mean_max.svg", dataset),
            bar_chart(
                &format!("Min / Mean / Max - {}", dataset),
                "Time (ms)",
                &names,
                &[mins, means, maxs],
            ),
        )?;

        let samples: Vec<Vec<f64>> = algorithms
            .values()
            .map(|r| r.durations.iter().map(|&d| ms(d as f64)).collect())
            .collect();
        write(
            format!("{}_box.svg", dataset),
            box_chart(
                &format!("Distribution of run times - {}", dataset),
                "Time (ms)",
                &names,
                &samples,
            ),
        )?;

        let runs: Vec<Series> = algorithms
            .keys()
            .zip(samples)
            .map(|(name, values)| Series { name, values })
            .collect();
        write(
            format!("{}_runs.svg", dataset),
            line_chart(
                &format!("Individual runs - {}", dataset),
                "Run",
                "Time (ms)",
                &runs,
                Scale::Linear,
            ),
        )?;
        write(
            format!("{}_runs_log.svg", dataset),
            line_chart(
                &format!("Individual runs (log scale) - {}", dataset),
                "Run",
                "Time (ms, log)",
                &runs,
                Scale::Log,
            ),
        )?;

        let mut improvements: Vec<(&str, f64)> = speedups
            .iter()
            .filter(|r| r.dataset == dataset)
            .map(|r| (r.algorithm, r.improvement_pct))
            .collect();
        if improvements.is_empty() {
            continue;
        }
        // Fastest first
        improvements.sort_by(|a, b| b.1.total_cmp(&a.1));
        let (labels, values): (Vec<&str>, Vec<f64>) = improvements.into_iter().unzip();
        write(
            format!("{}_speedup.svg", dataset),
            bar_chart(
                &format!("Improvement vs {} - {}", baseline, dataset),
                "% improvement (positive = faster)",
                &labels,
                &[Series {
                    name: "improvement",
                    values,
                }],
            ),
        )?;
    }

    Ok(written)
}

/// Grouped bar chart: one group per category, one bar per series.
///
/// Negative values hang below a zero line.
pub fn bar_chart(title: &str, y_label: &str, categories: &[&str], series: &[Series]) -> String {
    let axis = YAxis::linear(series.iter().flat_map(|s| s.values.iter().copied()));
    let mut svg = open_svg(title, y_label, &axis);

    let group_w = group_width(categories.len());
    let bar_w = group_w * 0.8 / series.len().max(1) as f64;
    let zero = axis.baseline();

    for (ci, category) in categories.iter().enumerate() {
        let group_x = MARGIN_LEFT + ci as f64 * group_w + group_w * 0.1;

        for (si, s) in series.iter().enumerate() {
            let Some(&value) = s.values.get(ci) else {
                continue;
            };
            let x = group_x + si as f64 * bar_w;
            let y = axis.pos(value);
            push_rect(&mut svg, x, y.min(zero), bar_w * 0.95, (zero - y).abs(), PALETTE[si % PALETTE.len()]);

            let label_y = if value < 0.0 { y + 12.0 } else { y - 4.0 };
            svg.push_str(&format!(
                "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"10\" text-anchor=\"middle\">{}</text>\n",
                x + bar_w * 0.475,
                label_y,
                value_label(value)
            ));
        }

        category_label(&mut svg, ci, group_w, category);
    }

    if let YAxis::Linear { min, .. } = axis {
        if min < 0.0 {
            svg.push_str(&format!(
                "<line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"black\" stroke-width=\"0.8\"/>\n",
                MARGIN_LEFT,
                zero,
                WIDTH - MARGIN_RIGHT,
                zero
            ));
        }
    }

    if series.len() > 1 {
        legend(&mut svg, series);
    }
    svg.push_str("</svg>\n");
    svg
}

/// One bar per category at `means[i]` with a whisker of `± errors[i]`.
pub fn error_bar_chart(
    title: &str,
    y_label: &str,
    categories: &[&str],
    means: &[f64],
    errors: &[f64],
) -> String {
    let tops = means
        .iter()
        .zip(errors)
        .map(|(m, e)| m + e.abs())
        .chain(means.iter().copied());
    let axis = YAxis::linear(tops);
    let mut svg = open_svg(title, y_label, &axis);

    let group_w = group_width(categories.len());
    let zero = axis.baseline();

    for (ci, category) in categories.iter().enumerate() {
        let Some(&mean) = means.get(ci) else {
            continue;
        };
        let error = errors.get(ci).copied().unwrap_or(0.0).abs();
        let x = MARGIN_LEFT + ci as f64 * group_w + group_w * 0.2;
        let bar_w = group_w * 0.6;
        let center = x + bar_w / 2.0;
        let y = axis.pos(mean);
        push_rect(&mut svg, x, y.min(zero), bar_w, (zero - y).abs(), PALETTE[ci % PALETTE.len()]);

        let upper = axis.pos(mean + error);
        let lower = axis.pos(mean - error).min(axis.pos(axis_floor(&axis)));
        whisker(&mut svg, center, upper, lower, bar_w * 0.2);

        svg.push_str(&format!(
            "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"10\" text-anchor=\"middle\">{} ± {}</text>\n",
            center,
            upper - 6.0,
            value_label(mean),
            value_label(error)
        ));
        category_label(&mut svg, ci, group_w, category);
    }

    svg.push_str("</svg>\n");
    svg
}

/// One box per category: quartile box, median line, whiskers, outlier dots.
pub fn box_chart(title: &str, y_label: &str, categories: &[&str], samples: &[Vec<f64>]) -> String {
    let axis = YAxis::linear(samples.iter().flatten().copied());
    let mut svg = open_svg(title, y_label, &axis);

    let group_w = group_width(categories.len());

    for (ci, category) in categories.iter().enumerate() {
        let Some(stats) = samples.get(ci).and_then(|s| BoxStats::from_values(s)) else {
            category_label(&mut svg, ci, group_w, category);
            continue;
        };
        let box_w = group_w * 0.5;
        let x = MARGIN_LEFT + ci as f64 * group_w + group_w * 0.25;
        let center = x + box_w / 2.0;

        whisker(&mut svg, center, axis.pos(stats.high), axis.pos(stats.low), box_w * 0.4);

        let top = axis.pos(stats.q3);
        push_rect(&mut svg, x, top, box_w, axis.pos(stats.q1) - top, PALETTE[ci % PALETTE.len()]);

        let median = axis.pos(stats.median);
        svg.push_str(&format!(
            "<line class=\"median\" x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"black\" stroke-width=\"2\"/>\n",
            x,
            median,
            x + box_w,
            median
        ));

        for &outlier in &stats.outliers {
            svg.push_str(&format!(
                "<circle cx=\"{:.1}\" cy=\"{:.1}\" r=\"2.5\" fill=\"none\" stroke=\"#333333\"/>\n",
                center,
                axis.pos(outlier)
            ));
        }

        category_label(&mut svg, ci, group_w, category);
    }

    svg.push_str("</svg>\n");
    svg
}

/// Line chart with the value index on the x axis.
///
/// On a log scale, non-positive values are drawn at the bottom of the axis.
pub fn line_chart(title: &str, x_label: &str, y_label: &str, series: &[Series], scale: Scale) -> String {
    let values = series.iter().flat_map(|s| s.values.iter().copied());
    let axis = match scale {
        Scale::Linear => YAxis::linear(values),
        Scale::Log => YAxis::log(values),
    };
    let mut svg = open_svg(title, y_label, &axis);

    let plot_w = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let longest = series.iter().map(|s| s.values.len()).max().unwrap_or(0);
    let step = plot_w / longest.saturating_sub(1).max(1) as f64;

    for (si, s) in series.iter().enumerate() {
        let points: Vec<String> = s
            .values
            .iter()
            .enumerate()
            .map(|(i, &v)| format!("{:.1},{:.1}", MARGIN_LEFT + i as f64 * step, axis.pos(v)))
            .collect();
        svg.push_str(&format!(
            "<polyline points=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"1.2\"/>\n",
            points.join(" "),
            PALETTE[si % PALETTE.len()]
        ));
    }

    svg.push_str(&format!(
        "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"12\" text-anchor=\"middle\">{}</text>\n",
        MARGIN_LEFT + plot_w / 2.0,
        HEIGHT - 15.0,
        escape(x_label)
    ));
    legend(&mut svg, series);
    svg.push_str("</svg>\n");
    svg
}

/// SVG header, title, y-axis label and horizontal grid with tick labels.
fn open_svg(title: &str, y_label: &str, axis: &YAxis) -> String {
    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" font-family=\"sans-serif\">\n\
         <rect width=\"100%\" height=\"100%\" fill=\"white\"/>\n",
        w = WIDTH,
        h = HEIGHT
    );
    svg.push_str(&format!(
        "<text x=\"{:.1}\" y=\"30\" font-size=\"16\" text-anchor=\"middle\">{}</text>\n",
        WIDTH / 2.0,
        escape(title)
    ));
    svg.push_str(&format!(
        "<text x=\"20\" y=\"{:.1}\" font-size=\"12\" text-anchor=\"middle\" transform=\"rotate(-90 20 {:.1})\">{}</text>\n",
        HEIGHT / 2.0,
        HEIGHT / 2.0,
        escape(y_label)
    ));

    for value in axis.ticks() {
        let y = axis.pos(value);
        svg.push_str(&format!(
            "<line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"#dddddd\"/>\n",
            MARGIN_LEFT,
            y,
            WIDTH - MARGIN_RIGHT,
            y
        ));
        svg.push_str(&format!(
            "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"10\" text-anchor=\"end\">{}</text>\n",
            MARGIN_LEFT - 6.0,
            y + 3.0,
            tick_label(value)
        ));
    }
    svg
}

fn push_rect(svg: &mut String, x: f64, y: f64, width: f64, height: f64, fill: &str) {
    svg.push_str(&format!(
        "<rect x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{:.1}\" fill=\"{}\"/>\n",
        x, y, width, height, fill
    ));
}

/// Vertical stem from `top` to `bottom` with a cap of width `cap` at each end.
fn whisker(svg: &mut String, x: f64, top: f64, bottom: f64, cap: f64) {
    let half = cap / 2.0;
    for (x1, y1, x2, y2) in [
        (x, top, x, bottom),
        (x - half, top, x + half, top),
        (x - half, bottom, x + half, bottom),
    ] {
        svg.push_str(&format!(
            "<line class=\"whisker\" x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"black\"/>\n",
            x1, y1, x2, y2
        ));
    }
}

fn category_label(svg: &mut String, index: usize, group_w: f64, category: &str) {
    svg.push_str(&format!(
        "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"12\" text-anchor=\"middle\">{}</text>\n",
        MARGIN_LEFT + (index as f64 + 0.5) * group_w,
        HEIGHT - MARGIN_BOTTOM + 20.0,
        escape(category)
    ));
}

fn legend(svg: &mut String, series: &[Series]) {
    for (si, s) in series.iter().enumerate() {
        let x = WIDTH - MARGIN_RIGHT - 110.0;
        let y = MARGIN_TOP + si as f64 * 18.0;
        push_rect(svg, x, y, 12.0, 12.0, PALETTE[si % PALETTE.len()]);
        svg.push_str(&format!(
            "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"11\">{}</text>\n",
            x + 18.0,
            y + 10.0,
            escape(s.name)
        ));
    }
}

fn group_width(categories: usize) -> f64 {
    (WIDTH - MARGIN_LEFT - MARGIN_RIGHT) / categories.max(1) as f64
}

fn axis_floor(axis: &YAxis) -> f64 {
    match *axis {
        YAxis::Linear { min, .. } => min,
        YAxis::Log { low, .. } => 10f64.powi(low),
    }
}

/// Rounds up to 1, 2 or 5 times a power of ten.
fn nice_ceiling(value: f64) -> f64 {
    if !value.is_finite() || value <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powi(value.log10().floor() as i32);
    let fraction = value / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

fn tick_label(value: f64) -> String {
    if value == 0.0 || value.abs() >= 1.0 {
        format!("{:.1}", value)
    } else {
        format!("{:.4}", value)
    }
}

fn value_label(value: f64) -> String {
    if value.abs() >= 100.0 {
        format!("{:.1}", value)
    } else {
        format!("{:.3}", value)
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
