use analytics::{Mode, SummaryStatistics};
use analyzer::{AnalysisReport, OutlierAnalysis, OutlierClassification};
use charts::{ChartData, HistogramSeries};
use comfy_table::{Table, presets::UTF8_FULL};
use core_types::FenceSide;
use serde::Serialize;

/// The document printed by `--format json`.
#[derive(Serialize)]
struct JsonOutput<'a> {
    report: &'a AnalysisReport,
    charts: &'a ChartData,
}

pub fn render_json(report: &AnalysisReport, charts: &ChartData) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonOutput { report, charts })
}

/// Renders every table and the outlier alert as one block of text.
pub fn render_report(report: &AnalysisReport, charts: &ChartData, precision: usize) -> String {
    let mut sections = vec![
        format!("Basic Statistics\n{}", basic_table(&report.summary, precision)),
        format!(
            "Statistics\n{}",
            statistics_table(&report.summary, &report.outliers, precision)
        ),
        format!("Outlier Analysis\n{}", outlier_alert(&report.outliers, precision)),
    ];
    if let Some(c) = report.outliers.classification() {
        if !c.outliers.is_empty() {
            sections.push(format!("Outliers\n{}", outlier_table(c, precision)));
        }
    }
    sections.push(format!(
        "Histogram\n{}",
        histogram_table(&charts.histogram, precision)
    ));
    sections.join("\n\n")
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(header);
    table
}

fn num(value: f64, precision: usize) -> String {
    format!("{value:.precision$}")
}

fn format_mode(mode: &Mode, precision: usize) -> String {
    match mode {
        Mode::NoMode => "No mode".to_string(),
        _ => mode
            .values()
            .iter()
            .map(|v| num(*v, precision))
            .collect::<Vec<_>>()
            .join(", "),
    }
}

fn basic_table(summary: &SummaryStatistics, precision: usize) -> Table {
    let mut table = new_table(vec!["Metric", "Value"]);
    table
        .add_row(vec!["Count".to_string(), summary.count.to_string()])
        .add_row(vec!["Minimum".to_string(), num(summary.min, precision)])
        .add_row(vec!["Maximum".to_string(), num(summary.max, precision)])
        .add_row(vec!["Range".to_string(), num(summary.range, precision)]);
    table
}

fn statistics_table(
    summary: &SummaryStatistics,
    outliers: &OutlierAnalysis,
    precision: usize,
) -> Table {
    let spread = |v: Option<f64>| {
        v.map_or_else(
            || "n/a (needs at least 2 values)".to_string(),
            |v| num(v, precision),
        )
    };
    let outlier_count = outliers
        .outlier_count()
        .map_or_else(|| "n/a".to_string(), |n| n.to_string());

    let mut table = new_table(vec!["Metric", "Value"]);
    table
        .add_row(vec!["Mean".to_string(), num(summary.mean, precision)])
        .add_row(vec!["Median".to_string(), num(summary.median, precision)])
        .add_row(vec!["Mode".to_string(), format_mode(&summary.mode, precision)])
        .add_row(vec!["Variance".to_string(), spread(summary.variance)])
        .add_row(vec!["Std Dev".to_string(), spread(summary.std_dev)])
        .add_row(vec!["Q1".to_string(), num(summary.q1, precision)])
        .add_row(vec!["Q3".to_string(), num(summary.q3, precision)])
        .add_row(vec!["IQR".to_string(), num(summary.iqr, precision)])
        .add_row(vec!["Outliers".to_string(), outlier_count]);
    table
}

/// "Not applicable" and "checked and clean" are reported differently.
fn outlier_alert(analysis: &OutlierAnalysis, precision: usize) -> String {
    match analysis {
        OutlierAnalysis::NotApplicable { count } => format!(
            "No outlier analysis possible: at least 2 values are required, got {count}."
        ),
        OutlierAnalysis::Classified(c) if c.outliers.is_empty() => format!(
            "No outliers detected (fences {} .. {}).",
            num(c.bounds.lower_fence, precision),
            num(c.bounds.upper_fence, precision)
        ),
        OutlierAnalysis::Classified(c) => format!(
            "Outliers detected: {} of {} values ({:.1}%), lower fence {}, upper fence {}.",
            c.outlier_count(),
            c.sample_size,
            c.outlier_percentage(),
            num(c.bounds.lower_fence, precision),
            num(c.bounds.upper_fence, precision)
        ),
    }
}

fn outlier_table(classification: &OutlierClassification, precision: usize) -> Table {
    let mut table = new_table(vec!["Index", "Value", "Side"]);
    for o in &classification.outliers {
        let side = match o.side {
            FenceSide::Low => "below lower fence",
            FenceSide::High => "above upper fence",
        };
        table.add_row(vec![o.index.to_string(), num(o.value, precision), side.to_string()]);
    }
    table
}

fn histogram_table(histogram: &HistogramSeries, precision: usize) -> Table {
    let mut table = new_table(vec!["Bin", "Normal", "Outlier"]);
    let last = histogram.bins.len().saturating_sub(1);
    for (i, bin) in histogram.bins.iter().enumerate() {
        let close = if i == last { "]" } else { ")" };
        table.add_row(vec![
            format!(
                "[{}, {}{close}",
                num(bin.start, precision),
                num(bin.end, precision)
            ),
            bin.normal_count.to_string(),
            bin.outlier_count.to_string(),
        ]);
    }
    table
}
