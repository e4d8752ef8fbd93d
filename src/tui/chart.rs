use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use crate::chat::{ChartKind, ChartSpec};

use super::theme::Theme;

// BarChart only takes integers; values are scaled to keep one decimal.
const BAR_SCALE: f64 = 10.0;

/// Draw a chart description into `area`
pub fn render_chart(frame: &mut Frame, area: Rect, chart: &ChartSpec, theme: &Theme) {
    let block = Block::default()
        .title(format!(" {} ", chart.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.colors.border.to_color()));

    match chart.kind {
        ChartKind::Bar => render_bar(frame, area, chart, theme, block),
        ChartKind::Line => render_line(frame, area, chart, theme, block),
        ChartKind::Pie => render_pie(frame, area, chart, theme, block),
    }
}

fn render_bar(frame: &mut Frame, area: Rect, chart: &ChartSpec, theme: &Theme, block: Block) {
    let series_count = chart.series.len().max(1) as u16;
    let groups = chart.labels.len().max(1) as u16;
    // Fit all groups inside the block, leaving room for the gaps
    let inner_width = area.width.saturating_sub(2);
    let per_group = inner_width / groups;
    let bar_width = (per_group.saturating_sub(2) / series_count).clamp(1, 7);

    let mut widget = BarChart::default()
        .block(block)
        .bar_width(bar_width)
        .bar_gap(0)
        .group_gap(2);

    for (i, label) in chart.labels.iter().enumerate() {
        let bars: Vec<Bar> = chart
            .series
            .iter()
            .enumerate()
            .filter_map(|(s, series)| {
                let value = *series.values.get(i)?;
                Some(
                    Bar::default()
                        .value(scaled(value))
                        .text_value(format!("{:.1}", value))
                        .style(Style::default().fg(theme.series_color(s))),
                )
            })
            .collect();
        let group = BarGroup::default()
            .label(Line::from(label.clone()))
            .bars(&bars);
        widget = widget.data(group);
    }

    frame.render_widget(widget, area);
}

fn render_line(frame: &mut Frame, area: Rect, chart: &ChartSpec, theme: &Theme, block: Block) {
    let points: Vec<Vec<(f64, f64)>> = chart
        .series
        .iter()
        .map(|s| {
            s.values
                .iter()
                .enumerate()
                .map(|(x, y)| (x as f64, *y))
                .collect()
        })
        .collect();

    let datasets: Vec<Dataset> = chart
        .series
        .iter()
        .zip(points.iter())
        .enumerate()
        .map(|(i, (series, data))| {
            Dataset::default()
                .name(series.name.clone())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(theme.series_color(i)))
                .data(data)
        })
        .collect();

    let (y_min, y_max) = y_bounds(chart);
    let x_max = chart.labels.len().saturating_sub(1).max(1) as f64;
    let x_labels: Vec<Line> = chart.labels.iter().map(|l| Line::from(l.clone())).collect();
    let y_labels: Vec<Line> = [y_min, (y_min + y_max) / 2.0, y_max]
        .iter()
        .map(|v| Line::from(format!("{:.0}", v)))
        .collect();

    let axis_style = Style::default().fg(theme.colors.text_secondary.to_color());
    let widget = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .style(axis_style)
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(axis_style)
                .bounds([y_min, y_max])
                .labels(y_labels),
        );

    frame.render_widget(widget, area);
}

fn render_pie(frame: &mut Frame, area: Rect, chart: &ChartSpec, theme: &Theme, block: Block) {
    let Some(series) = chart.series.first() else {
        frame.render_widget(Paragraph::new("").block(block), area);
        return;
    };

    let shares = pie_shares(&series.values);
    let label_width = chart.labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let bar_room = area.width.saturating_sub(label_width as u16 * 2 + 14) as f64;

    let lines: Vec<Line> = chart
        .labels
        .iter()
        .zip(shares.iter())
        .enumerate()
        .map(|(i, (label, share))| {
            let filled = (bar_room * share / 100.0).round() as usize;
            Line::from(vec![
                Span::styled(
                    format!("{:<width$} ", label, width = label_width),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    symbols::block::FULL.repeat(filled),
                    Style::default().fg(theme.series_color(i)),
                ),
                Span::raw(format!(" {:.1}%", share)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn scaled(value: f64) -> u64 {
    (value.max(0.0) * BAR_SCALE).round() as u64
}

/// Percentage share of each slice; all zeros if the total is not positive
pub fn pie_shares(values: &[f64]) -> Vec<f64> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    if total <= 0.0 {
        return vec![0.0; values.len()];
    }
    values
        .iter()
        .map(|v| v.max(0.0) / total * 100.0)
        .collect()
}

/// Y axis range padded to whole tens around the data
fn y_bounds(chart: &ChartSpec) -> (f64, f64) {
    let min = chart
        .series
        .iter()
        .flat_map(|s| s.values.iter().copied())
        .fold(f64::INFINITY, f64::min);
    let max = chart.max_value();
    if !min.is_finite() {
        return (0.0, 1.0);
    }
    let low = ((min / 10.0).floor() * 10.0).max(0.0);
    let high = (max / 10.0).ceil() * 10.0;
    if high <= low {
        (low, low + 10.0)
    } else {
        (low, high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pie_shares_sum_to_hundred() {
        let shares = pie_shares(&[33.5, 30.2, 8.1, 6.4, 18.9, 2.9]);
        let total: f64 = shares.iter().sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_pie_shares_degenerate() {
        assert_eq!(pie_shares(&[0.0, 0.0]), vec![0.0, 0.0]);
        assert!(pie_shares(&[]).is_empty());
    }

    #[test]
    fn test_scaled_keeps_one_decimal() {
        assert_eq!(scaled(17.3), 173);
        assert_eq!(scaled(-2.0), 0);
    }

    #[test]
    fn test_y_bounds() {
        let chart = ChartSpec::new(ChartKind::Line, "t", &["a", "b"]).with_series("s", &[36.8, 63.1]);
        assert_eq!(y_bounds(&chart), (30.0, 70.0));

        let empty = ChartSpec::new(ChartKind::Line, "t", &[]);
        assert_eq!(y_bounds(&empty), (0.0, 1.0));
    }
}
