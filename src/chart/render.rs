use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::chart::figure::{AxisSide, DualAxisFigure, LegendPosition};
use crate::chart::fonts::ensure_font_registered;
use crate::config::PLOT_CONFIG;
use crate::utils::TimeUtils;
use crate::utils::time_utils::date_from_offset;

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub width_px: u32,
    pub height_px: u32,
    /// Font file to use instead of searching the configured system paths
    pub font: Option<PathBuf>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width_px: PLOT_CONFIG.width_px,
            height_px: PLOT_CONFIG.height_px,
            font: None,
        }
    }
}

/// Draws `figure` into a PNG at `path`, replacing any existing file.
/// The bitmap is released when this returns, on error paths too.
pub fn render_png(figure: &DualAxisFigure, path: &Path, options: &RenderOptions) -> Result<()> {
    ensure_font_registered(options.font.as_deref())?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let root = BitMapBackend::new(path, (options.width_px, options.height_px)).into_drawing_area();
    root.fill(&PLOT_CONFIG.background_color)?;
    draw_figure(&root, figure)?;
    root.present()
        .with_context(|| format!("Failed to write chart to {}", path.display()))?;
    Ok(())
}

/// Axis title colours: each y axis follows its series, the date axis stays black
#[derive(Debug, Clone, Copy, PartialEq)]
struct AxisTitleColors {
    x: RGBColor,
    left: RGBColor,
    right: RGBColor,
}

fn axis_title_colors(figure: &DualAxisFigure) -> AxisTitleColors {
    AxisTitleColors {
        x: BLACK,
        left: figure.y_axis(AxisSide::Left).color,
        right: figure.y_axis(AxisSide::Right).color,
    }
}

/// Decimal places for tick labels so small prices (e.g. 0.0823) stay readable
fn tick_precision(min: f64, max: f64) -> usize {
    let span = (max - min).abs();
    if span <= 0.0 || !span.is_finite() {
        return 2;
    }
    (2.0 - span.log10().floor()).clamp(0.0, 8.0) as usize
}

fn draw_figure(root: &DrawingArea<BitMapBackend<'_>, Shift>, figure: &DualAxisFigure) -> Result<()> {
    let font = PLOT_CONFIG.font_family;
    let label_size = PLOT_CONFIG.label_font_size;
    let left = figure.y_axis(AxisSide::Left);
    let right = figure.y_axis(AxisSide::Right);
    let x_range = 0..figure.x_axis.span_days();
    let x_start = figure.x_axis.start;
    let titles = axis_title_colors(figure);

    let mut chart = ChartBuilder::on(root)
        .caption(&figure.title, (font, PLOT_CONFIG.title_font_size))
        .margin(PLOT_CONFIG.margin_px)
        .x_label_area_size(50)
        .y_label_area_size(90)
        .right_y_label_area_size(90)
        .build_cartesian_2d(x_range.clone(), left.min..left.max)?
        .set_secondary_coord(x_range, right.min..right.max);

    let left_precision = tick_precision(left.min, left.max);
    let right_precision = tick_precision(right.min, right.max);
    let grid_style = || PLOT_CONFIG.grid_color.mix(PLOT_CONFIG.grid_opacity).stroke_width(1);

    chart
        .configure_mesh()
        .y_desc(left.label.as_str())
        .x_labels(PLOT_CONFIG.x_label_count)
        .x_label_formatter(&|offset: &i32| {
            date_from_offset(x_start, *offset)
                .format(PLOT_CONFIG.x_label_format)
                .to_string()
        })
        .y_label_formatter(&|v: &f64| format!("{:.*}", left_precision, v))
        .x_label_style((font, label_size))
        .y_label_style((font, label_size, &left.color))
        .axis_desc_style((font, label_size, &titles.left))
        .bold_line_style(grid_style())
        .light_line_style(grid_style())
        .draw()?;

    chart
        .configure_secondary_axes()
        .y_desc(right.label.as_str())
        .y_label_formatter(&|v: &f64| format!("{:.*}", right_precision, v))
        .label_style((font, label_size, &right.color))
        .axis_desc_style((font, label_size, &titles.right))
        .draw()?;

    // The mesh applies one desc style to both axes, so the date title is drawn on its own
    let (width, height) = root.dim_in_pixel();
    let x_title_style = TextStyle::from((font, label_size).into_font())
        .color(&titles.x)
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    root.draw(&Text::new(
        figure.x_axis.label.as_str(),
        ((width / 2) as i32, height.saturating_sub(PLOT_CONFIG.margin_px) as i32),
        x_title_style,
    ))?;

    let line_width = PLOT_CONFIG.line_width;
    for trace in &figure.traces {
        let color = trace.color;
        let points: Vec<(i32, f64)> = trace
            .points
            .iter()
            .map(|p| (figure.x_axis.offset_of(p.date), p.value))
            .collect();
        let series = LineSeries::new(points, color.stroke_width(line_width));
        let anno = match trace.side {
            AxisSide::Left => chart.draw_series(series)?,
            AxisSide::Right => chart.draw_secondary_series(series)?,
        };
        anno.label(trace.label.as_str()).legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(line_width))
        });
    }

    let position = match figure.legend.position {
        LegendPosition::UpperLeft => SeriesLabelPosition::UpperLeft,
    };
    chart
        .configure_series_labels()
        .position(position)
        .label_font((font, label_size))
        .background_style(PLOT_CONFIG.background_color.mix(0.8).filled())
        .border_style(BLACK.stroke_width(1))
        .draw()?;

    log::debug!(
        "Chart drawn: {} traces from {} to {}",
        figure.traces.len(),
        TimeUtils::format_date(figure.x_axis.start),
        TimeUtils::format_date(figure.x_axis.end)
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::figure::ChartLabels;
    use crate::chart::fonts::find_font;
    use crate::models::{AlignedSeries, DatedValue, PriceSeries};
    use chrono::NaiveDate;

    #[test]
    fn test_tick_precision() {
        assert_eq!(tick_precision(0.08, 0.12), 4);
        assert_eq!(tick_precision(0.0, 100.0), 0);
        assert_eq!(tick_precision(1.0, 1.0), 2);
    }

    #[test]
    fn test_axis_titles_follow_series_colours() {
        let figure = sample_figure();
        let titles = axis_title_colors(&figure);
        assert_eq!(titles.left, PLOT_CONFIG.price_color);
        assert_eq!(titles.right, PLOT_CONFIG.mention_color);
        assert_eq!(titles.x, BLACK);
    }

    #[test]
    fn test_render_overwrites_png() {
        if let Err(e) = find_font(None) {
            eprintln!("skipping PNG render: {:#}", e);
            return;
        }
        let figure = sample_figure();

        let path = std::env::temp_dir().join("price_mentions_render_test.png");
        std::fs::write(&path, b"stale output").unwrap();
        render_png(&figure, &path, &RenderOptions::default()).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
        assert!(bytes.len() > b"stale output".len());
        std::fs::remove_file(&path).ok();
    }

    fn sample_figure() -> DualAxisFigure {
        let date = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
        let points = vec![
            DatedValue::new(date(1), 0.10),
            DatedValue::new(date(2), 0.12),
            DatedValue::new(date(3), 0.11),
        ];
        let prices = PriceSeries::new("DOGE-USD", points);
        let mentions = AlignedSeries {
            label: "Dogecoin".to_string(),
            points: vec![
                DatedValue::new(date(1), 50.0),
                DatedValue::new(date(2), 0.0),
                DatedValue::new(date(3), 80.0),
            ],
        };
        DualAxisFigure::new(&prices, &mentions, &ChartLabels::from(&PLOT_CONFIG.labels)).unwrap()
    }
}
