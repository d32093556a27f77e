//! Plot visualization configuration

use plotters::style::RGBColor;

/// Axis and legend wording for one chart
pub struct PlotLabels {
    pub title: &'static str,
    pub x_axis: &'static str,
    pub price_axis: &'static str,
    pub mention_axis: &'static str,
    pub price_legend: &'static str,
    pub mention_legend: &'static str,
}

pub struct PlotConfig {
    /// Output size in pixels (12 x 6 inches at 100 dpi)
    pub width_px: u32,
    pub height_px: u32,
    // matplotlib "tab:blue"
    pub price_color: RGBColor,
    // matplotlib "tab:orange"
    pub mention_color: RGBColor,
    pub background_color: RGBColor,
    pub grid_color: RGBColor,
    /// Opacity of the grid lines (0.0 = invisible, 1.0 = fully opaque)
    pub grid_opacity: f64,
    pub line_width: u32,
    /// Fractional headroom added above and below each y-axis range
    pub y_axis_padding_pct: f64,
    /// Number of date labels on the x axis
    pub x_label_count: usize,
    pub x_label_format: &'static str,
    pub title_font_size: u32,
    pub label_font_size: u32,
    pub margin_px: u32,
    /// Font family name the loaded font is registered under
    pub font_family: &'static str,
    /// Fonts tried in order when no `--font` is supplied
    pub font_search_paths: &'static [&'static str],
    pub labels: PlotLabels,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    width_px: 1200,
    height_px: 600,
    price_color: RGBColor(31, 119, 180),
    mention_color: RGBColor(255, 127, 14),
    background_color: RGBColor(255, 255, 255),
    grid_color: RGBColor(176, 176, 176),
    grid_opacity: 0.3,
    line_width: 2,
    y_axis_padding_pct: 0.05,
    x_label_count: 10,
    x_label_format: "%Y-%m-%d",
    title_font_size: 22,
    label_font_size: 14,
    margin_px: 16,
    font_family: "sans-serif",
    font_search_paths: &[
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
        "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
        "/Library/Fonts/Arial.ttf",
        "/System/Library/Fonts/Supplemental/Arial.ttf",
        "C:\\Windows\\Fonts\\arial.ttf",
    ],
    labels: PlotLabels {
        title: "Dogecoin Price vs Internet Mentions",
        x_axis: "Date",
        price_axis: "DOGE Price (USD)",
        mention_axis: "Number of Mentions",
        price_legend: "DOGE Price",
        mention_legend: "Mentions",
    },
};
