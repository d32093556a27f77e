// Dual-axis chart: a plain description of the figure, and a plotters renderer for it
pub mod figure;
pub mod fonts;
pub mod render;

pub use figure::{AxisSide, ChartLabels, DualAxisFigure, LegendPosition};
pub use render::{RenderOptions, render_png};
