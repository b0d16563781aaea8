//! Pie chart widget.
//!
//! Draws a filled pie from chart slices onto the cell grid, with an
//! optional legend. Props contract: data + value/label formatters + style
//! knobs (height, minimum slice angle, legend/values toggles).
//!
//! Terminal cells are roughly twice as tall as wide, so the circle is
//! sampled with a 2:1 horizontal stretch to appear round.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{CHART_COLORS, MUTED_COLOR};
use crate::view::ChartSlice;

// ============================================================================
// PieChart
// ============================================================================

/// A widget that renders chart slices as a filled pie with a legend.
pub struct PieChart<'a> {
    /// Slices to draw, in order.
    data: &'a [ChartSlice],
    /// Formats a slice value for the legend value column.
    val_formatter: &'a dyn Fn(f64) -> String,
    /// Formats a slice for its legend label.
    label_formatter: &'a dyn Fn(&ChartSlice) -> String,
    /// Slice colors, cycled if there are more slices than colors.
    colors: &'a [Color],
    /// Maximum height of the pie itself, in rows.
    height: u16,
    /// Minimum sweep granted to every nonzero slice, in degrees.
    min_angle: f64,
    /// Whether to render the legend lines.
    show_legend: bool,
    /// Whether to render formatted values next to legend labels.
    show_values: bool,
    /// Whether the backing request is still in flight.
    is_loading: bool,
}

impl<'a> PieChart<'a> {
    /// Creates a new `PieChart` for the given slices and formatters.
    #[must_use]
    pub fn new(
        data: &'a [ChartSlice],
        val_formatter: &'a dyn Fn(f64) -> String,
        label_formatter: &'a dyn Fn(&ChartSlice) -> String,
    ) -> Self {
        Self {
            data,
            val_formatter,
            label_formatter,
            colors: &CHART_COLORS,
            height: u16::MAX,
            min_angle: 0.0,
            show_legend: true,
            show_values: true,
            is_loading: false,
        }
    }

    /// Sets the slice colors.
    #[must_use]
    pub const fn colors(mut self, colors: &'a [Color]) -> Self {
        self.colors = colors;
        self
    }

    /// Caps the pie height in rows.
    #[must_use]
    pub const fn height(mut self, height: u16) -> Self {
        self.height = height;
        self
    }

    /// Sets the minimum sweep per nonzero slice, in degrees.
    #[must_use]
    pub const fn min_angle(mut self, degrees: f64) -> Self {
        self.min_angle = degrees;
        self
    }

    /// Toggles the legend.
    #[must_use]
    pub const fn show_legend(mut self, show: bool) -> Self {
        self.show_legend = show;
        self
    }

    /// Toggles formatted values in the legend.
    #[must_use]
    pub const fn show_values(mut self, show: bool) -> Self {
        self.show_values = show;
        self
    }

    /// Sets the loading state.
    #[must_use]
    pub const fn loading(mut self, is_loading: bool) -> Self {
        self.is_loading = is_loading;
        self
    }

    fn slice_color(&self, index: usize) -> Color {
        if self.colors.is_empty() {
            MUTED_COLOR
        } else {
            self.colors[index % self.colors.len()]
        }
    }
}

impl Widget for PieChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        if self.is_loading {
            Paragraph::new("Loading chart...")
                .style(Style::default().fg(MUTED_COLOR))
                .alignment(Alignment::Center)
                .render(area, buf);
            return;
        }

        if self.data.is_empty() {
            Paragraph::new("No chart data")
                .style(Style::default().fg(MUTED_COLOR))
                .alignment(Alignment::Center)
                .render(area, buf);
            return;
        }

        let legend_rows = if self.show_legend {
            (self.data.len() as u16).min(area.height.saturating_sub(3))
        } else {
            0
        };

        let pie_area = Rect {
            height: area.height.saturating_sub(legend_rows).min(self.height),
            ..area
        };

        let spans = slice_angles(self.data, self.min_angle);
        render_pie(self.data, &spans, &self.colors_vec(), pie_area, buf);

        if legend_rows > 0 {
            let legend_area = Rect {
                y: pie_area.y + pie_area.height,
                height: legend_rows,
                ..area
            };
            self.render_legend(legend_area, buf);
        }
    }
}

impl PieChart<'_> {
    fn colors_vec(&self) -> Vec<Color> {
        (0..self.data.len()).map(|i| self.slice_color(i)).collect()
    }

    fn render_legend(&self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = self
            .data
            .iter()
            .take(area.height as usize)
            .enumerate()
            .map(|(i, slice)| {
                let mut spans = vec![
                    Span::styled("● ", Style::default().fg(self.slice_color(i))),
                    Span::raw((self.label_formatter)(slice)),
                ];
                if self.show_values {
                    spans.push(Span::styled(
                        format!("  {}", (self.val_formatter)(slice.value)),
                        Style::default().fg(MUTED_COLOR),
                    ));
                }
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines).render(area, buf);
    }
}

// ============================================================================
// Geometry
// ============================================================================

/// Computes `(start, end)` sweeps in degrees for each slice, clockwise
/// from twelve o'clock.
///
/// Every slice with a nonzero value gets at least `min_angle` degrees;
/// the boost is paid for by shrinking larger slices proportionally to
/// their excess. If the boosts cannot be funded (everything is tiny),
/// plain proportional sweeps are used.
#[must_use]
pub fn slice_angles(data: &[ChartSlice], min_angle: f64) -> Vec<(f64, f64)> {
    let total: f64 = data.iter().map(|s| s.value.max(0.0)).sum();
    if total <= 0.0 {
        return data.iter().map(|_| (0.0, 0.0)).collect();
    }

    let raw: Vec<f64> = data
        .iter()
        .map(|s| s.value.max(0.0) / total * 360.0)
        .collect();

    let deficit: f64 = raw
        .iter()
        .filter(|&&a| a > 0.0 && a < min_angle)
        .map(|a| min_angle - a)
        .sum();
    let excess: f64 = raw
        .iter()
        .filter(|&&a| a > min_angle)
        .map(|a| a - min_angle)
        .sum();

    let sweeps: Vec<f64> = if deficit > 0.0 && excess > deficit {
        let scale = (excess - deficit) / excess;
        raw.iter()
            .map(|&a| {
                if a <= 0.0 {
                    0.0
                } else if a < min_angle {
                    min_angle
                } else {
                    min_angle + (a - min_angle) * scale
                }
            })
            .collect()
    } else {
        raw
    };

    let mut angle = 0.0;
    sweeps
        .into_iter()
        .map(|sweep| {
            let start = angle;
            angle += sweep;
            (start, angle)
        })
        .collect()
}

/// Fills the pie circle cell by cell.
fn render_pie(
    data: &[ChartSlice],
    spans: &[(f64, f64)],
    colors: &[Color],
    area: Rect,
    buf: &mut Buffer,
) {
    if area.height < 2 || area.width < 4 || data.is_empty() {
        return;
    }

    let radius_y = f64::from(area.height - 1) / 2.0;
    // Cells are ~2x taller than wide; stretch horizontally to look round
    let radius_x = (radius_y * 2.0).min(f64::from(area.width - 1) / 2.0);
    let center_x = f64::from(area.x) + f64::from(area.width - 1) / 2.0;
    let center_y = f64::from(area.y) + f64::from(area.height - 1) / 2.0;

    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let nx = (f64::from(x) - center_x) / radius_x;
            let ny = (f64::from(y) - center_y) / radius_y;
            if nx * nx + ny * ny > 1.0 {
                continue;
            }

            // Clockwise angle from twelve o'clock
            let angle = (nx.atan2(-ny).to_degrees() + 360.0) % 360.0;
            let slice_index = spans
                .iter()
                .position(|&(start, end)| angle >= start && angle < end)
                .unwrap_or(spans.len().saturating_sub(1));

            if let Some(cell) = buf.cell_mut((x, y)) {
                let color = colors.get(slice_index).copied().unwrap_or(MUTED_COLOR);
                cell.set_char(' ').set_bg(color);
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
