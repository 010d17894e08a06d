use pagedots_core::{render, Color as DotColor, IndicatorCanvas, MeasureSpec, Rect as DotRect};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Painter, Shape},
        Block, Borders,
    },
    Frame,
};

use crate::app::App;
use crate::theme::{to_ratatui, Theme};

/// Braille dots per terminal cell
const DOTS_X: u32 = 2;
const DOTS_Y: u32 = 4;

/// Filled shape in layout pixels (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
enum DotShape {
    Circle {
        x: i32,
        y: i32,
        radius: u32,
        color: Color,
    },
    RoundRect {
        rect: DotRect,
        corner_radius: u32,
        color: Color,
    },
}

impl DotShape {
    /// Check whether the pixel centered at (`px`, `py`) is covered
    fn covers(&self, px: f64, py: f64) -> bool {
        match *self {
            DotShape::Circle { x, y, radius, .. } => {
                let dx = px - x as f64;
                let dy = py - y as f64;
                dx * dx + dy * dy <= (radius as f64) * (radius as f64)
            }
            DotShape::RoundRect {
                rect,
                corner_radius,
                ..
            } => {
                if px < rect.left as f64 || px > rect.right as f64 {
                    return false;
                }
                if py < rect.top as f64 || py > rect.bottom as f64 {
                    return false;
                }
                // Distance to the rectangle shrunk by the corner radius
                let cr = corner_radius as f64;
                let cx = clamp_span(px, rect.left as f64 + cr, rect.right as f64 - cr);
                let cy = clamp_span(py, rect.top as f64 + cr, rect.bottom as f64 - cr);
                let dx = px - cx;
                let dy = py - cy;
                dx * dx + dy * dy <= cr * cr
            }
        }
    }

    fn color(&self) -> Color {
        match *self {
            DotShape::Circle { color, .. } | DotShape::RoundRect { color, .. } => color,
        }
    }

    /// Pixel bounds to sample, inclusive
    fn bounds(&self) -> (i32, i32, i32, i32) {
        match *self {
            DotShape::Circle { x, y, radius, .. } => {
                let r = radius as i32;
                (x - r, y - r, x + r, y + r)
            }
            DotShape::RoundRect { rect, .. } => (rect.left, rect.top, rect.right, rect.bottom),
        }
    }
}

/// Clamp `value` into `[lo, hi]`, collapsing an inverted span to its middle
fn clamp_span(value: f64, lo: f64, hi: f64) -> f64 {
    if lo > hi {
        (lo + hi) / 2.0
    } else {
        value.clamp(lo, hi)
    }
}

/// Collects the renderer's drawing calls as filled shapes
struct ShapeCollector {
    background: DotColor,
    shapes: Vec<DotShape>,
}

impl IndicatorCanvas for ShapeCollector {
    fn draw_circle(&mut self, x: i32, y: i32, radius: u32, color: DotColor) {
        self.shapes.push(DotShape::Circle {
            x,
            y,
            radius,
            color: to_ratatui(color.over(self.background)),
        });
    }

    fn draw_round_rect(&mut self, rect: DotRect, corner_radius: u32, color: DotColor) {
        self.shapes.push(DotShape::RoundRect {
            rect,
            corner_radius,
            color: to_ratatui(color.over(self.background)),
        });
    }
}

/// Shapes painted onto a braille canvas, one layout pixel per dot
struct IndicatorShapes {
    shapes: Vec<DotShape>,
    view_height: u32,
}

impl Shape for IndicatorShapes {
    fn draw(&self, painter: &mut Painter) {
        let height = self.view_height as f64;
        for shape in &self.shapes {
            let (left, top, right, bottom) = shape.bounds();
            for py in top..=bottom {
                for px in left..=right {
                    if !shape.covers(px as f64, py as f64) {
                        continue;
                    }
                    // Canvas y grows upward; sample the middle of the dot
                    let cx = px as f64 + 0.5;
                    let cy = height - py as f64 - 0.5;
                    if let Some((x, y)) = painter.get_point(cx, cy) {
                        painter.paint(x, y, shape.color());
                    }
                }
            }
        }
    }
}

/// Run the renderer, blending every color onto `background`
fn collect_shapes(app: &App, background: DotColor) -> Vec<DotShape> {
    let mut collector = ShapeCollector {
        background,
        shapes: Vec::new(),
    };
    render(&app.indicator, &mut collector);
    collector.shapes
}

pub struct IndicatorWidget;

impl IndicatorWidget {
    /// Terminal rows needed to show the row, borders included
    pub fn height(app: &App) -> u16 {
        let (_, height) = app
            .indicator
            .measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified);
        (height.div_ceil(DOTS_Y) + 2) as u16
    }

    pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
        let theme: &Theme = &app.theme;
        let title = format!(" {} ", app.indicator.animation_style());
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.grey1))
            .style(Style::default().bg(theme.bg0));
        let inner = block.inner(area);

        let width = inner.width as u32 * DOTS_X;
        let height = inner.height as u32 * DOTS_Y;
        app.indicator.set_view_size(width, height);

        let shapes = IndicatorShapes {
            shapes: collect_shapes(app, app.theme.background),
            view_height: height,
        };

        let canvas = Canvas::default()
            .block(block)
            .marker(Marker::Braille)
            .background_color(app.theme.bg0)
            .x_bounds([0.0, width as f64])
            .y_bounds([0.0, height as f64])
            .paint(|ctx| {
                ctx.draw(&shapes);
            });

        frame.render_widget(canvas, area);
    }
}
