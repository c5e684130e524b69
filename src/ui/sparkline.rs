use {
    crate::{config::PLOT_CONFIG, ui::apply_opacity},
    eframe::egui::{Pos2, Rect, Response, Sense, Shape, Stroke, Ui, Vec2, Widget, pos2},
};

/// Tiny area chart of recent prices. Colour follows the trend sign.
pub struct Sparkline<'a> {
    points: &'a [f64],
    trend: f64,
    size: Vec2,
}

impl<'a> Sparkline<'a> {
    pub fn new(points: &'a [f64], trend: f64, size: Vec2) -> Self {
        Self {
            points,
            trend,
            size,
        }
    }
}

/// Maps samples onto `rect`, min at the bottom edge and max at the top.
/// A flat series sits on the bottom edge.
pub(crate) fn layout_points(points: &[f64], rect: Rect) -> Vec<Pos2> {
    if points.len() < 2 {
        return Vec::new();
    }
    let (min, max) = points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    let span = (max - min).max(f64::EPSILON);
    let last = (points.len() - 1) as f32;

    points
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let x = rect.left() + rect.width() * (i as f32 / last);
            let y = rect.bottom() - rect.height() * ((v - min) / span) as f32;
            pos2(x, y)
        })
        .collect()
}

impl Widget for Sparkline<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let (rect, response) = ui.allocate_exact_size(self.size, Sense::hover());
        if !ui.is_rect_visible(rect) {
            return response;
        }

        let line = layout_points(self.points, rect);
        if line.is_empty() {
            return response;
        }

        let color = if self.trend >= 0.0 {
            PLOT_CONFIG.sparkline_up_color
        } else {
            PLOT_CONFIG.sparkline_down_color
        };
        let fill = apply_opacity(color, PLOT_CONFIG.sparkline_fill_opacity);
        let painter = ui.painter_at(rect);

        // The area under a polyline is not convex, so fill it one column at a time.
        for pair in line.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            painter.add(Shape::convex_polygon(
                vec![a, b, pos2(b.x, rect.bottom()), pos2(a.x, rect.bottom())],
                fill,
                Stroke::NONE,
            ));
        }
        painter.add(Shape::line(
            line,
            Stroke::new(PLOT_CONFIG.sparkline_stroke_width, color),
        ));

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> Rect {
        Rect::from_min_size(pos2(0.0, 0.0), Vec2::new(100.0, 40.0))
    }

    #[test]
    fn extremes_touch_the_edges() {
        let pts = layout_points(&[10.0, 20.0, 15.0], rect());
        assert_eq!(pts.len(), 3);
        assert_eq!(pts[0], pos2(0.0, 40.0));
        assert_eq!(pts[1], pos2(50.0, 0.0));
        assert_eq!(pts[2].x, 100.0);
        assert!((pts[2].y - 20.0).abs() < 1e-4);
    }

    #[test]
    fn flat_series_sits_on_the_bottom() {
        let pts = layout_points(&[5.0, 5.0, 5.0, 5.0], rect());
        assert!(pts.iter().all(|p| p.y == 40.0));
    }

    #[test]
    fn too_few_points_draw_nothing() {
        assert!(layout_points(&[], rect()).is_empty());
        assert!(layout_points(&[1.0], rect()).is_empty());
    }
}
