use std::f32::consts::TAU;

use gpui::*;

/// Straight segments in a full circle.
const SEGMENTS: usize = 96;

/// Circular progress arc, clockwise from twelve o'clock. `percent` is clamped
/// to 0–100; nothing is painted at 0.
pub fn progress_ring(percent: f32, stroke: Pixels, color: Hsla) -> Canvas<()> {
    canvas(
        |_bounds, _window, _cx| {},
        move |bounds, _, window, _cx| {
            let radius = (bounds.size.width - stroke) / 2.0;
            let points = arc_points(bounds.center(), radius, percent);
            let Some((first, rest)) = points.split_first() else {
                return;
            };

            let mut builder = PathBuilder::stroke(stroke);
            builder.move_to(*first);
            for p in rest {
                builder.line_to(*p);
            }
            match builder.build() {
                Ok(path) => window.paint_path(path, color),
                Err(e) => log::warn!("Failed to build progress ring: {e}"),
            }
        },
    )
}

/// Polyline approximating the arc for `percent` of a full turn.
fn arc_points(center: Point<Pixels>, radius: Pixels, percent: f32) -> Vec<Point<Pixels>> {
    let fraction = percent.clamp(0.0, 100.0) / 100.0;
    let steps = (fraction * SEGMENTS as f32).ceil() as usize;
    if steps == 0 {
        return Vec::new();
    }

    (0..=steps)
        .map(|i| {
            let angle = TAU * fraction * i as f32 / steps as f32;
            point(center.x + radius * angle.sin(), center.y - radius * angle.cos())
        })
        .collect()
}
