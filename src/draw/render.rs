//! Cairo-based rendering functions for strokes.

use super::color::Color;
use super::drawing::Snapshot;
use super::stroke::{Stroke, StrokeKind};

/// Fills the entire target with an opaque background color.
///
/// Uses the SOURCE operator so whatever was on the surface before is
/// replaced outright rather than blended.
pub fn render_background(ctx: &cairo::Context, color: Color) {
    let _ = ctx.save();
    ctx.set_operator(cairo::Operator::Source);
    color.apply_to(ctx);
    let _ = ctx.paint();
    let _ = ctx.restore();
}

/// Repaints a whole drawing: background first, then every stroke in order.
///
/// Strokes are composited on a transparent ink group that is laid over the
/// background once all of them are drawn. Eraser strokes cut holes in that
/// group, so they reveal the background through every stroke painted
/// before them, never the previous contents of the surface.
pub fn render_drawing(ctx: &cairo::Context, snapshot: Snapshot<'_>, background: Color) {
    render_background(ctx, background);

    if snapshot.is_empty() {
        return;
    }

    ctx.push_group();
    render_strokes(ctx, snapshot.iter());
    match ctx.pop_group_to_source() {
        Ok(()) => {
            let _ = ctx.paint();
        }
        Err(err) => log::error!("Failed to composite stroke layer: {err}"),
    }
}

/// Renders strokes in the order given (first stroke = bottom).
pub fn render_strokes<'a>(ctx: &cairo::Context, strokes: impl IntoIterator<Item = &'a Stroke>) {
    for stroke in strokes {
        render_stroke(ctx, stroke);
    }
}

/// Render one stroke as a polyline through its points.
///
/// Brush strokes paint OVER what is below; eraser strokes use DEST_OUT and
/// remove coverage in proportion to their color's alpha. A stroke with a
/// single point has no segment and leaves no mark.
pub fn render_stroke(ctx: &cairo::Context, stroke: &Stroke) {
    let Some((first, rest)) = stroke.points().split_first() else {
        return;
    };

    let _ = ctx.save();

    ctx.set_operator(match stroke.kind() {
        StrokeKind::Brush => cairo::Operator::Over,
        StrokeKind::Eraser => cairo::Operator::DestOut,
    });
    stroke.color().apply_to(ctx);
    ctx.set_line_width(stroke.width());
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    ctx.move_to(first.x, first.y);
    for point in rest {
        ctx.line_to(point.x, point.y);
    }

    let _ = ctx.stroke();
    let _ = ctx.restore();
}
