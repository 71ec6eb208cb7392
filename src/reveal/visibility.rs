use crate::{foundation::core::Rect, reveal::config::VisibilityOptions};

/// Fraction of `target`'s area that lies inside `root`, in `[0, 1]`.
///
/// A zero-area target counts as fully visible when it sits inside `root`.
pub fn intersection_ratio(target: Rect, root: Rect) -> f64 {
    let (t, r) = (target.abs(), root.abs());
    let x0 = t.x0.max(r.x0);
    let y0 = t.y0.max(r.y0);
    let x1 = t.x1.min(r.x1);
    let y1 = t.y1.min(r.y1);
    if x1 < x0 || y1 < y0 {
        return 0.0;
    }

    let area = t.area();
    if area <= 0.0 {
        return 1.0;
    }
    ((x1 - x0) * (y1 - y0) / area).clamp(0.0, 1.0)
}

/// The viewport-intersection signal for one block.
///
/// `viewport` is the visible window in document coordinates; the configured root
/// margin is applied before testing.
pub fn is_intersecting(target: Rect, viewport: Rect, opts: &VisibilityOptions) -> bool {
    let root = opts.root_margin.apply(viewport);
    if root.width() < 0.0 || root.height() < 0.0 {
        return false;
    }
    let ratio = intersection_ratio(target, root);
    ratio > 0.0 && ratio >= opts.threshold
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/visibility.rs"]
mod tests;
