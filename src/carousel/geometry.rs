//! Pure layout math for clone-padded strips.
//!
//! Every function here works on measurements handed in by the caller; none of
//! them remember anything between calls. The controller re-reads geometry
//! from the strip on every settle cycle and passes it through these.

/// Position and width of one item, measured from the start of the strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemGeometry {
    pub offset: f64,
    pub width: f64,
}

impl ItemGeometry {
    pub fn new(offset: f64, width: f64) -> Self {
        Self { offset, width }
    }

    pub fn midpoint(&self) -> f64 {
        self.offset + self.width / 2.0
    }
}

/// The visible window of a scroll container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Current horizontal scroll offset.
    pub scroll_left: f64,
    /// Visible width of the container.
    pub width: f64,
}

impl Viewport {
    pub fn midpoint(&self) -> f64 {
        self.scroll_left + self.width / 2.0
    }
}

/// Index of the item whose midpoint is closest to the viewport midpoint.
///
/// Ties go to the lower index: distances are compared with strict less-than,
/// so a later item only wins when it is strictly closer. Returns `None` for an
/// empty strip.
pub fn centered_index(viewport: Viewport, items: &[ItemGeometry]) -> Option<usize> {
    let center = viewport.midpoint();
    let mut closest = None;
    let mut min_distance = f64::INFINITY;
    for (i, item) in items.iter().enumerate() {
        let distance = (center - item.midpoint()).abs();
        if distance < min_distance {
            min_distance = distance;
            closest = Some(i);
        }
    }
    closest
}

/// Scroll offset that puts `item` in the middle of a viewport `viewport_width` wide.
pub fn center_offset(item: ItemGeometry, viewport_width: f64) -> f64 {
    item.midpoint() - viewport_width / 2.0
}

/// Distance of one arrow/keyboard step: the measured width of the centered
/// item plus the inter-item gap.
///
/// A zero (or unmeasurable) width means the strip is hidden; the step then
/// falls back to `fallback` so navigation never degenerates to a no-op scroll.
pub fn step_width(centered: Option<ItemGeometry>, gap: f64, fallback: f64) -> f64 {
    match centered {
        Some(item) if item.width > 0.0 => item.width + gap,
        _ => fallback,
    }
}

/// Whether an item sits within half its own width of the viewport midpoint.
pub fn is_focused(viewport: Viewport, item: ItemGeometry) -> bool {
    (viewport.midpoint() - item.midpoint()).abs() < item.width / 2.0
}

/// Where a boundary clone teleports to.
///
/// For a padded strip of `len` items (`[clone_last, real_1 .. real_N,
/// clone_first]`), index `0` maps to the real last item at `len - 2` and index
/// `len - 1` maps to the real first item at `1`. Interior indices return `None`.
pub fn teleport_target(index: usize, len: usize) -> Option<usize> {
    if len < 3 {
        return None;
    }
    if index == 0 {
        Some(len - 2)
    } else if index == len - 1 {
        Some(1)
    } else {
        None
    }
}

/// Map a padded index onto the real item it shows. Clones map to the item
/// they duplicate; interior indices map to themselves.
pub fn real_index(index: usize, len: usize) -> usize {
    teleport_target(index, len).unwrap_or(index)
}
