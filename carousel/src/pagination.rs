use alloc::string::String;
use alloc::vec::Vec;

use crate::PaginationType;

pub const DEFAULT_PAGINATION_COLOR: &str = "#000";

const DOT_SIZE: f32 = 10.0;
const ACTIVE_BAR_WIDTH: f32 = 20.0;
const INACTIVE_OPACITY: f32 = 0.3;

/// Highlight of dot `dot_index` for a raw scroll offset, in `[0, 1]`.
///
/// Interpolates linearly over `[i - 1, i, i + 1] -> [0, 1, 0]` on `offset / item_width`, so the
/// highlight slides between neighbours while the user drags instead of snapping.
pub fn dot_intensity(offset: f32, item_width: f32, dot_index: usize) -> f32 {
    if !(item_width > 0.0) {
        return 0.0;
    }
    let d = offset / item_width - dot_index as f32;
    let dist = if d < 0.0 { -d } else { d };
    (1.0 - dist).clamp(0.0, 1.0)
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from * (1.0 - t) + to * t
}

/// Render values for one indicator dot.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DotVisual {
    pub index: usize,
    pub intensity: f32,
    pub width: f32,
    pub height: f32,
    pub opacity: f32,
}

/// Page indicator bound to the raw scroll offset.
#[derive(Clone, Debug, PartialEq)]
pub struct PaginationIndicator {
    count: usize,
    item_width: f32,
    kind: PaginationType,
    color: String,
}

impl PaginationIndicator {
    pub fn new(count: usize, item_width: f32, kind: PaginationType, color: String) -> Self {
        Self {
            count,
            item_width,
            kind,
            color,
        }
    }

    /// The indicator is only worth drawing for more than one page.
    pub fn is_visible_for(pagination: bool, count: usize) -> bool {
        pagination && count > 1
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn kind(&self) -> PaginationType {
        self.kind
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn dot(&self, offset: f32, index: usize) -> DotVisual {
        let intensity = dot_intensity(offset, self.item_width, index);
        let width = match self.kind {
            PaginationType::Default => lerp(DOT_SIZE, ACTIVE_BAR_WIDTH, intensity),
            PaginationType::Circle => DOT_SIZE,
        };
        DotVisual {
            index,
            intensity,
            width,
            height: DOT_SIZE,
            opacity: lerp(INACTIVE_OPACITY, 1.0, intensity),
        }
    }

    pub fn for_each_dot(&self, offset: f32, mut f: impl FnMut(DotVisual)) {
        for i in 0..self.count {
            f(self.dot(offset, i));
        }
    }

    pub fn dots(&self, offset: f32) -> Vec<DotVisual> {
        let mut out = Vec::with_capacity(self.count);
        self.for_each_dot(offset, |d| out.push(d));
        out
    }
}
