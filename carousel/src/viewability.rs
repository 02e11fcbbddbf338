use alloc::vec;
use alloc::vec::Vec;

use crate::layout::ItemLayoutCalculator;
use crate::{ViewToken, ViewabilityEvent};

/// Coverage policy used to decide when an item counts as viewable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewabilityConfig {
    /// Percentage (0..=100) of the viewport an item must cover.
    pub view_area_coverage_percent_threshold: u8,
    /// Suppresses reports until the first user-initiated or programmatic scroll.
    pub wait_for_interaction: bool,
}

impl ViewabilityConfig {
    pub const DEFAULT_COVERAGE_PERCENT: u8 = 70;

    fn threshold(&self) -> f32 {
        f32::from(self.view_area_coverage_percent_threshold.min(100)) / 100.0
    }
}

impl Default for ViewabilityConfig {
    fn default() -> Self {
        Self {
            view_area_coverage_percent_threshold: Self::DEFAULT_COVERAGE_PERCENT,
            wait_for_interaction: true,
        }
    }
}

/// Turns scroll positions into discrete viewability changes.
///
/// Widgets that already report viewability only need [`ViewabilityTracker::forward`]. Widgets
/// that expose nothing but a scroll offset can feed [`ViewabilityTracker::on_scroll`], which
/// applies the coverage threshold against the shifted item layout.
#[derive(Clone, Debug)]
pub struct ViewabilityTracker {
    config: ViewabilityConfig,
    layout: ItemLayoutCalculator,
    viewable: Vec<usize>, // ascending
    interacted: bool,
}

impl ViewabilityTracker {
    pub fn new(config: ViewabilityConfig, layout: ItemLayoutCalculator) -> Self {
        Self {
            config,
            layout,
            viewable: Vec::new(),
            interacted: false,
        }
    }

    pub fn config(&self) -> ViewabilityConfig {
        self.config
    }

    /// Indexes currently considered viewable, ascending.
    pub fn viewable(&self) -> &[usize] {
        &self.viewable
    }

    pub fn has_interacted(&self) -> bool {
        self.interacted
    }

    /// Marks that a user drag or programmatic scroll happened.
    pub fn record_interaction(&mut self) {
        self.interacted = true;
    }

    pub fn reset(&mut self) {
        self.viewable.clear();
        self.interacted = false;
    }

    /// Keeps only the first reported change, in the widget's own order.
    pub fn forward(changed: &[ViewToken]) -> Option<ViewabilityEvent> {
        let first = changed.first()?;
        Some(ViewabilityEvent {
            changed: vec![*first],
        })
    }

    /// Recomputes the viewable set for a scroll position.
    ///
    /// Returns the changes since the previous call: newly viewable items first, then items that
    /// stopped being viewable, each group ascending. Returns an empty list while waiting for
    /// interaction or when nothing changed.
    pub fn on_scroll(&mut self, offset: f32, viewport_length: f32, count: usize) -> Vec<ViewToken> {
        if self.config.wait_for_interaction && !self.interacted {
            return Vec::new();
        }

        let next = self.compute_viewable(offset, viewport_length, count);
        let mut changed: Vec<ViewToken> = next
            .iter()
            .filter(|&&i| self.viewable.binary_search(&i).is_err())
            .map(|&i| ViewToken::viewable(i))
            .collect();
        changed.extend(
            self.viewable
                .iter()
                .filter(|&&i| next.binary_search(&i).is_err())
                .map(|&i| ViewToken::hidden(i)),
        );

        if !changed.is_empty() {
            ctrace!(
                offset,
                changed = changed.len(),
                "ViewabilityTracker::on_scroll"
            );
        }
        self.viewable = next;
        changed
    }

    fn compute_viewable(&self, offset: f32, viewport_length: f32, count: usize) -> Vec<usize> {
        let mut out = Vec::new();
        if !(viewport_length > 0.0) {
            return out;
        }
        let view_end = offset + viewport_length;
        let (Some(first), Some(last)) = (
            self.layout.item_at_offset(offset, count),
            self.layout.item_at_offset(view_end, count),
        ) else {
            return out;
        };

        let threshold = self.config.threshold();
        for index in first..=last {
            let item = self.layout.layout(index);
            let covered = item.end().min(view_end) - item.offset.max(offset);
            if covered > 0.0 && covered / viewport_length >= threshold {
                out.push(index);
            }
        }
        out
    }
}
