use carousel::{ItemLayoutCalculator, ScrollCommand, ViewabilityConfig};

/// Everything a paging widget needs to lay out and report on a carousel.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WidgetBinding {
    pub item_count: usize,
    /// Every item is wrapped in a container of exactly this width.
    pub item_width: f32,
    /// Layout hint: `layout.layout(i)` replaces on-demand measurement.
    pub layout: ItemLayoutCalculator,
    pub horizontal: bool,
    pub paging_enabled: bool,
    pub bounces: bool,
    pub snap_interval: f32,
    pub deceleration_rate: f32,
    pub end_reached_threshold: f32,
    pub scroll_event_throttle_ms: u64,
    pub viewability: ViewabilityConfig,
    pub initial_scroll_index: usize,
}

/// The external scrollable paging list.
///
/// The widget owns scrolling, rendering and touch handling. It reports scroll offsets,
/// viewability and end-of-list events back through [`crate::Controller`], and executes the
/// scroll commands it receives.
pub trait PagingWidget {
    fn bind(&mut self, binding: &WidgetBinding);

    /// Fire-and-forget; completion shows up as later viewability events.
    fn scroll_to_index(&mut self, command: ScrollCommand);
}

impl<W: PagingWidget + ?Sized> PagingWidget for &mut W {
    fn bind(&mut self, binding: &WidgetBinding) {
        (**self).bind(binding);
    }

    fn scroll_to_index(&mut self, command: ScrollCommand) {
        (**self).scroll_to_index(command);
    }
}
