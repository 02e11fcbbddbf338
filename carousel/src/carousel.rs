use alloc::vec::Vec;

use crate::error::validate_item_width;
use crate::{
    AutoplayScheduler, CarouselError, CarouselOptions, DotVisual, IndexState, ItemLayout,
    ItemLayoutCalculator, PaginationIndicator, ScrollCommand, Transition, ViewToken,
    ViewabilityTracker,
};

/// A headless paging carousel.
///
/// This type holds no UI objects. The adapter drives it with:
/// - `on_scroll` for every (throttled) scroll offset, which feeds the page indicator
/// - `on_viewable_items_changed` / `on_end_reached` for the widget's discrete callbacks
/// - `tick(now_ms)` from a frame or timer tick, which may return an autoplay scroll command
///
/// Construction is the mount: the index starts at 0, observers are told about it and autoplay
/// is armed. `teardown` is the unmount.
#[derive(Clone, Debug)]
pub struct Carousel<T> {
    options: CarouselOptions<T>,
    layout: ItemLayoutCalculator,
    tracker: ViewabilityTracker,
    state: IndexState,
    autoplay: AutoplayScheduler,
    pagination: Option<PaginationIndicator>,
    scroll_offset: f32,
    mounted: bool,
}

impl<T> Carousel<T> {
    /// Mounts a carousel.
    ///
    /// Fails when `options.item_width` is not a finite positive number.
    pub fn new(options: CarouselOptions<T>) -> Result<Self, CarouselError> {
        let item_width = validate_item_width(options.item_width)?;
        let layout = ItemLayoutCalculator::new(item_width);
        let len = options.data.len();
        let pagination = PaginationIndicator::is_visible_for(options.pagination, len).then(|| {
            PaginationIndicator::new(
                len,
                item_width,
                options.pagination_type,
                options.pagination_color.clone(),
            )
        });
        cdebug!(
            len,
            item_width,
            autoplay = options.autoplay.enabled,
            delay_ms = options.autoplay.delay_ms,
            "Carousel::new"
        );

        let mut c = Self {
            tracker: ViewabilityTracker::new(options.viewability, layout),
            layout,
            state: IndexState::new(),
            autoplay: AutoplayScheduler::new(),
            pagination,
            scroll_offset: 0.0,
            mounted: true,
            options,
        };
        c.notify_observers();
        let mount_time_ms = c.options.mount_time_ms;
        c.rearm(mount_time_ms);
        Ok(c)
    }

    pub fn options(&self) -> &CarouselOptions<T> {
        &self.options
    }

    pub fn data(&self) -> &[T] {
        &self.options.data
    }

    pub fn len(&self) -> usize {
        self.options.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.data.is_empty()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn state(&self) -> IndexState {
        self.state
    }

    pub fn raw_current_index(&self) -> i64 {
        self.state.current_index
    }

    pub fn end_reached(&self) -> bool {
        self.state.end_reached
    }

    /// The index as observers see it (clamped unless `clamp_index` is off).
    pub fn current_index(&self) -> i64 {
        if self.options.clamp_index {
            self.state.clamped_index(self.len()) as i64
        } else {
            self.state.current_index
        }
    }

    pub fn current_item(&self) -> Option<&T> {
        self.item_at(self.current_index())
    }

    fn item_at(&self, index: i64) -> Option<&T> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.options.data.get(i))
    }

    pub fn layout(&self) -> ItemLayoutCalculator {
        self.layout
    }

    pub fn item_layout(&self, index: usize) -> ItemLayout {
        self.layout.layout(index)
    }

    pub fn tracker(&self) -> &ViewabilityTracker {
        &self.tracker
    }

    pub fn autoplay_deadline_ms(&self) -> Option<u64> {
        self.autoplay.deadline_ms()
    }

    /// The page indicator, when requested and the list has more than one item.
    pub fn pagination(&self) -> Option<&PaginationIndicator> {
        self.pagination.as_ref()
    }

    pub fn pagination_dots(&self) -> Vec<DotVisual> {
        self.pagination
            .as_ref()
            .map(|p| p.dots(self.scroll_offset))
            .unwrap_or_default()
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Records the raw scroll offset for the page indicator.
    ///
    /// This does not move the index: only viewability and end-of-list callbacks do.
    pub fn on_scroll(&mut self, offset: f32) {
        if !self.mounted {
            return;
        }
        ctrace!(offset, "Carousel::on_scroll");
        self.scroll_offset = offset;
    }

    /// Marks a user drag (or other interaction) so the tracker starts reporting.
    pub fn record_interaction(&mut self) {
        self.tracker.record_interaction();
    }

    /// Handles the widget's viewability callback.
    pub fn on_viewable_items_changed(&mut self, changed: &[ViewToken], now_ms: u64) -> Transition {
        if !self.mounted {
            return Transition::default();
        }
        let Some(first) = ViewabilityTracker::forward(changed).and_then(|e| e.first()) else {
            return Transition::default();
        };
        let len = self.len();
        let t = self.state.on_viewability_changed(first.index, len);
        ctrace!(
            index = first.index,
            current_index = self.state.current_index,
            end_reached = self.state.end_reached,
            "Carousel::on_viewable_items_changed"
        );
        self.after_transition(t, now_ms);
        t
    }

    /// Derives viewability from a scroll position and applies it.
    ///
    /// For widgets that only report offsets. The coverage threshold and wait-for-interaction
    /// policy come from `options.viewability`. The indicator offset is left to `on_scroll`.
    pub fn apply_scroll_position(
        &mut self,
        offset: f32,
        viewport_length: f32,
        now_ms: u64,
    ) -> Transition {
        if !self.mounted {
            return Transition::default();
        }
        let len = self.len();
        let changed = self.tracker.on_scroll(offset, viewport_length, len);
        self.on_viewable_items_changed(&changed, now_ms)
    }

    /// Handles the widget's end-of-list callback.
    pub fn on_end_reached(&mut self, now_ms: u64) -> Transition {
        if !self.mounted {
            return Transition::default();
        }
        let t = self.state.on_end_reached();
        ctrace!(
            current_index = self.state.current_index,
            "Carousel::on_end_reached"
        );
        self.after_transition(t, now_ms);
        t
    }

    /// Advances the autoplay timer.
    ///
    /// Returns the scroll command to hand to the widget when the timer fires. The timer is
    /// re-armed immediately; the index only moves once the widget reports the new page.
    pub fn tick(&mut self, now_ms: u64) -> Option<ScrollCommand> {
        if !self.mounted || !self.options.autoplay.enabled {
            return None;
        }
        if !self.autoplay.poll(now_ms) {
            return None;
        }
        let cmd = AutoplayScheduler::next_command(&self.state);
        ctrace!(
            index = cmd.index,
            end_reached = self.state.end_reached,
            now_ms,
            "Carousel::tick autoplay"
        );
        self.tracker.record_interaction();
        self.rearm(now_ms);
        Some(cmd)
    }

    /// Unmounts: cancels the pending timer and resets all state.
    ///
    /// Every entry point is inert afterwards.
    pub fn teardown(&mut self) {
        if !self.mounted {
            return;
        }
        cdebug!(
            current_index = self.state.current_index,
            "Carousel::teardown"
        );
        self.autoplay.cancel_if_any();
        self.state = IndexState::new();
        self.tracker.reset();
        self.scroll_offset = 0.0;
        self.mounted = false;
    }

    fn after_transition(&mut self, t: Transition, now_ms: u64) {
        if t.index_changed {
            self.notify_observers();
        }
        if t.any() {
            self.rearm(now_ms);
        }
    }

    fn rearm(&mut self, now_ms: u64) {
        if self.options.autoplay.enabled {
            self.autoplay.arm(now_ms, self.options.autoplay.delay_ms);
        }
    }

    fn notify_observers(&self) {
        let len = self.len();
        if len > 0 && !self.state.is_in_range(len) {
            cwarn!(
                current_index = self.state.current_index,
                len,
                clamped = self.options.clamp_index,
                "Carousel: index out of range"
            );
        }
        let index = self.current_index();
        if let Some(cb) = &self.options.on_snap_to_item {
            cb(self.item_at(index));
        }
        if let Some(cb) = &self.options.get_current_index {
            cb(index);
        }
    }
}
