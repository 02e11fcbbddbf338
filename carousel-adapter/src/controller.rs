use alloc::vec::Vec;

use carousel::{
    Carousel, CarouselError, CarouselOptions, ItemLayout, ScrollCommand, Transition, ViewToken,
};

use crate::{
    EndReachedDetector, Frame, PaginationFrame, PagingWidget, ScrollThrottle, WidgetBinding,
    DEFAULT_END_REACHED_THRESHOLD, DEFAULT_SCROLL_EVENT_THROTTLE_MS,
};

/// A framework-neutral controller that wires a [`carousel::Carousel`] to a paging widget.
///
/// This type does not draw anything. Adapters drive it by calling:
/// - `on_scroll` for every scroll frame (throttled before it reaches the page indicator)
/// - `on_viewable_items_changed` / `on_end_reached` when the widget reports them
/// - `tick(now_ms)` each frame/timer tick, which forwards autoplay commands to the widget
///
/// and render whatever `frame()` describes.
#[derive(Debug)]
pub struct Controller<T, W, P = ()> {
    carousel: Carousel<T>,
    widget: W,
    throttle: ScrollThrottle,
    end_reached: EndReachedDetector,
    placeholder: Option<P>,
}

impl<T, W: PagingWidget, P> Controller<T, W, P> {
    /// Mounts the carousel and binds it to `widget`.
    pub fn mount(options: CarouselOptions<T>, mut widget: W) -> Result<Self, CarouselError> {
        let carousel = Carousel::new(options)?;
        let binding = Self::binding_for(&carousel);
        adebug!(
            item_count = binding.item_count,
            item_width = binding.item_width,
            "Controller::mount"
        );
        widget.bind(&binding);
        Ok(Self {
            carousel,
            widget,
            throttle: ScrollThrottle::new(binding.scroll_event_throttle_ms),
            end_reached: EndReachedDetector::new(binding.end_reached_threshold),
            placeholder: None,
        })
    }

    fn binding_for(carousel: &Carousel<T>) -> WidgetBinding {
        let layout = carousel.layout();
        let options = carousel.options();
        WidgetBinding {
            item_count: carousel.len(),
            item_width: layout.item_width(),
            layout,
            horizontal: true,
            paging_enabled: true,
            bounces: options.bounces,
            snap_interval: layout.item_width(),
            deceleration_rate: 0.0,
            end_reached_threshold: DEFAULT_END_REACHED_THRESHOLD,
            scroll_event_throttle_ms: DEFAULT_SCROLL_EVENT_THROTTLE_MS,
            viewability: options.viewability,
            initial_scroll_index: 0,
        }
    }

    /// Content shown in place of the list when there are no items.
    pub fn with_placeholder(mut self, placeholder: P) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn carousel(&self) -> &Carousel<T> {
        &self.carousel
    }

    pub fn widget(&self) -> &W {
        &self.widget
    }

    pub fn widget_mut(&mut self) -> &mut W {
        &mut self.widget
    }

    pub fn into_widget(self) -> W {
        self.widget
    }

    /// Per-frame scroll offset from the widget.
    ///
    /// Returns `true` when the offset reached the page indicator.
    pub fn on_scroll(&mut self, offset: f32, now_ms: u64) -> bool {
        if !self.carousel.is_mounted() {
            return false;
        }
        match self.throttle.push(offset, now_ms) {
            Some(off) => {
                self.carousel.on_scroll(off);
                true
            }
            None => false,
        }
    }

    /// The user started dragging.
    pub fn on_scroll_begin_drag(&mut self) {
        self.carousel.record_interaction();
    }

    pub fn on_viewable_items_changed(&mut self, changed: &[ViewToken], now_ms: u64) -> Transition {
        self.carousel.on_viewable_items_changed(changed, now_ms)
    }

    pub fn on_end_reached(&mut self, now_ms: u64) -> Transition {
        self.carousel.on_end_reached(now_ms)
    }

    /// For widgets that report only offsets: derives viewability and the end-of-list signal.
    pub fn on_scroll_frame(&mut self, offset: f32, viewport_length: f32, now_ms: u64) -> Transition {
        if !self.carousel.is_mounted() {
            return Transition::default();
        }
        self.on_scroll(offset, now_ms);
        let mut t = self
            .carousel
            .apply_scroll_position(offset, viewport_length, now_ms);

        let content_length = self.carousel.layout().content_length(self.carousel.len());
        if self
            .end_reached
            .on_scroll(offset, viewport_length, content_length)
        {
            let e = self.carousel.on_end_reached(now_ms);
            t.index_changed |= e.index_changed;
            t.end_reached_changed |= e.end_reached_changed;
        }
        t
    }

    /// Advances timers. Sends an autoplay command to the widget when one fires.
    pub fn tick(&mut self, now_ms: u64) -> Option<ScrollCommand> {
        if let Some(off) = self.throttle.flush(now_ms) {
            self.carousel.on_scroll(off);
        }
        let cmd = self.carousel.tick(now_ms)?;
        atrace!(index = cmd.index, now_ms, "Controller::tick scroll_to_index");
        self.widget.scroll_to_index(cmd);
        Some(cmd)
    }

    /// Calls `f` with every item and its fixed-width layout, in order.
    pub fn for_each_item(&self, mut f: impl FnMut(&T, ItemLayout)) {
        for (i, item) in self.carousel.data().iter().enumerate() {
            f(item, self.carousel.item_layout(i));
        }
    }

    pub fn frame(&self) -> Frame<'_, P> {
        if self.carousel.is_empty() {
            return Frame::Placeholder {
                item_width: self.carousel.layout().item_width(),
                content: self.placeholder.as_ref(),
            };
        }

        let layouts: Vec<ItemLayout> = (0..self.carousel.len())
            .map(|i| self.carousel.item_layout(i))
            .collect();
        let pagination = self.carousel.pagination().map(|p| PaginationFrame {
            kind: p.kind(),
            color: p.color(),
            dots: self.carousel.pagination_dots(),
        });
        Frame::Items {
            layouts,
            current_index: self.carousel.current_index(),
            pagination,
        }
    }

    /// Tears the carousel down. No scroll command reaches the widget afterwards.
    pub fn unmount(&mut self) {
        adebug!("Controller::unmount");
        self.carousel.teardown();
        self.throttle.reset();
        self.end_reached.reset();
    }
}
