use alloc::string::String;
use alloc::sync::Arc;

use crate::pagination::DEFAULT_PAGINATION_COLOR;
use crate::{AutoplayConfig, PaginationType, ViewabilityConfig};

/// Receives the item at the current index (`None` when there is no such item).
pub type OnSnapToItemCallback<T> = Arc<dyn Fn(Option<&T>) + Send + Sync>;

/// Receives the current index as an integer.
pub type GetCurrentIndexCallback = Arc<dyn Fn(i64) + Send + Sync>;

/// Configuration for [`crate::Carousel`].
///
/// Options are fixed for the lifetime of a mounted carousel. Items and callbacks live behind
/// `Arc`s so cloning options is cheap.
pub struct CarouselOptions<T> {
    pub data: Arc<[T]>,
    /// Width of one page along the scroll axis. Must be finite and positive.
    pub item_width: f32,
    /// Whether the widget may overscroll past the edges.
    pub bounces: bool,
    /// Requests the page indicator. It is still hidden for fewer than two items.
    pub pagination: bool,
    pub pagination_color: String,
    pub pagination_type: PaginationType,
    pub autoplay: AutoplayConfig,
    pub viewability: ViewabilityConfig,
    pub on_snap_to_item: Option<OnSnapToItemCallback<T>>,
    pub get_current_index: Option<GetCurrentIndexCallback>,
    /// Clamp the index handed to observers to `[0, len - 1]`.
    ///
    /// The internal register keeps the unclamped value either way.
    pub clamp_index: bool,
    /// Adapter clock value at mount. The first autoplay deadline is measured from here.
    pub mount_time_ms: u64,
}

impl<T> Clone for CarouselOptions<T> {
    fn clone(&self) -> Self {
        Self {
            data: Arc::clone(&self.data),
            item_width: self.item_width,
            bounces: self.bounces,
            pagination: self.pagination,
            pagination_color: self.pagination_color.clone(),
            pagination_type: self.pagination_type,
            autoplay: self.autoplay,
            viewability: self.viewability,
            on_snap_to_item: self.on_snap_to_item.clone(),
            get_current_index: self.get_current_index.clone(),
            clamp_index: self.clamp_index,
            mount_time_ms: self.mount_time_ms,
        }
    }
}

impl<T> CarouselOptions<T> {
    pub fn new(data: impl Into<Arc<[T]>>, item_width: f32) -> Self {
        Self {
            data: data.into(),
            item_width,
            bounces: true,
            pagination: false,
            pagination_color: String::from(DEFAULT_PAGINATION_COLOR),
            pagination_type: PaginationType::default(),
            autoplay: AutoplayConfig::default(),
            viewability: ViewabilityConfig::default(),
            on_snap_to_item: None,
            get_current_index: None,
            clamp_index: true,
            mount_time_ms: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn with_bounces(mut self, bounces: bool) -> Self {
        self.bounces = bounces;
        self
    }

    pub fn with_pagination(mut self, pagination: bool) -> Self {
        self.pagination = pagination;
        self
    }

    pub fn with_pagination_color(mut self, color: impl Into<String>) -> Self {
        self.pagination_color = color.into();
        self
    }

    pub fn with_pagination_type(mut self, pagination_type: PaginationType) -> Self {
        self.pagination_type = pagination_type;
        self
    }

    pub fn with_autoplay(mut self, enabled: bool) -> Self {
        self.autoplay.enabled = enabled;
        self
    }

    /// Sets the autoplay delay. `None` keeps the 2500 ms default.
    pub fn with_autoplay_delay_ms(mut self, delay_ms: Option<u64>) -> Self {
        self.autoplay.delay_ms = delay_ms.unwrap_or(AutoplayConfig::DEFAULT_DELAY_MS);
        self
    }

    pub fn with_viewability(mut self, viewability: ViewabilityConfig) -> Self {
        self.viewability = viewability;
        self
    }

    pub fn with_on_snap_to_item(
        mut self,
        on_snap_to_item: Option<impl Fn(Option<&T>) + Send + Sync + 'static>,
    ) -> Self {
        self.on_snap_to_item = on_snap_to_item.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_get_current_index(
        mut self,
        get_current_index: Option<impl Fn(i64) + Send + Sync + 'static>,
    ) -> Self {
        self.get_current_index = get_current_index.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_clamp_index(mut self, clamp_index: bool) -> Self {
        self.clamp_index = clamp_index;
        self
    }

    pub fn with_mount_time_ms(mut self, now_ms: u64) -> Self {
        self.mount_time_ms = now_ms;
        self
    }
}

impl<T> core::fmt::Debug for CarouselOptions<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselOptions")
            .field("len", &self.data.len())
            .field("item_width", &self.item_width)
            .field("bounces", &self.bounces)
            .field("pagination", &self.pagination)
            .field("pagination_color", &self.pagination_color)
            .field("pagination_type", &self.pagination_type)
            .field("autoplay", &self.autoplay)
            .field("viewability", &self.viewability)
            .field("clamp_index", &self.clamp_index)
            .field("mount_time_ms", &self.mount_time_ms)
            .finish_non_exhaustive()
    }
}
