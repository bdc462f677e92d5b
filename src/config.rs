//! Carousel configuration: DOM selectors and timing.

use std::time::Duration;

/// Interval between automatic forward moves.
pub const AUTO_ADVANCE_DELAY: Duration = Duration::from_millis(2500);

/// Pause after a manual arrow click before auto-advance resumes.
pub const RESTART_DELAY: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselConfig {
    /// `id` of the container element holding `data-active`
    pub container_id: String,
    /// Class shared by every carousel item
    pub item_class: String,
    pub arrow_right_class: String,
    pub arrow_left_class: String,
    pub auto_advance: Duration,
    pub restart_delay: Duration,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            container_id: "carousel".into(),
            item_class: "item".into(),
            arrow_right_class: "arrow-right".into(),
            arrow_left_class: "arrow-left".into(),
            auto_advance: AUTO_ADVANCE_DELAY,
            restart_delay: RESTART_DELAY,
        }
    }
}

impl CarouselConfig {
    pub fn with_container_id(mut self, id: impl Into<String>) -> Self {
        self.container_id = id.into();
        self
    }

    pub fn with_item_class(mut self, class: impl Into<String>) -> Self {
        self.item_class = class.into();
        self
    }

    pub fn with_arrow_classes(mut self, left: impl Into<String>, right: impl Into<String>) -> Self {
        self.arrow_left_class = left.into();
        self.arrow_right_class = right.into();
        self
    }

    pub fn with_auto_advance(mut self, interval: Duration) -> Self {
        self.auto_advance = interval;
        self
    }

    pub fn with_restart_delay(mut self, delay: Duration) -> Self {
        self.restart_delay = delay;
        self
    }
}
