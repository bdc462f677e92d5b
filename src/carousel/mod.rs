//! Carousel controller bound to a parsed page.
//!
//! Binding resolves the container, items and their `data-index` values once.
//! After that, every move rewrites `data-active` on the container and the
//! level classes on each item, directly in the owned [`DomTree`].

pub mod autoplay;
pub mod level;

use std::time::Instant;

use crate::config::CarouselConfig;
use crate::dom::{DomNode, DomTree, NodePath};
use crate::error::CarouselError;

use autoplay::{AutoAdvance, TimerState};
use level::{calculate_level, transition_indices, Direction, Level, LEVEL_CLASSES, TRANSITION_CLASSES};

/// Host events the carousel reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEvent {
    ArrowRight,
    ArrowLeft,
    PointerEnter,
    PointerLeave,
}

/// A bound item: where it lives in the tree and its fixed index.
#[derive(Debug, Clone)]
pub struct CarouselItem {
    pub path: NodePath,
    pub index: usize,
}

/// Outcome of one display update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayUpdate {
    pub active: usize,
    /// Level per bound item, in document order
    pub levels: Vec<Level>,
    pub direction: Option<Direction>,
    /// `(leave, enter)` item indices for the move; computed only
    pub transition: Option<(usize, usize)>,
}

pub struct Carousel {
    tree: DomTree,
    container: NodePath,
    items: Vec<CarouselItem>,
    active: usize,
    timer: AutoAdvance,
    config: CarouselConfig,
}

impl Carousel {
    /// Bind to the carousel in `tree` without rendering or starting the timer.
    pub fn bind(tree: DomTree, config: CarouselConfig) -> Result<Self, CarouselError> {
        let container = tree
            .find_by_id(&config.container_id)
            .ok_or_else(|| CarouselError::ContainerNotFound(config.container_id.clone()))?;
        let container_node = tree
            .root
            .node_at(&container)
            .ok_or_else(|| CarouselError::ContainerNotFound(config.container_id.clone()))?;

        let item_class = config.item_class.as_str();
        let item_paths = container_node.find_all_paths(&|n: &DomNode| n.has_class(item_class));
        if item_paths.is_empty() {
            return Err(CarouselError::NoItems(config.item_class.clone()));
        }

        let total = item_paths.len();
        let items: Vec<CarouselItem> = item_paths
            .into_iter()
            .enumerate()
            .filter_map(|(position, rel)| {
                let node = container_node.node_at(&rel)?;
                let index = match parse_index(node.attr("data-index")) {
                    Some(i) => i,
                    None => {
                        log::warn!(
                            "item {} has no usable data-index, using document position",
                            position
                        );
                        position
                    }
                };
                let mut path = container.clone();
                path.extend(rel);
                Some(CarouselItem { path, index })
            })
            .collect();

        let active = match parse_index(container_node.attr("data-active")) {
            Some(i) => i % total,
            None => 0,
        };

        log::info!(
            "bound carousel #{} with {} items, active={}",
            config.container_id,
            total,
            active
        );

        let timer = AutoAdvance::new(config.auto_advance, config.restart_delay);
        Ok(Self {
            tree,
            container,
            items,
            active,
            timer,
            config,
        })
    }

    /// Bind, render the first frame and start auto-advance, like a page load.
    pub fn mount(tree: DomTree, config: CarouselConfig, now: Instant) -> Result<Self, CarouselError> {
        let mut carousel = Self::bind(tree, config)?;
        carousel.update_display(None);
        carousel.timer.start(now);
        Ok(carousel)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn items(&self) -> &[CarouselItem] {
        &self.items
    }

    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    pub fn timer(&self) -> &AutoAdvance {
        &self.timer
    }

    pub fn timer_state(&self) -> TimerState {
        self.timer.state()
    }

    pub fn item_node(&self, item: &CarouselItem) -> Option<&DomNode> {
        self.tree.root.node_at(&item.path)
    }

    /// Current level of every item, in document order.
    pub fn levels(&self) -> Vec<Level> {
        self.items
            .iter()
            .map(|item| calculate_level(item.index, self.active, self.items.len()))
            .collect()
    }

    /// Strip level and transition classes from every item, then apply each
    /// item's recomputed level class.
    pub fn update_display(&mut self, direction: Option<Direction>) -> DisplayUpdate {
        let total = self.items.len();
        let levels = self.levels();

        for (item, level) in self.items.iter().zip(&levels) {
            if let Some(node) = self.tree.root.node_at_mut(&item.path) {
                node.remove_classes(TRANSITION_CLASSES);
                node.remove_classes(LEVEL_CLASSES);
                node.add_class(&level.class_name());
            }
        }

        let transition = direction.map(|d| transition_indices(d, self.active, total));
        if let (Some(d), Some((leave, enter))) = (direction, transition) {
            log::trace!("{} move: leave={} enter={}", d.as_str(), leave, enter);
        }

        DisplayUpdate {
            active: self.active,
            levels,
            direction,
            transition,
        }
    }

    pub fn move_right(&mut self) -> DisplayUpdate {
        let total = self.items.len();
        self.set_active((self.active + 1) % total);
        self.update_display(Some(Direction::Right))
    }

    pub fn move_left(&mut self) -> DisplayUpdate {
        let total = self.items.len();
        self.set_active((self.active + total - 1) % total);
        self.update_display(Some(Direction::Left))
    }

    fn set_active(&mut self, active: usize) {
        log::debug!("active {} -> {}", self.active, active);
        self.active = active;
        if let Some(node) = self.tree.root.node_at_mut(&self.container) {
            node.set_attr("data-active", active.to_string());
        }
    }

    pub fn start(&mut self, now: Instant) {
        self.timer.start(now);
    }

    pub fn stop(&mut self) {
        self.timer.stop();
    }

    /// Dispatch a host event.
    pub fn handle(&mut self, event: CarouselEvent, now: Instant) {
        match event {
            CarouselEvent::ArrowRight => {
                self.timer.pause_for_manual(now);
                self.move_right();
            }
            CarouselEvent::ArrowLeft => {
                self.timer.pause_for_manual(now);
                self.move_left();
            }
            // hold, not stop: a pending post-click restart is dropped too
            CarouselEvent::PointerEnter => self.timer.hold(),
            CarouselEvent::PointerLeave => self.timer.start(now),
        }
    }

    /// Run the timer up to `now`; moves right at most once per call.
    pub fn tick(&mut self, now: Instant) -> Option<DisplayUpdate> {
        if self.timer.poll(now) {
            Some(self.move_right())
        } else {
            None
        }
    }

    /// Event fired by clicking `node`, if it is one of the configured arrows.
    pub fn arrow_event_for(&self, node: &DomNode) -> Option<CarouselEvent> {
        if node.has_class(&self.config.arrow_right_class) {
            Some(CarouselEvent::ArrowRight)
        } else if node.has_class(&self.config.arrow_left_class) {
            Some(CarouselEvent::ArrowLeft)
        } else {
            None
        }
    }
}

/// Indices beyond `u32` are treated as unusable, keeping level math in `i64` range.
fn parse_index(raw: Option<&str>) -> Option<usize> {
    raw.and_then(|s| s.trim().parse::<u32>().ok())
        .map(|i| i as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parser::parse_html;
    use std::time::Duration;

    const PAGE: &str = r#"
        <html><body>
          <div class="arrow-left">&lt;</div>
          <div id="carousel" data-active="0">
            <div class="item" data-index="0">A</div>
            <div class="item" data-index="1">B</div>
            <div class="item" data-index="2">C</div>
            <div class="item" data-index="3">D</div>
            <div class="item" data-index="4">E</div>
          </div>
          <div class="arrow-right">&gt;</div>
        </body></html>
    "#;

    fn mounted(now: Instant) -> Carousel {
        Carousel::mount(parse_html(PAGE, "test"), CarouselConfig::default(), now).expect("bind")
    }

    fn class_of(c: &Carousel, index: usize) -> String {
        let item = c.items().iter().find(|i| i.index == index).expect("item");
        c.item_node(item)
            .and_then(|n| n.attr("class"))
            .unwrap_or_default()
            .to_string()
    }

    fn container_active(c: &Carousel) -> Option<String> {
        let path = c.tree().find_by_id("carousel")?;
        c.tree().root.node_at(&path)?.attr("data-active").map(str::to_string)
    }

    fn centered_count(c: &Carousel) -> usize {
        c.items()
            .iter()
            .filter(|i| c.item_node(i).is_some_and(|n| n.has_class("level0")))
            .count()
    }

    #[test]
    fn mount_renders_and_starts() {
        let c = mounted(Instant::now());
        assert_eq!(c.len(), 5);
        assert_eq!(c.active_index(), 0);
        assert_eq!(c.timer_state(), TimerState::Running);
        assert_eq!(class_of(&c, 0), "item level0");
        assert_eq!(class_of(&c, 4), "item level1");
        assert_eq!(class_of(&c, 1), "item level-1");
    }

    #[test]
    fn right_arrow_end_to_end() {
        let t0 = Instant::now();
        let mut c = mounted(t0);
        c.handle(CarouselEvent::ArrowRight, t0);

        assert_eq!(c.active_index(), 1);
        assert_eq!(container_active(&c).as_deref(), Some("1"));
        assert_eq!(class_of(&c, 1), "item level0");
        assert_eq!(class_of(&c, 0), "item level1");
        assert_eq!(class_of(&c, 2), "item level-1");
        assert_eq!(class_of(&c, 3), "item level-2");
        assert_eq!(class_of(&c, 4), "item level2");
        assert_eq!(c.timer_state(), TimerState::Stopped);
        assert!(c.timer().restart_pending());
    }

    #[test]
    fn wraparound_both_ways() {
        let mut c = mounted(Instant::now());
        for _ in 0..4 {
            c.move_right();
        }
        assert_eq!(c.active_index(), 4);
        c.move_right();
        assert_eq!(c.active_index(), 0);
        c.move_left();
        assert_eq!(c.active_index(), 4);
        assert_eq!(container_active(&c).as_deref(), Some("4"));
    }

    #[test]
    fn exactly_one_centered_after_every_update() {
        let mut c = mounted(Instant::now());
        for step in 0..12 {
            if step % 3 == 0 {
                c.move_left();
            } else {
                c.move_right();
            }
            assert_eq!(centered_count(&c), 1);
        }
    }

    #[test]
    fn update_strips_stale_classes() {
        let html = r#"<div id="carousel" data-active="2">
            <div class="item level0 right-enter-active big" data-index="0"></div>
            <div class="item" data-index="1"></div>
            <div class="item level-1" data-index="2"></div>
        </div>"#;
        let mut c = Carousel::bind(parse_html(html, "t"), CarouselConfig::default()).expect("bind");
        c.update_display(None);
        assert_eq!(class_of(&c, 0), "item big level2");
        assert_eq!(class_of(&c, 2), "item level0");
    }

    #[test]
    fn direction_is_reported_but_not_rendered() {
        let mut c = mounted(Instant::now());
        let update = c.move_right();
        assert_eq!(update.direction, Some(Direction::Right));
        assert_eq!(update.transition, Some((0, 3)));
        for item in c.items() {
            let node = c.item_node(item).expect("node");
            assert!(TRANSITION_CLASSES.iter().all(|t| !node.has_class(t)));
        }

        let plain = c.update_display(None);
        assert_eq!(plain.transition, None);
        assert_eq!(plain.levels, update.levels);
    }

    #[test]
    fn auto_advance_moves_right() {
        let t0 = Instant::now();
        let mut c = mounted(t0);
        assert!(c.tick(t0 + Duration::from_millis(2499)).is_none());
        assert!(c.tick(t0 + Duration::from_millis(2500)).is_some());
        assert!(c.tick(t0 + Duration::from_millis(5000)).is_some());
        assert_eq!(c.active_index(), 2);
    }

    #[test]
    fn stalled_host_advances_one_item() {
        let t0 = Instant::now();
        let mut c = mounted(t0);
        let moved = c.tick(t0 + Duration::from_secs(10)).expect("due");
        assert_eq!(moved.active, 1);
        assert_eq!(c.active_index(), 1);
        assert!(c.tick(t0 + Duration::from_millis(12_499)).is_none());
        assert!(c.tick(t0 + Duration::from_millis(12_500)).is_some());
        assert_eq!(c.active_index(), 2);
    }

    #[test]
    fn stop_start_cycles_do_not_stack() {
        let t0 = Instant::now();
        let mut c = mounted(t0);
        for _ in 0..5 {
            c.stop();
            c.start(t0);
        }
        assert!(c.tick(t0 + Duration::from_millis(2500)).is_some());
        assert_eq!(c.active_index(), 1);

        c.stop();
        assert!(c.tick(t0 + Duration::from_secs(60)).is_none());
        assert_eq!(c.timer_state(), TimerState::Stopped);
    }

    #[test]
    fn manual_click_pauses_then_resumes() {
        let t0 = Instant::now();
        let mut c = mounted(t0);
        c.handle(CarouselEvent::ArrowLeft, t0 + Duration::from_millis(1000));
        assert_eq!(c.active_index(), 4);

        // nothing moves during the pause
        assert!(c.tick(t0 + Duration::from_millis(5999)).is_none());
        // restart at 6000, first advance at 8500
        assert!(c.tick(t0 + Duration::from_millis(8500)).is_some());
        assert_eq!(c.active_index(), 0);
    }

    #[test]
    fn hover_pauses_until_leave() {
        let t0 = Instant::now();
        let mut c = mounted(t0);
        c.handle(CarouselEvent::ArrowRight, t0);
        c.handle(CarouselEvent::PointerEnter, t0 + Duration::from_millis(100));
        assert!(c.tick(t0 + Duration::from_secs(30)).is_none());
        assert_eq!(c.active_index(), 1);

        let leave = t0 + Duration::from_secs(31);
        c.handle(CarouselEvent::PointerLeave, leave);
        assert_eq!(c.timer_state(), TimerState::Running);
        assert!(c.tick(leave + Duration::from_millis(2500)).is_some());
        assert_eq!(c.active_index(), 2);
    }

    #[test]
    fn lenient_attribute_parsing() {
        let html = r#"<div id="carousel" data-active="7">
            <div class="item" data-index="0"></div>
            <div class="item" data-index="x"></div>
            <div class="item"></div>
        </div>"#;
        let c = Carousel::bind(parse_html(html, "t"), CarouselConfig::default()).expect("bind");
        assert_eq!(c.active_index(), 1);
        let indices: Vec<usize> = c.items().iter().map(|i| i.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);

        let html = r#"<div id="carousel" data-active="99999999999">
            <div class="item" data-index="0"></div>
            <div class="item" data-index="99999999999"></div>
        </div>"#;
        let c = Carousel::bind(parse_html(html, "t"), CarouselConfig::default()).expect("bind");
        assert_eq!(c.active_index(), 0);
        assert_eq!(c.items()[1].index, 1);

        let html = r#"<div id="carousel"><div class="item" data-index="0"></div></div>"#;
        let c = Carousel::bind(parse_html(html, "t"), CarouselConfig::default()).expect("bind");
        assert_eq!(c.active_index(), 0);
    }

    #[test]
    fn bind_errors() {
        let err = Carousel::bind(parse_html("<p>no carousel</p>", "t"), CarouselConfig::default())
            .err()
            .expect("missing container");
        assert!(matches!(err, CarouselError::ContainerNotFound(ref id) if id == "carousel"));

        let err = Carousel::bind(
            parse_html(r#"<div id="carousel"><p>x</p></div>"#, "t"),
            CarouselConfig::default(),
        )
        .err()
        .expect("no items");
        assert!(matches!(err, CarouselError::NoItems(_)));
    }

    #[test]
    fn custom_selectors() {
        let html = r#"<section id="hero"><img class="slide" data-index="0"><img class="slide" data-index="1"></section>
            <button class="next"></button>"#;
        let cfg = CarouselConfig::default()
            .with_container_id("hero")
            .with_item_class("slide")
            .with_arrow_classes("prev", "next");
        let c = Carousel::mount(parse_html(html, "t"), cfg, Instant::now()).expect("bind");
        assert_eq!(c.len(), 2);

        let tree = c.tree();
        let button = tree
            .root
            .find_path(&|n: &DomNode| n.tag == "button")
            .and_then(|p| tree.root.node_at(&p))
            .expect("button");
        assert_eq!(c.arrow_event_for(button), Some(CarouselEvent::ArrowRight));
    }
}
