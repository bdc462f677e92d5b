//! Carousel drawing for `CarouselApp`.
//!
//! Items are laid out on a single row by level: level 0 centred and largest,
//! each step outward smaller and dimmer. Levels beyond ±2 are not drawn.
//! Hovering the row pauses auto-advance; the page's arrow elements become
//! buttons on either side.

use std::time::Instant;

use eframe::egui;

use dom_carousel::carousel::level::MAX_LEVEL;
use dom_carousel::dom::DomNode;
use dom_carousel::{Carousel, CarouselEvent};

use super::CarouselApp;

const CARD_SIZE: egui::Vec2 = egui::vec2(180.0, 240.0);
const CARD_SPACING: f32 = 150.0;

struct Arrow {
    event: CarouselEvent,
    label: String,
}

impl CarouselApp {
    pub fn draw_content(&mut self, ui: &mut egui::Ui) {
        if let Some(err) = &self.error {
            ui.colored_label(egui::Color32::from_rgb(255, 80, 80), err);
            return;
        }
        let Some(carousel) = self.carousel.as_mut() else {
            ui.centered_and_justified(|ui| ui.spinner());
            return;
        };

        let arrows = collect_arrows(carousel);
        let mut events = Vec::new();

        ui.horizontal_centered(|ui| {
            for arrow in arrows.iter().filter(|a| a.event == CarouselEvent::ArrowLeft) {
                if ui.button(&arrow.label).clicked() {
                    events.push(arrow.event);
                }
            }

            let width = (ui.available_width() - 60.0).max(CARD_SIZE.x);
            let (rect, response) =
                ui.allocate_exact_size(egui::vec2(width, CARD_SIZE.y + 20.0), egui::Sense::hover());
            paint_items(ui, rect, carousel);

            let inside = response.hovered();
            if inside != self.pointer_inside {
                events.push(if inside {
                    CarouselEvent::PointerEnter
                } else {
                    CarouselEvent::PointerLeave
                });
                self.pointer_inside = inside;
            }

            for arrow in arrows.iter().filter(|a| a.event == CarouselEvent::ArrowRight) {
                if ui.button(&arrow.label).clicked() {
                    events.push(arrow.event);
                }
            }
        });

        let now = Instant::now();
        for event in events {
            log::debug!("event {:?}", event);
            carousel.handle(event, now);
        }
    }
}

/// Arrow elements found anywhere in the page, in document order.
fn collect_arrows(carousel: &Carousel) -> Vec<Arrow> {
    let root = &carousel.tree().root;
    root.find_all_paths(&|n: &DomNode| carousel.arrow_event_for(n).is_some())
        .iter()
        .filter_map(|p| root.node_at(p))
        .filter_map(|node| {
            let event = carousel.arrow_event_for(node)?;
            let text = node.collect_text();
            let label = if text.is_empty() {
                match event {
                    CarouselEvent::ArrowLeft => "\u{25C0}".to_string(),
                    _ => "\u{25B6}".to_string(),
                }
            } else {
                text
            };
            Some(Arrow { event, label })
        })
        .collect()
}

fn paint_items(ui: &egui::Ui, rect: egui::Rect, carousel: &Carousel) {
    let painter = ui.painter_at(rect);
    let visuals = ui.visuals();

    let mut placed: Vec<_> = carousel
        .items()
        .iter()
        .zip(carousel.levels())
        .filter(|(_, level)| level.value().abs() <= MAX_LEVEL)
        .collect();
    // outermost first so the centre card paints on top
    placed.sort_by_key(|(_, level)| std::cmp::Reverse(level.value().abs()));

    for (item, level) in placed {
        let distance = level.value().abs() as f32;
        let scale = 1.0 - 0.2 * distance;
        let center = egui::pos2(
            rect.center().x - level.value() as f32 * CARD_SPACING,
            rect.center().y,
        );
        let card = egui::Rect::from_center_size(center, CARD_SIZE * scale);

        let fill = if level.is_center() {
            visuals.selection.bg_fill
        } else {
            visuals.widgets.inactive.bg_fill.gamma_multiply(1.0 - 0.25 * distance)
        };
        painter.rect_filled(card, 8.0, fill);
        painter.rect_stroke(card, 8.0, visuals.widgets.noninteractive.bg_stroke);

        let label = carousel
            .item_node(item)
            .map(item_label)
            .unwrap_or_else(|| format!("#{}", item.index));
        painter.text(
            card.center(),
            egui::Align2::CENTER_CENTER,
            label,
            egui::FontId::proportional(18.0 * scale),
            visuals.strong_text_color(),
        );
        painter.text(
            card.center_bottom() - egui::vec2(0.0, 12.0),
            egui::Align2::CENTER_BOTTOM,
            level.class_name(),
            egui::FontId::monospace(11.0 * scale),
            visuals.weak_text_color(),
        );
    }
}

/// Visible text of an item, falling back to an image's `alt`.
fn item_label(node: &DomNode) -> String {
    let text = node.collect_text();
    if !text.is_empty() {
        return text;
    }
    node.attr("alt")
        .or_else(|| node.attr("data-index"))
        .unwrap_or("")
        .to_string()
}
