//! Toolbar rendering for `CarouselApp`: source bar, reload, timer status.

use eframe::egui;

use dom_carousel::carousel::autoplay::TimerState;

use super::CarouselApp;

impl CarouselApp {
    pub fn draw_toolbar(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.horizontal(|ui| {
            ui.add_space(4.0);

            let response = ui.add_sized(
                [(ui.available_width() - 260.0).max(80.0), 24.0],
                egui::TextEdit::singleline(&mut self.source_input)
                    .hint_text("File path or URL (empty = demo)")
                    .font(egui::TextStyle::Monospace),
            );
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                self.load_input(ctx);
            }
            if ui.button("Load").clicked() {
                self.load_input(ctx);
            }

            ui.separator();

            if let Some(carousel) = &self.carousel {
                let (label, color) = match carousel.timer_state() {
                    TimerState::Running => ("\u{25B6} auto", egui::Color32::from_rgb(0, 180, 0)),
                    TimerState::Stopped if carousel.timer().restart_pending() => {
                        ("\u{23F8} resuming", egui::Color32::from_rgb(220, 160, 0))
                    }
                    TimerState::Stopped => ("\u{23F8} paused", egui::Color32::GRAY),
                };
                ui.colored_label(color, label);
                ui.label(format!(
                    "{}/{}",
                    carousel.active_index() + 1,
                    carousel.len()
                ));
            } else if self.loading {
                ui.spinner();
            }

            let dark_label = if self.dark_mode { "\u{263E}" } else { "\u{2600}" };
            if ui.button(dark_label).clicked() {
                self.dark_mode = !self.dark_mode;
            }
        });
    }
}
