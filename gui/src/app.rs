use std::time::Instant;

use eframe::egui;
use eframe::egui::{Color32, ScrollArea, Ui};
use life_shared::{Frame, Rgb, Simulation};

const CANVAS_BACKGROUND: Color32 = Color32::WHITE;
const ERROR_COLOR: Color32 = Color32::from_rgb(0xC0, 0x20, 0x20);
const RULE_INPUT_WIDTH: f32 = 60.0;

pub struct GuiOfLife {
    simulation: Simulation,
    frame: Option<Frame>,
    selected_preset: usize,
    born_input: String,
    survive_input: String,
    message: Option<String>,
}

impl GuiOfLife {
    pub fn new(_cc: &eframe::CreationContext<'_>, simulation: Simulation) -> Self {
        let rule = simulation.rule();
        Self {
            simulation,
            frame: None,
            selected_preset: 0,
            born_input: rule.born.to_string(),
            survive_input: rule.survive.to_string(),
            message: None,
        }
    }

    fn report(&mut self, result: life_shared::Result<()>) {
        match result {
            Ok(()) => self.message = None,
            Err(err) => {
                log::warn!("{err}");
                self.message = Some(err.to_string());
            }
        }
    }

    fn controls(&mut self, ui: &mut Ui) {
        let running = self.simulation.is_running();

        ui.horizontal(|ui| {
            let start_label = if running { "Pause" } else { "Start" };
            if ui.button(start_label).clicked() {
                self.simulation.toggle();
            }
            if ui.add_enabled(!running, egui::Button::new("Next")).clicked() {
                self.simulation.step();
            }
            if ui
                .add_enabled(!self.simulation.is_fastest(), egui::Button::new("Faster"))
                .clicked()
            {
                self.simulation.faster();
            }
            if ui.button("Slower").clicked() {
                self.simulation.slower();
            }
            if ui.button("Clear").clicked() {
                self.simulation.clear();
            }
            if ui.button("Random").clicked() {
                self.simulation.randomize();
            }
        });

        ui.horizontal(|ui| {
            let names: Vec<String> = self.simulation.preset_names().map(str::to_owned).collect();
            let selected_text = names.get(self.selected_preset).cloned().unwrap_or_default();
            egui::ComboBox::from_label("Preset")
                .selected_text(selected_text)
                .show_ui(ui, |ui| {
                    for (index, name) in names.iter().enumerate() {
                        ui.selectable_value(&mut self.selected_preset, index, name);
                    }
                });
            if ui.button("Load").clicked() {
                let result = self.simulation.apply_preset(self.selected_preset);
                self.report(result);
            }

            ui.separator();

            ui.label("B");
            let born = ui.add_enabled(
                !running,
                egui::TextEdit::singleline(&mut self.born_input).desired_width(RULE_INPUT_WIDTH),
            );
            if born.changed() {
                let result = self.simulation.set_born_rule(&self.born_input);
                self.report(result);
            }
            ui.label("S");
            let survive = ui.add_enabled(
                !running,
                egui::TextEdit::singleline(&mut self.survive_input).desired_width(RULE_INPUT_WIDTH),
            );
            if survive.changed() {
                let result = self.simulation.set_survive_rule(&self.survive_input);
                self.report(result);
            }
        });

        ui.horizontal(|ui| {
            ui.label(format!("Population: {}", self.simulation.population()));
            ui.separator();
            ui.label(format!("Generation: {}", self.simulation.generation()));
            ui.separator();
            ui.label(format!("Delay: {} ms", self.simulation.delay().as_millis()));
            ui.separator();
            ui.label(format!("Rule: {}", self.simulation.rule()));
        });

        if let Some(message) = &self.message {
            ui.colored_label(ERROR_COLOR, message);
        }
    }

    fn canvas(&mut self, ui: &mut Ui) {
        let scale = self.simulation.config().scale as f32;
        let (rect, response) = ui.allocate_exact_size(
            egui::vec2(
                scale * self.simulation.cols() as f32,
                scale * self.simulation.rows() as f32,
            ),
            egui::Sense::click(),
        );

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let local = pos - rect.min;
                self.simulation.click_at(local.x, local.y);
            }
        }

        if let Some(frame) = self.simulation.take_frame() {
            self.frame = Some(frame);
        }

        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, CANVAS_BACKGROUND);
        let Some(frame) = &self.frame else {
            return;
        };
        for j in 0..frame.rows {
            for i in 0..frame.cols {
                let Some(color) = frame.color(i, j) else {
                    continue;
                };
                // One pixel of background between cells draws the grid lines.
                let pos = rect.min + egui::vec2(i as f32 * scale + 1.0, j as f32 * scale + 1.0);
                painter.rect_filled(
                    egui::Rect::from_min_size(pos, egui::vec2(scale - 1.0, scale - 1.0)),
                    0.0,
                    to_color32(color),
                );
            }
        }
    }
}

fn to_color32([r, g, b]: Rgb) -> Color32 {
    Color32::from_rgb(r, g, b)
}

impl eframe::App for GuiOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.simulation.poll(now);

        if !ctx.wants_keyboard_input() && ctx.input(|i| i.key_pressed(egui::Key::L)) {
            log::info!("living cells: {}", self.simulation.living_coords_literal());
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::both().show(ui, |ui| {
                ui.heading("Game of Life");
                self.controls(ui);
                self.canvas(ui);
            });
        });

        // Highlights shown this frame fade on the next one.
        if self.simulation.is_dirty() {
            ctx.request_repaint();
        } else if let Some(wait) = self.simulation.next_tick_in(Instant::now()) {
            ctx.request_repaint_after(wait);
        }
    }
}
