// ui.rs - Grid display, click-to-toggle input and the command buttons

use eframe::egui;
use egui::{Color32, Rect, Stroke, pos2, vec2};
use tracing::warn;

use life_engine::{PATTERNS, SimulationController, SimulationState, Viewport};

pub struct ConwayApp {
    controller: SimulationController,
    selected_pattern: usize,
    live_color: Color32,
    line_color: Color32,
    status: Option<String>,
}

impl ConwayApp {
    pub fn new(controller: SimulationController) -> Self {
        Self {
            controller,
            selected_pattern: 0,
            live_color: Color32::BLACK,
            line_color: Color32::from_gray(90),
            status: None,
        }
    }

    fn commands(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("start").clicked() {
                self.controller.start();
                self.status = None;
            }
            if ui.button("stop").clicked() {
                self.controller.stop();
                self.status = None;
            }
            if ui.button("generation").clicked() && self.controller.step().is_ignored() {
                self.status = Some("stop the simulation to step manually".to_string());
            }

            ui.separator();

            if ui.button("clear").clicked() {
                self.controller.stop();
                self.controller.engine().clear();
                self.status = None;
            }

            egui::ComboBox::from_id_source("pattern_selector")
                .selected_text(PATTERNS[self.selected_pattern].name)
                .show_ui(ui, |ui| {
                    for (i, pattern) in PATTERNS.iter().enumerate() {
                        ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                    }
                });

            if ui.button("apply pattern").clicked() {
                self.apply_selected_pattern();
            }
        });

        let snapshot = self.controller.engine().snapshot();
        let state = match self.controller.state() {
            SimulationState::Running => "running",
            SimulationState::Stopped => "stopped",
        };
        ui.horizontal(|ui| {
            ui.label(format!("{state} | generation {}", snapshot.generation));
            ui.label(format!("live cells {} / {}", snapshot.population(), snapshot.size().area()));
            if let Some(status) = &self.status {
                ui.separator();
                ui.label(status.as_str());
            }
        });
    }

    fn apply_selected_pattern(&mut self) {
        let pattern = &PATTERNS[self.selected_pattern];
        let engine = self.controller.engine();
        self.controller.stop();
        match engine.load_pattern(pattern, pattern.centered_origin(engine.size())) {
            Ok(_) => self.status = None,
            Err(err) => {
                warn!(pattern = pattern.name, %err, "pattern does not fit");
                self.status = Some(format!("{} does not fit this grid", pattern.name));
            }
        }
    }

    fn board(&self, ui: &mut egui::Ui) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::click());
        let area = response.rect;
        let engine = self.controller.engine();
        let viewport = Viewport::new(area.width(), area.height(), engine.size());

        // Toggle first so this frame already shows the edit.
        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let local = pos - area.min;
                if let Some((col, row)) = viewport.cell_at(local.x, local.y) {
                    // Viewport clamps into range, so this cannot be rejected.
                    let _ = engine.toggle_cell(col, row);
                }
            }
        }

        let snapshot = engine.snapshot();
        painter.rect_filled(area, 0.0, Color32::WHITE);

        for (col, row) in snapshot.alive_cells() {
            let cell = viewport.cell_rect(col, row);
            let rect = Rect::from_min_size(
                area.min + vec2(cell.x, cell.y),
                vec2(cell.width, cell.height),
            );
            painter.rect_filled(rect, 0.0, self.live_color);
        }

        let stroke = Stroke::new(1.0, self.line_color);
        for (from, to) in viewport.grid_lines() {
            painter.line_segment(
                [
                    pos2(area.min.x + from[0], area.min.y + from[1]),
                    pos2(area.min.x + to[0], area.min.y + to[1]),
                ],
                stroke,
            );
        }
    }
}

impl eframe::App for ConwayApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("commands").show(ctx, |ui| {
            self.commands(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.board(ui);
        });
    }
}
