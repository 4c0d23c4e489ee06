// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Plan request panel.
//!
//! Holds the house parameters form, the list of drawn rooms, the export
//! button and the plans requested so far.

use crate::models::room::Room;
use crate::plan::{GenerationRequest, HouseStyle, PlanRecord};

/// Result of properties panel interaction.
pub enum PropertiesAction {
    None,
    Export,
    DownloadSketch(usize),
    SaveRequest(usize),
}

/// Display the plan request panel.
pub fn show(
    ui: &mut egui::Ui,
    request: &mut GenerationRequest,
    notes: &mut String,
    rooms: &[Room],
    plans: &[PlanRecord],
) -> PropertiesAction {
    let mut action = PropertiesAction::None;

    ui.heading("Plan request");
    ui.separator();

    egui::Grid::new("request_form")
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            ui.label("Style");
            egui::ComboBox::from_id_source("house_style")
                .selected_text(request.style.label())
                .show_ui(ui, |ui| {
                    for style in HouseStyle::ALL {
                        ui.selectable_value(&mut request.style, style, style.label());
                    }
                });
            ui.end_row();

            ui.label("Area (m²)");
            ui.add(egui::DragValue::new(&mut request.size).range(1..=10_000));
            ui.end_row();

            ui.label("Bedrooms");
            ui.add(egui::DragValue::new(&mut request.rooms).range(1..=50));
            ui.end_row();

            ui.label("Floors");
            ui.add(egui::DragValue::new(&mut request.floors).range(1..=10));
            ui.end_row();
        });

    ui.label("Notes");
    ui.add(
        egui::TextEdit::multiline(notes)
            .hint_text("e.g. a winter garden and a skylight...")
            .desired_rows(4)
            .desired_width(f32::INFINITY),
    );

    ui.add_space(8.0);

    let can_export = !rooms.is_empty();
    let button = egui::Button::new("Turn sketch into plan request").min_size(egui::vec2(ui.available_width(), 32.0));
    if ui
        .add_enabled(can_export, button)
        .on_disabled_hover_text("Draw at least one room first")
        .clicked()
    {
        action = PropertiesAction::Export;
    }

    ui.add_space(8.0);
    ui.separator();

    ui.heading(format!("Rooms ({})", rooms.len()));
    egui::ScrollArea::vertical()
        .id_source("room_list")
        .max_height(160.0)
        .show(ui, |ui| {
            if rooms.is_empty() {
                ui.label(egui::RichText::new("No rooms drawn").weak());
            }
            for room in rooms {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("■").color(room.color.to_egui()))
                        .on_hover_text(room.color.hex());
                    ui.label(&room.label);
                    ui.label(
                        egui::RichText::new(format!(
                            "({:.0}, {:.0}) {:.0}×{:.0}",
                            room.x, room.y, room.width, room.height
                        ))
                        .weak(),
                    );
                });
            }
        });

    ui.separator();

    ui.heading(format!("Plans ({})", plans.len()));
    egui::ScrollArea::vertical()
        .id_source("plan_list")
        .show(ui, |ui| {
            for (index, plan) in plans.iter().enumerate() {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.label(egui::RichText::new(format!("Plan {}", plan.id)).strong());
                    ui.label(format!(
                        "{} · {} m² · {} bedrooms · {} floor(s)",
                        plan.request.style, plan.request.size, plan.request.rooms, plan.request.floors
                    ));
                    if let Some(notes) = &plan.request.additional_notes {
                        ui.label(egui::RichText::new(format!("\"{}\"", notes)).italics().weak());
                    }
                    ui.horizontal(|ui| {
                        if ui.button("Download sketch").clicked() {
                            action = PropertiesAction::DownloadSketch(index);
                        }
                        if ui.button("Save request").clicked() {
                            action = PropertiesAction::SaveRequest(index);
                        }
                    });
                });
            }
        });

    action
}
