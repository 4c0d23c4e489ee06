// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Toolbar and room type selection UI.
//!
//! One selectable button per catalog entry plus the sketch reset button.

use crate::models::room::CATALOG;

/// Result of toolbar interaction.
pub enum ToolbarAction {
    None,
    Select(usize),
    Reset,
}

/// Display the toolbar with room type buttons.
pub fn show(ui: &mut egui::Ui, selected: usize, has_rooms: bool) -> ToolbarAction {
    let mut action = ToolbarAction::None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        ui.label("Room type:");

        ui.separator();

        for (index, room_type) in CATALOG.iter().enumerate() {
            let text = egui::RichText::new(format!("■ {}", room_type.label))
                .color(room_type.color.to_egui());
            if ui
                .selectable_label(selected == index, text)
                .on_hover_text(format!("Shortcut: {}", index + 1))
                .clicked()
            {
                action = ToolbarAction::Select(index);
            }
        }

        ui.separator();

        if ui
            .add_enabled(has_rooms, egui::Button::new("🗑 Clear sketch"))
            .clicked()
        {
            action = ToolbarAction::Reset;
        }

        ui.separator();

        ui.label(
            egui::RichText::new("Click and drag on the canvas to draw a room")
                .italics()
                .weak(),
        );
    });

    action
}
