// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Sketch canvas display and pointer handling.
//!
//! Shows the editor's rendered surface at its native resolution and turns
//! egui drag responses into canvas-relative pointer events.

use crate::editor::interaction::{CanvasBounds, PointerEvent};
use crate::editor::SketchEditor;
use crate::models::session::DragState;

/// Result of canvas interaction.
pub enum CanvasAction {
    None,
    Pointer(PointerEvent),
}

/// Display the sketch canvas and translate mouse input into pointer events.
pub fn show(
    ui: &mut egui::Ui,
    editor: &SketchEditor,
    texture: Option<&egui::TextureHandle>,
) -> CanvasAction {
    let mut action = CanvasAction::None;
    let config = editor.config();
    let size = egui::vec2(config.canvas_width as f32, config.canvas_height as f32);

    egui::ScrollArea::both().show(ui, |ui| {
        let (rect, response) = ui.allocate_exact_size(size, egui::Sense::drag());
        let painter = ui.painter_at(rect);

        match texture {
            Some(texture) => {
                painter.image(
                    texture.id(),
                    rect,
                    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                    egui::Color32::WHITE,
                );
            }
            None => {
                painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(0x1e, 0x29, 0x3b));
            }
        }

        let bounds = CanvasBounds {
            left: rect.min.x as f64,
            top: rect.min.y as f64,
            width: rect.width() as f64,
            height: rect.height() as f64,
        };
        let resolve = |pos: egui::Pos2| bounds.resolve(pos.x as f64, pos.y as f64);

        let (press_origin, pointer_pos, has_pointer) = ui.input(|i| {
            (
                i.pointer.press_origin(),
                i.pointer.interact_pos(),
                i.pointer.has_pointer(),
            )
        });

        let dragging = matches!(editor.session().drag(), DragState::Dragging { .. });

        if response.drag_started() {
            // Use the press position, not where the drag threshold was crossed
            if let Some(start) = press_origin.and_then(resolve) {
                action = CanvasAction::Pointer(PointerEvent::Down(start));
            }
        } else if response.drag_stopped() {
            action = CanvasAction::Pointer(PointerEvent::Up(pointer_pos.and_then(resolve)));
        } else if dragging && !has_pointer {
            action = CanvasAction::Pointer(PointerEvent::Leave);
        } else if response.dragged() {
            if let Some(current) = pointer_pos.and_then(resolve) {
                action = CanvasAction::Pointer(PointerEvent::Move(current));
            }
        }

        // Overlay-only preview of the draft rectangle
        if let DragState::Dragging { start, current } = editor.session().drag() {
            let a = rect.min + egui::vec2(start.x as f32, start.y as f32);
            let b = rect.min + egui::vec2(current.x as f32, current.y as f32);
            let color = editor.session().selected_type().color.to_egui();
            painter.rect_stroke(egui::Rect::from_two_pos(a, b), 0.0, egui::Stroke::new(1.0, color));
        }

        if editor.session().is_empty() {
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "Click and drag to draw the rooms of your house",
                egui::FontId::proportional(14.0),
                egui::Color32::from_gray(130),
            );
        }

        if dragging || response.hovered() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Crosshair);
        }
    });

    // Status line at the bottom
    ui.separator();
    ui.horizontal(|ui| {
        ui.label(format!("Room type: {}", editor.session().selected_type().label));
        ui.separator();
        ui.label(format!("Rooms: {}", editor.session().rooms().len()));
        ui.separator();
        ui.label(format!("Canvas: {}x{}", config.canvas_width, config.canvas_height));
    });

    action
}
