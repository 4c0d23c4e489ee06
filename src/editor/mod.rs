// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Manual floor-plan sketch editor.
//!
//! `SketchEditor` owns one sketch session together with its rendered
//! surface. Every change to the room set redraws the surface before the
//! call returns, so the surface always reflects the current rooms. Exports
//! are handed to the host through the callback given at construction; the
//! editor does no network or persistence work of its own.

pub mod interaction;

use crate::config::EditorConfig;
use crate::export::ExportPayload;
use crate::models::document::SketchDocument;
use crate::models::session::Session;
use crate::render::Renderer;
use anyhow::Result;
use image::RgbaImage;
use interaction::{Outcome, PointerEvent};

/// Host callback receiving each export.
pub type ExportCallback = Box<dyn FnMut(ExportPayload)>;

pub struct SketchEditor {
    config: EditorConfig,
    session: Session,
    renderer: Renderer,
    surface: RgbaImage,
    on_export: ExportCallback,
}

impl SketchEditor {
    /// Create an editor with an empty session.
    pub fn new(config: EditorConfig, on_export: impl FnMut(ExportPayload) + 'static) -> Self {
        let renderer = Renderer::new(&config);
        let session = Session::new();
        let surface = renderer.render(session.rooms());
        Self {
            config,
            session,
            renderer,
            surface,
            on_export: Box::new(on_export),
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The current raster of the sketch.
    pub fn surface(&self) -> &RgbaImage {
        &self.surface
    }

    /// Changes whenever the room set (and so the surface) changes.
    pub fn revision(&self) -> u64 {
        self.session.revision()
    }

    pub fn select_type(&mut self, index: usize) {
        self.session.select_type(index);
    }

    /// Feed a pointer event through the drag state machine.
    pub fn handle(&mut self, event: PointerEvent) -> Outcome {
        let outcome = interaction::apply(&mut self.session, event, self.config.min_room_size);
        if outcome.changed_rooms() {
            self.redraw();
        }
        outcome
    }

    /// Clear every room.
    pub fn reset(&mut self) {
        let had_rooms = !self.session.is_empty();
        self.session.reset();
        if had_rooms {
            log::info!("Sketch cleared");
        }
        self.redraw();
    }

    /// Whether an export would produce anything.
    pub fn can_export(&self) -> bool {
        !self.session.is_empty()
    }

    /// Encode the surface and pass it to the host callback.
    ///
    /// Returns `false` without calling back when there are no rooms.
    pub fn request_export(&mut self) -> Result<bool> {
        if !self.can_export() {
            return Ok(false);
        }

        let payload = ExportPayload::encode(&self.surface)?;
        log::info!(
            "Exported sketch with {} rooms ({}x{}, {} bytes)",
            self.session.rooms().len(),
            payload.width,
            payload.height,
            payload.png.len()
        );
        (self.on_export)(payload);
        Ok(true)
    }

    /// Snapshot of the layout for saving.
    pub fn document(&self) -> SketchDocument {
        SketchDocument::new(
            self.config.canvas_width,
            self.config.canvas_height,
            self.session.rooms().to_vec(),
        )
    }

    /// Replace the room set with a loaded layout. Returns the number of
    /// rooms dropped for bad geometry or a label outside the catalog.
    pub fn load_document(&mut self, document: SketchDocument) -> usize {
        if (document.canvas_width, document.canvas_height) != self.renderer.size() {
            log::warn!(
                "Layout was drawn on a {}x{} canvas, editor canvas is {}x{}",
                document.canvas_width,
                document.canvas_height,
                self.config.canvas_width,
                self.config.canvas_height
            );
        }

        let dropped = self.session.replace_rooms(document.rooms, self.config.min_room_size);
        if dropped > 0 {
            log::warn!("Dropped {} invalid rooms from the layout", dropped);
        }
        log::info!("Loaded layout with {} rooms", self.session.rooms().len());
        self.redraw();
        dropped
    }

    fn redraw(&mut self) {
        self.renderer.draw(&mut self.surface, self.session.rooms());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::room::{Point, Rgb, Room, RoomId, CATALOG};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn editor() -> (SketchEditor, Rc<RefCell<Vec<ExportPayload>>>) {
        let exports = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&exports);
        let editor = SketchEditor::new(EditorConfig::default(), move |payload| {
            sink.borrow_mut().push(payload)
        });
        (editor, exports)
    }

    fn drag(editor: &mut SketchEditor, a: (f64, f64), b: (f64, f64)) -> Outcome {
        editor.handle(PointerEvent::Down(Point::new(a.0, a.1)));
        editor.handle(PointerEvent::Up(Some(Point::new(b.0, b.1))))
    }

    #[test]
    fn test_quarto_scenario_exports_image() {
        let (mut editor, exports) = editor();
        editor.select_type(1);
        drag(&mut editor, (10.0, 10.0), (110.0, 90.0));

        let room = &editor.session().rooms()[0];
        assert_eq!((room.x, room.y, room.width, room.height), (10.0, 10.0, 100.0, 80.0));
        assert_eq!(room.label, "Quarto");

        assert!(editor.request_export().unwrap());
        let exports = exports.borrow();
        assert_eq!(exports.len(), 1);
        assert!(!exports[0].png.is_empty());
        assert!(exports[0].data_uri().starts_with("data:image/png;base64,"));

        // Export leaves the sketch editable
        assert_eq!(editor.session().rooms().len(), 1);
    }

    #[test]
    fn test_tiny_drag_leaves_rooms_unchanged() {
        let (mut editor, _) = editor();
        drag(&mut editor, (10.0, 10.0), (110.0, 90.0));
        let before = editor.session().rooms().to_vec();

        assert_eq!(drag(&mut editor, (5.0, 5.0), (8.0, 8.0)), Outcome::Discarded);
        assert_eq!(editor.session().rooms(), &before[..]);
    }

    #[test]
    fn test_reset_disables_export() {
        let (mut editor, exports) = editor();
        assert!(!editor.can_export());

        drag(&mut editor, (10.0, 10.0), (110.0, 90.0));
        drag(&mut editor, (200.0, 200.0), (300.0, 260.0));
        assert!(editor.can_export());

        editor.reset();
        assert_eq!(editor.session().rooms().len(), 0);
        assert!(!editor.can_export());
        assert!(!editor.request_export().unwrap());
        assert!(exports.borrow().is_empty());

        editor.reset();
        assert!(editor.session().is_empty());
    }

    #[test]
    fn test_surface_tracks_rooms() {
        let (mut editor, _) = editor();
        let empty = editor.surface().clone();

        drag(&mut editor, (10.0, 10.0), (110.0, 90.0));
        assert_ne!(*editor.surface(), empty);

        editor.reset();
        assert_eq!(*editor.surface(), empty);
    }

    #[test]
    fn test_same_rooms_render_identically() {
        let (mut a, _) = editor();
        let (mut b, _) = editor();

        // Different event histories reaching the same room set
        drag(&mut a, (10.0, 10.0), (110.0, 90.0));
        drag(&mut a, (300.0, 300.0), (200.0, 200.0));

        drag(&mut b, (50.0, 50.0), (52.0, 52.0));
        drag(&mut b, (110.0, 90.0), (10.0, 10.0));
        b.handle(PointerEvent::Down(Point::new(0.0, 0.0)));
        b.handle(PointerEvent::Leave);
        drag(&mut b, (200.0, 300.0), (300.0, 200.0));

        assert_eq!(a.surface(), b.surface());
    }

    #[test]
    fn test_document_roundtrip() {
        let (mut editor, _) = editor();
        editor.select_type(3);
        drag(&mut editor, (10.0, 10.0), (110.0, 90.0));
        let document = editor.document();
        let surface = editor.surface().clone();

        editor.reset();
        assert_eq!(editor.load_document(document), 0);
        assert_eq!(editor.session().rooms().len(), 1);
        assert_eq!(editor.session().rooms()[0].label, "Banheiro");
        assert_eq!(*editor.surface(), surface);
    }

    fn loaded(label: &str, x: f64, y: f64, width: f64, height: f64) -> Room {
        Room {
            id: RoomId(7),
            x,
            y,
            width,
            height,
            label: label.to_string(),
            color: Rgb(1, 2, 3),
        }
    }

    #[test]
    fn test_load_huge_room_renders_clipped() {
        let (mut editor, _) = editor();
        let document = SketchDocument::new(600, 400, vec![loaded("Sala", 0.0, 0.0, 1e300, 1e300)]);

        assert_eq!(editor.load_document(document), 0);
        assert_eq!(editor.session().rooms().len(), 1);
        assert_eq!(*editor.surface().get_pixel(0, 200), image::Rgba([0x3b, 0x82, 0xf6, 0xff]));
        assert!(editor.request_export().unwrap());
    }

    #[test]
    fn test_load_rejects_unknown_labels_and_recolors() {
        let (mut editor, _) = editor();
        let document = SketchDocument::new(
            600,
            400,
            vec![
                loaded("Piscina", 10.0, 10.0, 100.0, 80.0),
                loaded("Cozinha", 200.0, 200.0, 100.0, 80.0),
                loaded("Sala", 0.0, 0.0, f64::INFINITY, 50.0),
            ],
        );

        assert_eq!(editor.load_document(document), 2);
        let rooms = editor.session().rooms();
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].label, "Cozinha");
        assert_eq!(rooms[0].color, CATALOG[2].color);
    }
}
