// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module contains the main application structure that implements
//! the egui::App trait. It hosts the sketch editor, receives its exports
//! and turns them into plan requests.

use crate::config::EditorConfig;
use crate::editor::interaction::PointerEvent;
use crate::editor::SketchEditor;
use crate::export::{download_filename, request_filename, ExportPayload};
use crate::models::document::SketchDocument;
use crate::models::room::CATALOG;
use crate::plan::{GenerationRequest, PlanRecord};
use crate::ui::{canvas, properties, toolbar};
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};

/// Main application state.
pub struct ArchitaiApp {
    /// The sketch editor
    editor: SketchEditor,

    /// Exports sent by the editor callback
    exports: Receiver<ExportPayload>,

    /// Uploaded canvas texture
    texture: Option<egui::TextureHandle>,

    /// Editor revision the texture was uploaded from
    texture_revision: Option<u64>,

    /// Plan request form
    request: GenerationRequest,
    notes: String,

    /// Requested plans, newest first
    plans: Vec<PlanRecord>,

    /// Last error or confirmation shown in the status line
    status: Option<String>,
}

impl ArchitaiApp {
    /// Create a new application instance.
    pub fn new(config: EditorConfig) -> Self {
        let (sender, receiver) = channel();
        let editor = SketchEditor::new(config, move |payload| {
            let _ = sender.send(payload);
        });

        Self {
            editor,
            exports: receiver,
            texture: None,
            texture_revision: None,
            request: GenerationRequest::default(),
            notes: String::new(),
            plans: Vec::new(),
            status: None,
        }
    }

    fn report_error(&mut self, e: anyhow::Error) {
        log::error!("{:#}", e);
        self.status = Some(format!("Error: {:#}", e));
    }

    fn report(&mut self, result: Result<()>, success: impl Into<String>) {
        match result {
            Ok(()) => self.status = Some(success.into()),
            Err(e) => self.report_error(e),
        }
    }

    /// Upload the editor surface when the room set changed.
    fn sync_texture(&mut self, ctx: &egui::Context) {
        let revision = self.editor.revision();
        if self.texture.is_some() && self.texture_revision == Some(revision) {
            return;
        }

        let surface = self.editor.surface();
        let size = [surface.width() as usize, surface.height() as usize];
        let image = egui::ColorImage::from_rgba_unmultiplied(size, surface.as_raw());

        match self.texture.as_mut() {
            Some(texture) => texture.set(image, egui::TextureOptions::NEAREST),
            None => {
                self.texture = Some(ctx.load_texture("sketch", image, egui::TextureOptions::NEAREST));
            }
        }
        self.texture_revision = Some(revision);
    }

    fn export_sketch(&mut self) {
        if let Err(e) = self.editor.request_export() {
            self.report_error(e);
        }
    }

    /// Turn an exported sketch into a plan request.
    fn submit_plan(&mut self, payload: ExportPayload) {
        let notes = self.notes.trim();
        let request = GenerationRequest {
            additional_notes: (!notes.is_empty()).then(|| notes.to_string()),
            ..self.request.clone()
        };

        if let Err(e) = request.validate() {
            self.report_error(e.context("invalid plan request"));
            return;
        }

        let record = PlanRecord::from_sketch(request, payload);
        log::info!("Created plan request {}", record.id);
        self.status = Some(format!("Plan request {} ready", record.id));
        self.plans.insert(0, record);
    }

    /// Save a plan's sketch under the download file name.
    fn download_sketch(&mut self, index: usize) {
        let Some(plan) = self.plans.get(index) else {
            return;
        };
        let Some(sketch) = plan.sketch.as_ref() else {
            return;
        };

        let file_name = download_filename(&self.editor.config().app_name, &plan.id);
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG image", &["png"])
            .set_file_name(file_name.as_str())
            .save_file()
        {
            let result = sketch.save_png(&path);
            self.report(result, format!("Saved {}", path.display()));
        }
    }

    /// Save a plan request as JSON for the generation service.
    fn save_request(&mut self, index: usize) {
        let Some(plan) = self.plans.get(index) else {
            return;
        };

        let file_name = request_filename(&self.editor.config().app_name, &plan.id);
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name(file_name.as_str())
            .save_file()
        {
            let result = crate::io::serialization::export_json(plan, &path);
            if result.is_ok() {
                log::info!("Saved plan request to {}", path.display());
            }
            self.report(result, format!("Saved {}", path.display()));
        }
    }

    /// Save the room layout to a file.
    fn save_layout(&mut self, path: PathBuf) {
        let result = crate::io::serialization::export(&self.editor.document(), &path);
        if result.is_ok() {
            log::info!("Saved layout to {}", path.display());
        }
        self.report(result, format!("Saved {}", path.display()));
    }

    /// Replace the sketch with a layout file.
    fn load_layout(&mut self, path: PathBuf) {
        let result = crate::io::serialization::import::<SketchDocument>(&path)
            .with_context(|| format!("loading layout {}", path.display()));

        match result {
            Ok(document) => {
                let dropped = self.editor.load_document(document);
                let message = if dropped > 0 {
                    format!("Loaded {} ({} invalid rooms were dropped)", path.display(), dropped)
                } else {
                    format!("Loaded {}", path.display())
                };
                self.status = Some(message);
            }
            Err(e) => self.report_error(e),
        }
    }

    fn handle_keyboard(&mut self, ctx: &egui::Context) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.editor.handle(PointerEvent::Leave);
        }

        // Only process shortcuts if no text field is focused
        if ctx.wants_keyboard_input() {
            return;
        }

        if ctx.input(|i| i.modifiers.command && i.key_pressed(egui::Key::Delete)) {
            self.editor.reset();
        }

        const KEYS: [egui::Key; 5] = [
            egui::Key::Num1,
            egui::Key::Num2,
            egui::Key::Num3,
            egui::Key::Num4,
            egui::Key::Num5,
        ];
        for (index, key) in KEYS.iter().enumerate().take(CATALOG.len()) {
            if ctx.input(|i| i.key_pressed(*key)) {
                self.editor.select_type(index);
            }
        }
    }
}

impl eframe::App for ArchitaiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.sync_texture(ctx);

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Layout...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Layouts", &["yaml", "yml", "json"])
                            .pick_file()
                        {
                            self.load_layout(path);
                        }
                        ui.close_menu();
                    }
                    ui.menu_button("Save Layout", |ui| {
                        if ui.button("Save as YAML...").clicked() {
                            if let Some(path) = rfd::FileDialog::new()
                                .add_filter("YAML", &["yaml", "yml"])
                                .set_file_name("layout.yaml")
                                .save_file()
                            {
                                self.save_layout(path);
                            }
                            ui.close_menu();
                        }
                        if ui.button("Save as JSON...").clicked() {
                            if let Some(path) = rfd::FileDialog::new()
                                .add_filter("JSON", &["json"])
                                .set_file_name("layout.json")
                                .save_file()
                            {
                                self.save_layout(path);
                            }
                            ui.close_menu();
                        }
                    });
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Edit", |ui| {
                    let has_rooms = !self.editor.session().is_empty();
                    if ui
                        .add_enabled(has_rooms, egui::Button::new("Clear Sketch (Ctrl+Delete)"))
                        .clicked()
                    {
                        self.editor.reset();
                        ui.close_menu();
                    }
                });
            });
        });

        // Toolbar
        let toolbar_action = egui::TopBottomPanel::top("toolbar")
            .show(ctx, |ui| {
                toolbar::show(
                    ui,
                    self.editor.session().selected_index(),
                    !self.editor.session().is_empty(),
                )
            })
            .inner;

        match toolbar_action {
            toolbar::ToolbarAction::Select(index) => self.editor.select_type(index),
            toolbar::ToolbarAction::Reset => self.editor.reset(),
            toolbar::ToolbarAction::None => {}
        }

        // Status line
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            let text = self.status.as_deref().unwrap_or("Ready");
            ui.label(egui::RichText::new(text).weak());
        });

        // Plan request panel (right side)
        let properties_action = egui::SidePanel::right("properties")
            .default_width(300.0)
            .show(ctx, |ui| {
                properties::show(
                    ui,
                    &mut self.request,
                    &mut self.notes,
                    self.editor.session().rooms(),
                    &self.plans,
                )
            })
            .inner;

        match properties_action {
            properties::PropertiesAction::Export => self.export_sketch(),
            properties::PropertiesAction::DownloadSketch(index) => self.download_sketch(index),
            properties::PropertiesAction::SaveRequest(index) => self.save_request(index),
            properties::PropertiesAction::None => {}
        }

        self.handle_keyboard(ctx);

        // Main canvas (center)
        let canvas_action = egui::CentralPanel::default()
            .show(ctx, |ui| canvas::show(ui, &self.editor, self.texture.as_ref()))
            .inner;

        if let canvas::CanvasAction::Pointer(event) = canvas_action {
            if self.editor.handle(event).changed_rooms() {
                ctx.request_repaint();
            }
        }

        // Exports requested this frame
        while let Ok(payload) = self.exports.try_recv() {
            self.submit_plan(payload);
        }

        if self.texture_revision != Some(self.editor.revision()) {
            ctx.request_repaint();
        }
    }
}
