// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Plan generation requests.
//!
//! The house parameters and the optional sketch image are assembled into a
//! request for the external generation service. Calling that service is
//! left to whoever consumes the saved request.

use crate::export::ExportPayload;
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Architectural style of the requested house.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HouseStyle {
    #[default]
    #[serde(rename = "Moderno")]
    Modern,
    #[serde(rename = "Contemporâneo")]
    Contemporary,
    #[serde(rename = "Minimalista")]
    Minimalist,
    #[serde(rename = "Clássico")]
    Classic,
    #[serde(rename = "Rústico")]
    Rustic,
}

impl HouseStyle {
    pub const ALL: [HouseStyle; 5] = [
        HouseStyle::Modern,
        HouseStyle::Contemporary,
        HouseStyle::Minimalist,
        HouseStyle::Classic,
        HouseStyle::Rustic,
    ];

    /// Display name, also used in the prompt.
    pub fn label(&self) -> &'static str {
        match self {
            HouseStyle::Modern => "Moderno",
            HouseStyle::Contemporary => "Contemporâneo",
            HouseStyle::Minimalist => "Minimalista",
            HouseStyle::Classic => "Clássico",
            HouseStyle::Rustic => "Rústico",
        }
    }
}

impl std::fmt::Display for HouseStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Parameters of one plan generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub style: HouseStyle,
    /// Built area in square meters.
    pub size: u32,
    /// Number of bedrooms.
    pub rooms: u32,
    pub floors: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_notes: Option<String>,
    /// Sketch as a `data:image/png;base64,` URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_image: Option<String>,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            style: HouseStyle::default(),
            size: 150,
            rooms: 3,
            floors: 1,
            additional_notes: None,
            input_image: None,
        }
    }
}

impl GenerationRequest {
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            bail!("area must be greater than zero");
        }
        if self.rooms == 0 {
            bail!("at least one bedroom is required");
        }
        if self.floors == 0 {
            bail!("at least one floor is required");
        }
        Ok(())
    }

    /// Text prompt sent to the generation service.
    pub fn prompt(&self) -> String {
        let notes = self
            .additional_notes
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or("Nenhuma");

        format!(
            "Aja como um arquiteto sênior. Crie um projeto detalhado para:\n\
             - Estilo: {}\n\
             - Área: {}m²\n\
             - Quartos: {}\n\
             - Pavimentos: {}\n\
             - Notas: {}\n\
             \n\
             Retorne: Setorização, Materiais e Fluxo de Circulação.",
            self.style,
            self.size,
            self.rooms,
            self.floors.max(1),
            notes
        )
    }
}

/// A request handed off for generation, kept in the session's plan list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRecord {
    pub id: String,
    pub request: GenerationRequest,
    pub prompt: String,
    pub timestamp_ms: u64,
    /// Encoded sketch for download; already embedded in the request as a data URI.
    #[serde(skip)]
    pub sketch: Option<ExportPayload>,
}

impl PlanRecord {
    pub fn new(request: GenerationRequest) -> Self {
        let timestamp_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);

        Self {
            id: new_plan_id(),
            prompt: request.prompt(),
            request,
            timestamp_ms,
            sketch: None,
        }
    }

    /// Record a request built from an exported sketch.
    pub fn from_sketch(mut request: GenerationRequest, sketch: ExportPayload) -> Self {
        request.input_image = Some(sketch.data_uri());
        Self {
            sketch: Some(sketch),
            ..Self::new(request)
        }
    }
}

/// Length of generated plan identifiers.
pub const PLAN_ID_LEN: usize = 9;

/// Short random lowercase alphanumeric plan identifier.
pub fn new_plan_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()[..PLAN_ID_LEN].to_string()
}
