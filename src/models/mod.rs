// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model for rooms, the sketch session and layout documents.

pub mod document;
pub mod room;
pub mod session;
