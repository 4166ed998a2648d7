//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate model, classifier, layout and persistence into the calls a
//!   UI controller makes.
//! - Keep UI layers decoupled from classification and layout details.

pub mod roster_service;
