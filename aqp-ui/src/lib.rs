//! Shared Dioxus components for the air quality prediction form.
//!
//! This crate provides:
//! - `state`: `AppState` wrapping the form controller in a Dioxus signal
//! - `components`: Reusable RSX components (inputs, result panel, etc.)
//! - `page`: Picking a form variant from the page URL

pub mod components;
pub mod page;
pub mod state;
