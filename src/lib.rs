//! FlowDash - deployment companion for a business-process modeler.
//!
//! FlowDash is a desktop application that takes a process model and pushes it
//! to a runtime engine. The operator picks an action (deploy, suspend or
//! activate), enters engine credentials in a modal dialog, and FlowDash
//! issues one authenticated HTTP call against the configured engine endpoint,
//! reporting the outcome inline.
//!
//! # Architecture Overview
//!
//! - **UI Layer** ([`app::dashui`]): egui-based interface; the deploy dialog
//!   lives in [`app::dashui::deploy_dialog_window`]
//! - **Runtime API** ([`app::runtime_client`]): export and action calls with
//!   per-request HTTP Basic credentials
//! - **Configuration** ([`app::deploy_config`]): deploy targets read from
//!   `deploy_targets.json`
//!
//! HTTP work runs on short-lived worker threads so the UI thread never
//! blocks; each submission reports back through a shared outcome slot the
//! dialog polls once per frame.

#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub use app::FlowDashApp;
