//! Core application modules for FlowDash.
//!
//! # Module Organization
//!
//! - [`deploy_config`] - deploy-target configuration, read once at startup
//! - [`process_model`] - the process model the dialog acts on
//! - [`runtime_client`] - HTTP calls against the runtime engine
//! - [`notifications`] - status-bar notifications for user feedback
//! - [`dashui`] - egui user interface and window management

pub mod dashui;
pub mod deploy_config;
pub mod notifications;
pub mod process_model;
pub mod runtime_client;

pub use dashui::app::FlowDashApp;
