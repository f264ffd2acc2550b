//! Quality-time report viewer - GUI library.
//!
//! This module provides the application types and modules for the
//! report viewer desktop application.
//!
//! Built with Iced 0.14.0 using the Elm architecture (State, Message, Update, View).

pub mod app;
pub mod cli;
pub mod component;
pub mod error;
pub mod handler;
pub mod logging;
pub mod message;
pub mod service;
pub mod state;
pub mod theme;
pub mod view;
