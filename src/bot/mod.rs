//! Bot module for handling Telegram interactions
//!
//! This module is split into several submodules for better organization:
//! - `command_handler`: Handles the slash commands and their router keys
//! - `callback_handler`: Handles inline keyboard callback queries
//! - `ui_builder`: Turns router keyboards into Telegram reply markup
//! - `startup`: One-shot menu button and command list registration

pub mod callback_handler;
pub mod command_handler;
pub mod startup;
pub mod ui_builder;

// Re-export main handler functions for use in main.rs
pub use callback_handler::callback_handler;
pub use command_handler::{command_handler, Command};
pub use startup::{set_command_list, set_menu_button};
