//! Application chrome state and window commands
//!
//! Window actions are fire-and-forget: the command is handed to the sender
//! and nothing is awaited. Delivery failures are logged and dropped.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::WindowCommand;
use crate::infrastructure::traits::WindowSender;

/// UI-side application state.
pub struct AppService {
    sender: Arc<dyn WindowSender>,
    is_window_active: bool,
}

impl AppService {
    pub fn new(sender: Arc<dyn WindowSender>) -> Self {
        Self {
            sender,
            is_window_active: true,
        }
    }

    pub fn is_window_active(&self) -> bool {
        self.is_window_active
    }

    pub fn set_window_active(&mut self, active: bool) {
        self.is_window_active = active;
    }

    pub fn close_window(&self) {
        self.send(WindowCommand::Close);
    }

    pub fn minimize_window(&self) {
        self.send(WindowCommand::Minimize);
    }

    /// Maximize, or restore if the window is already maximized.
    pub fn maximize_window(&self) {
        self.send(WindowCommand::ToggleMaximize);
    }

    fn send(&self, command: WindowCommand) {
        debug!("send: {}", command);
        if let Err(e) = self.sender.send(command) {
            warn!("window command {} not delivered: {}", command, e);
        }
    }
}
