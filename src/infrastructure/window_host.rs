//! Host side of the window command channel.

use std::sync::mpsc::Receiver;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::domain::WindowCommand;
use crate::infrastructure::traits::NativeWindow;

/// Performs window commands on the main window, if there is one.
#[derive(Default)]
pub struct WindowHost {
    main_window: Option<Arc<dyn NativeWindow>>,
}

impl WindowHost {
    pub fn new(main_window: Option<Arc<dyn NativeWindow>>) -> Self {
        Self { main_window }
    }

    pub fn set_main_window(&mut self, window: Option<Arc<dyn NativeWindow>>) {
        self.main_window = window;
    }

    pub fn has_window(&self) -> bool {
        self.main_window.is_some()
    }

    /// Perform `command`; a no-op without a main window.
    #[instrument(level = "debug", skip(self))]
    pub fn handle(&self, command: WindowCommand) {
        let Some(window) = &self.main_window else {
            debug!("no main window, ignoring {}", command);
            return;
        };
        match command {
            WindowCommand::Minimize => window.minimize(),
            WindowCommand::ToggleMaximize => {
                if window.is_maximized() {
                    window.unmaximize();
                } else {
                    window.maximize();
                }
            }
            WindowCommand::Close => window.close(),
        }
    }

    /// Handle every command already queued, returning how many were seen.
    pub fn drain(&self, rx: &Receiver<WindowCommand>) -> usize {
        let mut handled = 0;
        for command in rx.try_iter() {
            self.handle(command);
            handled += 1;
        }
        handled
    }
}
