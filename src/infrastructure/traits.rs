//! I/O boundary traits for testability
//!
//! These traits abstract the filesystem and the host window, allowing
//! services to be tested with in-memory implementations.

use std::io;
use std::path::Path;
use std::sync::mpsc::Sender;
use std::sync::{Mutex, MutexGuard};

use tracing::trace;

use crate::domain::WindowCommand;

/// Filesystem abstraction for testability.
pub trait FileSystem: Send + Sync {
    /// Read file contents to string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Write string content to file.
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Create parent directories if needed.
    fn ensure_parent(&self, path: &Path) -> io::Result<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => self.create_dir_all(parent),
            _ => Ok(()),
        }
    }
}

/// One-way channel from the UI to the window host.
pub trait WindowSender: Send + Sync {
    /// Queue a command. Does not wait for it to be performed.
    fn send(&self, command: WindowCommand) -> io::Result<()>;
}

/// Native window operations used by the host.
pub trait NativeWindow: Send + Sync {
    fn minimize(&self);

    fn maximize(&self);

    fn unmaximize(&self);

    fn is_maximized(&self) -> bool;

    fn close(&self);
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Real filesystem implementation.
#[derive(Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        std::fs::write(path, content)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }
}

/// Sender backed by an in-process `mpsc` channel.
#[derive(Debug)]
pub struct ChannelSender {
    tx: Sender<WindowCommand>,
}

impl ChannelSender {
    pub fn new(tx: Sender<WindowCommand>) -> Self {
        Self { tx }
    }
}

impl WindowSender for ChannelSender {
    fn send(&self, command: WindowCommand) -> io::Result<()> {
        self.tx
            .send(command)
            .map_err(|e| io::Error::new(io::ErrorKind::BrokenPipe, e.to_string()))
    }
}

/// Observable state of a [`HeadlessWindow`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowState {
    pub minimized: bool,
    pub maximized: bool,
    pub closed: bool,
}

/// Window without a display, tracking state only.
#[derive(Debug, Default)]
pub struct HeadlessWindow {
    state: Mutex<WindowState>,
}

impl HeadlessWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> WindowState {
        *self.lock()
    }

    fn lock(&self) -> MutexGuard<'_, WindowState> {
        // state is plain flags, a poisoned lock still holds a usable value
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl NativeWindow for HeadlessWindow {
    fn minimize(&self) {
        trace!("headless: minimize");
        self.lock().minimized = true;
    }

    fn maximize(&self) {
        trace!("headless: maximize");
        let mut state = self.lock();
        state.maximized = true;
        state.minimized = false;
    }

    fn unmaximize(&self) {
        trace!("headless: unmaximize");
        self.lock().maximized = false;
    }

    fn is_maximized(&self) -> bool {
        self.lock().maximized
    }

    fn close(&self) {
        trace!("headless: close");
        self.lock().closed = true;
    }
}
