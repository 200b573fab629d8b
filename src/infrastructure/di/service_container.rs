//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;

use tracing::debug;

use crate::application::services::{AppService, DocumentStore, ViewState};
use crate::config::Settings;
use crate::domain::{sample_document, WindowCommand};
use crate::infrastructure::documents::load_documents;
use crate::infrastructure::traits::{
    ChannelSender, FileSystem, NativeWindow, RealFileSystem, WindowSender,
};
use crate::infrastructure::{InfraResult, WindowHost};

/// Container holding all application services.
///
/// UI-side state (store, app, view) and the host side of the window channel
/// live in one process here; `pump_window_commands` hands queued commands
/// from one to the other.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    pub store: DocumentStore,
    pub app: AppService,
    pub view: ViewState,
    pub host: WindowHost,

    window_rx: Receiver<WindowCommand>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations and no window.
    pub fn new(settings: Settings) -> InfraResult<Self> {
        Self::with_deps(settings, Arc::new(RealFileSystem), None)
    }

    /// Create a service container with custom dependencies (for testing).
    ///
    /// Loads `settings.documents_file` if set.
    pub fn with_deps(
        settings: Settings,
        fs: Arc<dyn FileSystem>,
        window: Option<Arc<dyn NativeWindow>>,
    ) -> InfraResult<Self> {
        let mut documents = Vec::new();
        if settings.seed_sample {
            documents.push(sample_document());
        }
        let mut store = DocumentStore::with_documents(documents).with_icons(settings.icons.clone());

        if let Some(path) = &settings.documents_file {
            let docs = load_documents(fs.as_ref(), path)?;
            debug!("loaded {} documents from {}", docs.len(), path.display());
            store.import_documents(docs)?;
        }

        let (tx, window_rx) = mpsc::channel();
        let sender: Arc<dyn WindowSender> = Arc::new(ChannelSender::new(tx));

        Ok(Self {
            settings: Arc::new(settings),
            store,
            app: AppService::new(sender),
            view: ViewState::new(),
            host: WindowHost::new(window),
            window_rx,
        })
    }

    /// Deliver queued window commands to the host.
    pub fn pump_window_commands(&self) -> usize {
        self.host.drain(&self.window_rx)
    }
}
