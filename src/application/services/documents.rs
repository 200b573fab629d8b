//! Tree document store
//!
//! Owns the document collection, the search query and the expanded-node set.
//! Filtering and flattening are delegated to the pure domain functions; the
//! store turns their results into explicit state transitions and notifies
//! subscribers.

use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;

use tracing::{debug, instrument, warn};

use crate::application::ApplicationResult;
use crate::domain::{
    collect_ids, duplicate_node_ids, filter_documents, flatten_tree, normalize_query,
    sample_document, Document, DomainError, ExpandedSet, IconTheme, TreeNode, VisibleNode,
};

/// State change notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreEvent {
    DocumentsChanged,
    QueryChanged,
    ExpansionChanged,
}

/// Handle returned by [`DocumentStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

type Listener = Box<dyn FnMut(StoreEvent)>;

/// One row of the display list, detached from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleRow {
    pub label: String,
    pub id: Option<String>,
    pub icon: String,
    pub level: usize,
    pub has_children: bool,
    pub expanded: bool,
}

/// A filtered document with its flattened rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentView {
    pub id: String,
    pub name: String,
    pub rows: Vec<VisibleRow>,
}

/// In-memory store behind the document tree browser.
///
/// Expansion is keyed by node id across all documents, so ids are expected
/// to be unique forest-wide. Duplicates are logged when a document is added
/// and otherwise share expand/collapse state.
pub struct DocumentStore {
    documents: Vec<Document>,
    search_query: String,
    expanded: ExpandedSet,
    icons: IconTheme,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: usize,
}

impl fmt::Debug for DocumentStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentStore")
            .field("documents", &self.documents.len())
            .field("search_query", &self.search_query)
            .field("expanded", &self.expanded.sorted_keys())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStore {
    /// Store seeded with the built-in sample document.
    pub fn new() -> Self {
        Self::with_documents(vec![sample_document()])
    }

    /// Store without any documents.
    pub fn empty() -> Self {
        Self::with_documents(Vec::new())
    }

    pub fn with_documents(documents: Vec<Document>) -> Self {
        for doc in &documents {
            warn_duplicate_ids(doc);
        }
        Self {
            documents,
            search_query: String::new(),
            expanded: ExpandedSet::new(),
            icons: IconTheme::default(),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn with_icons(mut self, icons: IconTheme) -> Self {
        self.icons = icons;
        self
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn expanded_nodes(&self) -> &ExpandedSet {
        &self.expanded
    }

    pub fn icons(&self) -> &IconTheme {
        &self.icons
    }

    pub fn document(&self, id: &str) -> Result<&Document, DomainError> {
        self.documents
            .iter()
            .find(|d| d.id == id)
            .ok_or_else(|| DomainError::DocumentNotFound(id.to_string()))
    }

    // ------------------------------------------------------------
    // Observers
    // ------------------------------------------------------------

    pub fn subscribe(&mut self, listener: impl FnMut(StoreEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if the subscription was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    fn emit(&mut self, event: StoreEvent) {
        debug!(?event, listeners = self.listeners.len(), "emit");
        for (_, listener) in &mut self.listeners {
            listener(event);
        }
    }

    // ------------------------------------------------------------
    // Search
    // ------------------------------------------------------------

    /// Set the query and auto-expand branches containing matches.
    #[instrument(level = "debug", skip(self, query))]
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query == self.search_query {
            return;
        }
        debug!("set_search_query: {:?}", query);
        self.search_query = query;
        self.emit(StoreEvent::QueryChanged);
        self.apply_auto_expand();
    }

    pub fn clear_search(&mut self) {
        self.set_search_query(String::new());
    }

    pub fn is_searching(&self) -> bool {
        normalize_query(&self.search_query).is_some()
    }

    /// Documents visible under the current query.
    ///
    /// Borrows the collection unchanged when no query is active. Never
    /// touches the expanded set; see [`Self::apply_auto_expand`].
    pub fn filtered_documents(&self) -> Cow<'_, [Document]> {
        filter_documents(&self.documents, &self.search_query).documents
    }

    /// Expand every branch that contains a match for the current query.
    ///
    /// Runs after each query or collection change. Returns the number of
    /// newly expanded ids.
    #[instrument(level = "debug", skip(self))]
    pub fn apply_auto_expand(&mut self) -> usize {
        if !self.is_searching() {
            return 0;
        }
        let expand = filter_documents(&self.documents, &self.search_query).expand;
        let added = self.expanded.extend(expand);
        if added > 0 {
            debug!("auto-expanded {} nodes, {} expanded", added, self.expanded.len());
            self.emit(StoreEvent::ExpansionChanged);
        }
        added
    }

    // ------------------------------------------------------------
    // Expansion
    // ------------------------------------------------------------

    /// Flatten `nodes` into display order using the current expanded set.
    pub fn flatten_tree<'a>(&self, nodes: &'a [TreeNode], level: usize) -> Vec<VisibleNode<'a>> {
        flatten_tree(nodes, &self.expanded, level)
    }

    /// Flip a node's expansion. Nodes without children are ignored.
    #[instrument(level = "debug", skip(self, node), fields(key = node.expansion_key()))]
    pub fn toggle_expand(&mut self, node: &TreeNode) {
        if self.expanded.toggle(node) {
            self.emit(StoreEvent::ExpansionChanged);
        }
    }

    /// Toggle the first node with `id` in any document.
    ///
    /// Returns false if no such node exists.
    pub fn toggle_expand_id(&mut self, id: &str) -> bool {
        let Some(node) = find_node(&self.documents, id).cloned() else {
            debug!("toggle_expand_id: no node {:?}", id);
            return false;
        };
        self.toggle_expand(&node);
        true
    }

    /// Mark `id` as expanded.
    pub fn expand(&mut self, id: impl Into<String>) {
        if self.expanded.insert(id) {
            self.emit(StoreEvent::ExpansionChanged);
        }
    }

    /// Expand every node with an id in every document.
    pub fn expand_all(&mut self) -> usize {
        let ids: Vec<String> = self
            .documents
            .iter()
            .flat_map(|d| collect_ids(&d.tree_data))
            .map(str::to_string)
            .collect();
        let added = self.expanded.extend(ids);
        if added > 0 {
            self.emit(StoreEvent::ExpansionChanged);
        }
        added
    }

    pub fn reset_expanded_nodes(&mut self) {
        if self.expanded.is_empty() {
            return;
        }
        self.expanded.clear();
        self.emit(StoreEvent::ExpansionChanged);
    }

    pub fn is_expanded(&self, node: &TreeNode) -> bool {
        self.expanded.is_expanded(node)
    }

    pub fn has_children(&self, node: &TreeNode) -> bool {
        node.has_children()
    }

    pub fn icon<'a>(&'a self, node: &'a TreeNode) -> &'a str {
        self.icons.icon_for(node)
    }

    /// Filtered documents with their flattened rows, ready to render.
    pub fn visible_documents(&self) -> Vec<DocumentView> {
        self.filtered_documents()
            .iter()
            .map(|doc| DocumentView {
                id: doc.id.clone(),
                name: doc.name.clone(),
                rows: self
                    .flatten_tree(&doc.tree_data, 0)
                    .into_iter()
                    .map(|v| self.row(v))
                    .collect(),
            })
            .collect()
    }

    fn row(&self, visible: VisibleNode<'_>) -> VisibleRow {
        let node = visible.node;
        VisibleRow {
            label: node.label.clone(),
            id: node.id.clone(),
            icon: self.icon(node).to_string(),
            level: visible.level,
            has_children: node.has_children(),
            expanded: self.is_expanded(node),
        }
    }

    // ------------------------------------------------------------
    // Documents
    // ------------------------------------------------------------

    /// Append a document. Collection ids are not checked here.
    #[instrument(level = "debug", skip(self, doc), fields(id = %doc.id))]
    pub fn add_document(&mut self, doc: Document) {
        warn_duplicate_ids(&doc);
        self.documents.push(doc);
        self.emit(StoreEvent::DocumentsChanged);
        self.apply_auto_expand();
    }

    /// Append documents, rejecting ids already in use.
    ///
    /// Nothing is added if any id collides.
    pub fn import_documents(&mut self, docs: Vec<Document>) -> ApplicationResult<()> {
        let mut seen: HashSet<&str> = self.documents.iter().map(|d| d.id.as_str()).collect();
        for doc in &docs {
            if !seen.insert(doc.id.as_str()) {
                return Err(DomainError::DuplicateDocumentId(doc.id.clone()).into());
            }
        }
        for doc in docs {
            self.add_document(doc);
        }
        Ok(())
    }

    /// Remove the first document with `id`; unknown ids are ignored.
    #[instrument(level = "debug", skip(self))]
    pub fn remove_document(&mut self, id: &str) {
        let Some(index) = self.documents.iter().position(|d| d.id == id) else {
            debug!("remove_document: {:?} not found", id);
            return;
        };
        self.documents.remove(index);
        self.emit(StoreEvent::DocumentsChanged);
        self.apply_auto_expand();
    }
}

fn warn_duplicate_ids(doc: &Document) {
    let dupes = duplicate_node_ids(&doc.tree_data);
    if !dupes.is_empty() {
        warn!(
            document = %doc.id,
            "node ids used more than once share expansion state: {}",
            dupes.join(", ")
        );
    }
}

fn find_node<'a>(documents: &'a [Document], id: &str) -> Option<&'a TreeNode> {
    fn walk<'a>(nodes: &'a [TreeNode], id: &str) -> Option<&'a TreeNode> {
        for node in nodes {
            if node.id.as_deref() == Some(id) {
                return Some(node);
            }
            if let Some(found) = walk(node.child_nodes(), id) {
                return Some(found);
            }
        }
        None
    }
    documents.iter().find_map(|d| walk(&d.tree_data, id))
}
