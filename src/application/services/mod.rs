//! Application services

pub mod app;
pub mod documents;
pub mod view;

pub use app::AppService;
pub use documents::{DocumentStore, DocumentView, StoreEvent, SubscriptionId, VisibleRow};
pub use view::ViewState;
