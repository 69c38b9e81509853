//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the core and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - The remote text-generation service
//! - `PageComposer` - Paginated document composition backend
//! - `DocumentFileStorage` - Persistence of exported documents

mod ai_provider;
mod document_file_storage;
mod page_composer;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, TokenUsage,
};
pub use document_file_storage::{DocumentFileStorage, StorageError, StoredFile};
pub use page_composer::{ComposeError, ComposedDocument, PageComposer};
