// Adapters - concrete port implementations

pub mod memory_store;
pub mod mock_export;
pub mod scripted_media;
pub mod static_user;

pub use memory_store::MemoryStoreAdapter;
pub use mock_export::{FailingExportAdapter, MockExportAdapter};
pub use scripted_media::ScriptedMediaHandle;
pub use static_user::StaticUserAdapter;
