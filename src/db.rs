pub mod blob_store;
pub use blob_store::{BlobStore, FsBlobStore, MemoryBlobStore};
pub mod json_store;
pub use json_store::{JsonStore, Stored};
pub mod collection;
pub use collection::{CollectionRepository, Entity};
pub mod dish_repo;
pub use dish_repo::DishRepository;
pub mod menu_repo;
pub use menu_repo::MenuRepository;
pub mod event_repo;
pub use event_repo::EventRepository;
pub mod settings_repo;
pub use settings_repo::SettingsRepository;
pub mod seeds;
