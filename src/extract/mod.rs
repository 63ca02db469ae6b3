pub mod error;
pub mod omeka_client;
pub use omeka_client::OmekaClient;
pub mod records;
pub use records::{Item, ItemSummary};
