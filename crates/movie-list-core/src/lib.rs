pub mod collection;
pub mod error;
pub mod filter;
pub mod registry;

pub use collection::Collection;
pub use error::RegistryError;
pub use filter::{filter_by_title, filter_names};
pub use registry::{FixedList, Library, ListId};
