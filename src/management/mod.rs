mod collection;
mod registry;
mod session;

pub use collection::CollectionManager;
pub use registry::SessionRecord;
pub use registry::SessionRegistry;
pub use session::SessionManager;
