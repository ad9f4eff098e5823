mod datastore_cache;
mod object_store;

pub use datastore_cache::{DatastoreCache, DEFAULT_FETCH_COMMAND, DEFAULT_SCHEMES};
pub use object_store::ObjectStore;
