pub mod models;
pub mod session;
pub mod storage;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

pub use models::UserProfile;
pub use session::{commit, load_session, persist_session, Session, SessionAction};
pub use storage::{KeyValueStore, StorageError, TOKEN_KEY, USER_KEY};
