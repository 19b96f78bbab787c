pub mod backend;
pub mod mock;
pub mod session;
pub mod traits;

pub use backend::{FileBackend, MemoryBackend};
pub use mock::{MockAuthService, DEFAULT_AUTH_DELAY};
pub use session::{SessionStore, SESSION_KEY};
pub use traits::{AuthProvider, SessionBackend};
