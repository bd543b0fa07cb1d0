pub mod errors;
pub mod id;
pub mod types;

pub use errors::{ConfigError, HybridError, ScreenError};
pub use id::{new_id, ScreenId};
pub use types::Rect;
