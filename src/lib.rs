pub mod engine;
pub mod error;
pub mod session;
pub mod transform;
pub mod types;

pub use engine::{broadcast_from, broadcast_with, Broadcast};
pub use error::{Result, XlateError};
pub use session::{Session, Status};
pub use transform::{Registry, Transform};
pub use types::{Context, DecodePolicy, InputSource, OutputDest, TransformMeta, Verbosity};
