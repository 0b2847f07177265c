pub mod config;
pub mod error;
pub mod logging;
pub mod result;
pub mod traits;

pub use config::ExportConfig;
pub use error::ExportError;
pub use logging::{LogEntry, Loggable};
pub use result::ExportResult;
pub use traits::EntitySource;
