pub mod serialization;
pub mod source;
pub mod store;
pub mod traits;

pub use serialization::*;
pub use source::*;
pub use store::*;
pub use traits::*;
