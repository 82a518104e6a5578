pub mod domain;
pub mod error;
pub mod pagination;
pub mod selector;
pub mod traits;

pub use domain::*;
pub use error::*;
pub use pagination::*;
pub use selector::*;
pub use traits::*;
