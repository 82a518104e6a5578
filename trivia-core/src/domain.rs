pub mod ids;
pub mod category;
pub mod question;
pub mod quiz;

pub use ids::*;
pub use category::*;
pub use question::*;
pub use quiz::*;
