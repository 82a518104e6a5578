pub mod category;
pub mod question;

pub use category::*;
pub use question::*;
