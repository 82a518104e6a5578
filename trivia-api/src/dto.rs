pub mod category;
pub mod question;
pub mod quiz;

pub use category::*;
pub use question::*;
pub use quiz::*;

use serde::{Deserialize, Serialize};

// Error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: String,
}
