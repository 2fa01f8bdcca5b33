pub mod error;

pub use error::{ScamIntelError, ScamIntelResult};
