pub use anyhow::{Context, Result};
pub use log::{debug, info};
