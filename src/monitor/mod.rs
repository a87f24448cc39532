mod display;
mod manager;
mod query;
mod record;

pub use display::{Display, MAX_TABLE_FRAGMENT};
pub use manager::DisplayManager;
pub use query::{DisplayQuery, Queries};
pub use record::{DisplayRecord, Version};
