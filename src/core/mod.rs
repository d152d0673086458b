pub mod collector;
pub mod engine;
pub mod export;
pub mod filter;
pub mod pipeline;
pub mod resolver;

pub use crate::domain::model::{Extraction, SubscriberRecord};
pub use crate::domain::ports::{DirectoryClient, Pipeline, Storage};
pub use crate::utils::error::Result;
