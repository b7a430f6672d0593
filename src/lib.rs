pub mod api;
pub mod config;
pub mod error;
pub mod repository;
pub mod services;
pub mod simulation;
pub mod types;
pub mod view;
pub mod wallet;

pub use config::Config;
pub use error::{Result, SignalsError};
pub use repository::AlertRepository;
pub use types::*;
