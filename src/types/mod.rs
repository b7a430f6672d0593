pub mod alert;
pub mod chart;
pub mod events;
pub mod format;
pub mod social;
pub mod token;
pub mod trade;

pub use alert::*;
pub use chart::*;
pub use events::*;
pub use social::*;
pub use token::*;
pub use trade::*;
