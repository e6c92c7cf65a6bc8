pub mod catalog;
pub mod config;
pub mod constants;
pub mod error;
pub mod gesture;
pub mod layout;
pub mod ledger;
pub mod marker;
pub mod navigation;
pub mod scene;
pub mod showroom;
pub mod spring;
pub mod state;

pub use catalog::*;
pub use config::*;
pub use constants::*;
pub use error::*;
pub use gesture::*;
pub use layout::*;
pub use ledger::*;
pub use marker::*;
pub use navigation::*;
pub use scene::*;
pub use showroom::*;
pub use spring::*;
pub use state::*;
