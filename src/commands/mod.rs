//! Command implementations

pub mod list;
pub mod not_found;
pub mod path;
pub mod show;

pub use list::*;
pub use not_found::*;
pub use path::*;
pub use show::*;
