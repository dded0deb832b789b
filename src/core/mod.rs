pub mod error;
pub mod io;
pub mod name;
pub mod store;

pub use error::*;
pub use name::*;
pub use store::*;
