pub mod error;
pub mod schema;
pub mod user;
pub mod value;

pub use error::{Error, Result};
pub use schema::*;
pub use user::*;
pub use value::*;
