pub mod config;
pub mod error;
pub mod gateway;
pub mod loader;

pub use config::{resolve_workspace_path, ApiConfig, Config, DEFAULT_BASE_URL};
pub use error::{Error, Result};
pub use gateway::{FormGateway, HttpFormGateway, USER_EXISTS_MARKER};
pub use loader::{load_form, sign_in};
