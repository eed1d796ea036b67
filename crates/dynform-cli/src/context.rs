use crate::presentation::ConsoleRenderer;
use crate::types::OutputFormat;
use anyhow::Result;
use dynform_runtime::{Config, HttpFormGateway};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

pub struct ExecutionContext {
    data_dir: PathBuf,
    config: OnceCell<Config>,
    base_url: Option<String>,
    pub format: OutputFormat,
}

impl ExecutionContext {
    pub fn new(data_dir: PathBuf, base_url: Option<String>, format: OutputFormat) -> Self {
        Self {
            data_dir,
            config: OnceCell::new(),
            base_url,
            format,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    pub fn config_path(&self) -> PathBuf {
        Config::path_in(&self.data_dir)
    }

    /// config.toml with the `--base-url` override applied
    pub fn config(&self) -> Result<&Config> {
        self.config.get_or_try_init(|| {
            let config = Config::load_from(&self.config_path())?;
            Ok(config.with_base_url(self.base_url.clone()))
        })
    }

    pub fn gateway(&self) -> Result<HttpFormGateway> {
        let config = self.config()?;
        Ok(HttpFormGateway::from_config(&config.api)?)
    }

    pub fn renderer(&self) -> ConsoleRenderer {
        ConsoleRenderer::new(self.format == OutputFormat::Json)
    }

    pub fn runtime(&self) -> Result<tokio::runtime::Runtime> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;
        Ok(runtime)
    }
}
