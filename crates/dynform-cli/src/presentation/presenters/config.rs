use std::path::Path;

use dynform_runtime::Config;

use crate::presentation::view_models::ConfigViewModel;

pub fn present_config(path: &Path, config: &Config) -> ConfigViewModel {
    ConfigViewModel {
        path: path.display().to_string(),
        exists: path.exists(),
        base_url: config.api.base_url.clone(),
        timeout_secs: config.api.timeout_secs,
    }
}
