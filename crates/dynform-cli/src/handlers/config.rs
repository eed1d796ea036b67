use anyhow::{Result, bail};
use dynform_runtime::Config;
use tracing::info;

use crate::context::ExecutionContext;
use crate::presentation::presenters::present_config;
use crate::presentation::{CommandResultViewModel, Guidance, Renderer, StatusBadge};

pub fn init(ctx: &ExecutionContext, force: bool) -> Result<()> {
    let path = ctx.config_path();
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    let config = Config::default().with_base_url(ctx.base_url().map(str::to_string));
    config.save_to(&path)?;
    info!(path = %path.display(), "wrote default config");

    let result = CommandResultViewModel::new(present_config(&path, &config))
        .with_badge(StatusBadge::success("Config written"))
        .with_suggestion(
            Guidance::new("Point at another service").with_command("dynform --base-url <URL> ..."),
        );
    ctx.renderer().render(result)
}

pub fn show(ctx: &ExecutionContext) -> Result<()> {
    let path = ctx.config_path();
    let config = ctx.config()?;

    let mut result = CommandResultViewModel::new(present_config(&path, config))
        .with_badge(StatusBadge::info("Effective configuration"));
    if !path.exists() {
        result = result.with_suggestion(
            Guidance::new("Create the file").with_command("dynform config init"),
        );
    }
    ctx.renderer().render(result)
}
