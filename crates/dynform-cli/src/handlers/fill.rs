use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc;

use anyhow::{Context, Result, bail};
use dynform_runtime::FormGateway;
use dynform_types::{User, read_form_document};
use is_terminal::IsTerminal;
use tracing::info;

use crate::app::FillApp;
use crate::context::ExecutionContext;
use crate::presentation::TuiRenderer;

pub fn handle(
    ctx: &ExecutionContext,
    user: Option<User>,
    file: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        bail!("fill needs an interactive terminal; use `dynform check` for scripted validation");
    }

    let submission = match file {
        Some(path) => {
            let response = read_form_document(&path)?;
            let mut app = FillApp::offline(response, user);
            let (_tx, rx) = mpsc::channel();
            TuiRenderer::new().run(&mut app, rx)?;
            app.into_submission()
        }
        None => {
            let gateway: Arc<dyn FormGateway> = Arc::new(ctx.gateway()?);
            let runtime = ctx.runtime()?;
            let (tx, rx) = mpsc::channel();
            let mut app = FillApp::online(gateway, runtime.handle().clone(), tx);
            if let Some(user) = user {
                app.start_sign_in(user);
            }
            TuiRenderer::new().run(&mut app, rx)?;
            app.into_submission()
        }
    };

    let Some(submission) = submission else {
        eprintln!("Form not submitted.");
        return Ok(());
    };

    let json = serde_json::to_string_pretty(&submission)?;
    match output {
        Some(path) => {
            std::fs::write(&path, format!("{}\n", json))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), "submission saved");
            eprintln!("Submission saved to {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}
