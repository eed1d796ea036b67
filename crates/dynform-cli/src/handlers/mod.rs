pub mod check;
pub mod config;
pub mod fill;
pub mod login;
pub mod schema;

use std::path::PathBuf;

use anyhow::{Result, bail};
use dynform_engine::{FormSession, Stage};
use dynform_runtime::{FormGateway, load_form};
use dynform_types::{FormResponse, read_form_document};
use tracing::debug;

use crate::context::ExecutionContext;

/// Where a command gets its form schema from
pub enum FormSource {
    Remote { roll_number: String },
    File(PathBuf),
}

impl FormSource {
    pub fn from_args(roll_number: Option<String>, file: Option<PathBuf>) -> Result<Self> {
        match (roll_number, file) {
            (_, Some(path)) => Ok(FormSource::File(path)),
            (Some(roll_number), None) => Ok(FormSource::Remote { roll_number }),
            (None, None) => bail!("Either --roll-number or --file is required"),
        }
    }

    /// Raw schema document, without the session's load checks
    pub fn fetch(&self, ctx: &ExecutionContext) -> Result<FormResponse> {
        match self {
            FormSource::File(path) => {
                debug!("reading form document {}", path.display());
                Ok(read_form_document(path)?)
            }
            FormSource::Remote { roll_number } => {
                let gateway = ctx.gateway()?;
                let runtime = ctx.runtime()?;
                Ok(runtime.block_on(gateway.get_form_structure(roll_number))?)
            }
        }
    }

    /// Session ready at the first section, or the load failure as an error
    pub fn open_session(&self, ctx: &ExecutionContext) -> Result<FormSession> {
        let session = match self {
            FormSource::File(_) => FormSession::from_response(self.fetch(ctx)?),
            FormSource::Remote { roll_number } => {
                let gateway = ctx.gateway()?;
                let runtime = ctx.runtime()?;
                let mut session = FormSession::new();
                runtime.block_on(load_form(&mut session, &gateway, roll_number))?;
                session
            }
        };

        if let Stage::Failed(message) = session.stage() {
            bail!("{}", message);
        }
        Ok(session)
    }
}
