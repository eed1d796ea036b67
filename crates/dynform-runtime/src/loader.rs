use dynform_engine::{FormSession, SessionError};
use dynform_types::User;
use tracing::info;

use crate::gateway::FormGateway;
use crate::{Error, Result};

/// Fetch the schema for `roll_number` into `session`.
///
/// Fails only when a load is already pending. A network failure is not an
/// error here: it leaves the session in `Stage::Failed` with the message.
pub async fn load_form<G>(
    session: &mut FormSession,
    gateway: &G,
    roll_number: &str,
) -> std::result::Result<(), SessionError>
where
    G: FormGateway + ?Sized,
{
    session.begin_load()?;
    let result = gateway
        .get_form_structure(roll_number)
        .await
        .map_err(|e| e.to_string());
    session.complete_load(result);
    Ok(())
}

/// Register (or confirm) a user; a rejection becomes `Error::Rejected`
pub async fn sign_in<G>(gateway: &G, user: &User) -> Result<String>
where
    G: FormGateway + ?Sized,
{
    let response = gateway.create_user(user).await?;
    if !response.success {
        return Err(Error::Rejected(response.message));
    }

    info!(roll_number = %user.roll_number, "signed in");
    Ok(response.message)
}
