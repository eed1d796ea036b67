use anyhow::Result;
use dynform_runtime::sign_in;
use dynform_types::User;

use crate::context::ExecutionContext;
use crate::presentation::presenters::present_login_result;
use crate::presentation::{CommandResultViewModel, Guidance, Renderer, StatusBadge};

pub fn handle(ctx: &ExecutionContext, user: User) -> Result<()> {
    let gateway = ctx.gateway()?;
    let runtime = ctx.runtime()?;
    let message = runtime.block_on(sign_in(&gateway, &user))?;

    let fill_command = format!(
        "dynform fill --roll-number {} --name \"{}\"",
        user.roll_number, user.name
    );
    let result = CommandResultViewModel::new(present_login_result(&user, message))
        .with_badge(StatusBadge::success("Signed in"))
        .with_suggestion(Guidance::new("Fill your form").with_command(fill_command));

    ctx.renderer().render(result)
}
