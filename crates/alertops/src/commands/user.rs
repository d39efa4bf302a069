//! User lookup handler.

use alertops_core::{Provider, UserQuery};

use crate::cli::{GlobalOpts, UserArgs};
use crate::error::CliError;
use crate::output;

pub async fn handle(provider: &Provider, args: UserArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let query = UserQuery {
        user_id: args.id,
        user_name: args.name,
    };
    let user = provider.user_lookup().read(&query).await?;
    output::print_output(&output::render(global.output, &user)?, global.quiet);
    Ok(())
}
