//! Command dispatch: bridges CLI args -> provider calls -> output formatting.

pub mod resources;
pub mod user;
pub mod util;

use alertops_core::Provider;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a provider-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    provider: &Provider,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Create(args) => resources::create(provider, args, global).await,
        Command::Read(args) => resources::read(provider, args, global).await,
        Command::Update(args) => resources::update(provider, args, global).await,
        Command::Delete(args) => resources::delete(provider, args, global).await,
        Command::Import(args) => resources::import(provider, args, global).await,
        Command::User(args) => user::handle(provider, args, global).await,
        // Resources and Completions are handled before dispatch
        Command::Resources | Command::Completions(_) => unreachable!(),
    }
}
