//! Lifecycle command handlers over JSON state files.

use alertops_core::{CoreError, Provider, ReadOutcome};
use tracing::{debug, warn};

use crate::cli::{GlobalOpts, ImportArgs, StateArgs};
use crate::error::CliError;
use crate::output;

use super::util;

pub fn list(global: &GlobalOpts) -> Result<(), CliError> {
    let rendered = output::render(global.output, &Provider::RESOURCE_TYPES)?;
    output::print_output(&rendered, global.quiet);
    Ok(())
}

pub async fn create(
    provider: &Provider,
    args: StateArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let resource = provider.resource(&args.resource_type)?;
    let state = util::read_state(&args.state)?;
    let created = match resource.create(state).await {
        Ok(created) => created,
        Err(CoreError::Incomplete { id, state, source, .. }) => {
            // The record exists remotely; its id must reach the state file.
            util::write_state(&args.state, &state)?;
            warn!(resource = %args.resource_type, %id, "created, but the follow-up read failed");
            if !global.quiet {
                eprintln!(
                    "{} {id} was created; its id is saved in {}. Run `alertops read` to resync.",
                    args.resource_type,
                    args.state.display()
                );
            }
            return Err((*source).into());
        }
        Err(e) => return Err(e.into()),
    };
    util::write_state(&args.state, &created)?;
    debug!(resource = %args.resource_type, id = ?created.get("id"), "created");
    output::print_output(&output::render(global.output, &created)?, global.quiet);
    Ok(())
}

pub async fn read(
    provider: &Provider,
    args: StateArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let resource = provider.resource(&args.resource_type)?;
    let state = util::read_state(&args.state)?;
    let (outcome, refreshed) = resource.read(state).await?;
    util::write_state(&args.state, &refreshed)?;
    if outcome == ReadOutcome::Gone {
        if !global.quiet {
            eprintln!(
                "{} no longer exists remotely; cleared its id in {}",
                args.resource_type,
                args.state.display()
            );
        }
        return Ok(());
    }
    output::print_output(&output::render(global.output, &refreshed)?, global.quiet);
    Ok(())
}

pub async fn update(
    provider: &Provider,
    args: StateArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let resource = provider.resource(&args.resource_type)?;
    let state = util::read_state(&args.state)?;
    let updated = resource.update(state).await?;
    util::write_state(&args.state, &updated)?;
    output::print_output(&output::render(global.output, &updated)?, global.quiet);
    Ok(())
}

pub async fn delete(
    provider: &Provider,
    args: StateArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let resource = provider.resource(&args.resource_type)?;
    let state = util::read_state(&args.state)?;
    let cleared = resource.delete(state).await?;
    util::write_state(&args.state, &cleared)?;
    if !global.quiet {
        eprintln!("{} deleted", args.resource_type);
    }
    Ok(())
}

pub async fn import(
    provider: &Provider,
    args: ImportArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let resource = provider.resource(&args.resource_type)?;
    let imported = resource.import(&args.id).await?;
    match args.out {
        Some(path) => {
            util::write_state(&path, &imported)?;
            if !global.quiet {
                eprintln!("{} {} imported into {}", args.resource_type, args.id, path.display());
            }
        }
        None => output::print_output(&output::render(global.output, &imported)?, global.quiet),
    }
    Ok(())
}
