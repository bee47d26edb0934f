use ngmap_config::NgmapConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: &Commands, config: &NgmapConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Components(args) => commands::components::handle(args, config, flags),
        Commands::Routes(args) => commands::routes::handle(args, config, flags),
        Commands::Templates(args) => commands::templates::handle(args, config, flags),
        Commands::Html(args) => commands::html::handle(args, config, flags),
    }
}
