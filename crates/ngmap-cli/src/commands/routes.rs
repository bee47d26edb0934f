use ngmap_config::NgmapConfig;
use ngmap_core::DeclarationKind;
use ngmap_parser::{FsLoader, SourceTree, extract_routes};

use crate::cli::{GlobalFlags, ScanArgs};
use crate::commands::shared::ScanSettings;
use crate::output::output;
use crate::pipeline::run_batch;

/// Handle `ngmap routes`.
pub fn handle(args: &ScanArgs, config: &NgmapConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let settings = ScanSettings::resolve(args, config, DeclarationKind::State);
    let files = settings.source_files(args, config)?;

    let outcome = run_batch(&files, settings.batch, |path| {
        let tree = SourceTree::read(path)?;
        Ok(extract_routes(&tree, &FsLoader, &settings.extract))
    })?;
    output(&outcome.records, flags.format)
}
