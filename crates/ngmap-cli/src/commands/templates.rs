use ngmap_config::NgmapConfig;
use ngmap_core::DeclarationKind;
use ngmap_parser::{SourceTree, list_component_templates};

use crate::cli::{GlobalFlags, ScanArgs};
use crate::commands::shared::ScanSettings;
use crate::output::output;
use crate::pipeline::run_batch;

/// Handle `ngmap templates`.
pub fn handle(args: &ScanArgs, config: &NgmapConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let settings = ScanSettings::resolve(args, config, DeclarationKind::Component);
    let files = settings.source_files(args, config)?;

    let outcome = run_batch(&files, settings.batch, |path| {
        let tree = SourceTree::read(path)?;
        Ok(list_component_templates(&tree, &settings.extract))
    })?;
    output(&outcome.records, flags.format)
}
