use ngmap_config::NgmapConfig;
use ngmap_core::DeclarationKind;
use ngmap_parser::{FsLoader, flatten_html_file};

use crate::cli::{GlobalFlags, ScanArgs};
use crate::commands::shared::ScanSettings;
use crate::output::output;
use crate::pipeline::run_batch;

/// Handle `ngmap html`.
pub fn handle(args: &ScanArgs, config: &NgmapConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    // No declarations are matched; the kind only routes `--scope`.
    let settings = ScanSettings::resolve(args, config, DeclarationKind::Component);
    let files = settings.html_files(args, config)?;

    let outcome = run_batch(&files, settings.batch, |path| {
        flatten_html_file(path, &FsLoader, &settings.extract)
    })?;
    output(&outcome.records, flags.format)
}
