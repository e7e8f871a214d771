use anyhow::Context;
use stance_schema::SchemaRegistry;

use crate::cli::root_commands::SchemaArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

/// Handle `stance schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new();

    let Some(name) = args.name.as_deref() else {
        return output(&registry.list(), flags.format);
    };

    let schema = registry.get(name).with_context(|| {
        format!(
            "unknown schema '{name}'; available: {}",
            registry.list().join(", ")
        )
    })?;

    // Schemas are documents, not rows.
    let format = match flags.format {
        OutputFormat::Table => OutputFormat::Json,
        other => other,
    };
    output(schema, format)
}
