//! `train` and `export` command implementations.

use crate::cli::{ExportArgs, TrainArgs};
use crate::error::CliError;
use convtrain_client::{train_workspace, AssistantService, PollConfig, WorkspaceReport};
use convtrain_core::{
    build_entities, build_intents, export_workspace, load_entity_file, load_intent_file,
    BaseWorkspace, ConvtrainResult, ExportPaths, ExportSummary, TransformOptions,
    WorkspaceAssembler, WorkspaceConfig,
};
use std::io::Write;

/// Read the input files named in `args` and assemble the workspace.
pub fn build_workspace(
    args: &TrainArgs,
    options: &TransformOptions,
) -> ConvtrainResult<WorkspaceConfig> {
    let mut assembler = WorkspaceAssembler::new();

    if let Some(path) = &args.base {
        assembler = assembler.with_base(BaseWorkspace::from_path(path)?);
    }
    if let Some(path) = &args.intents {
        let intents = build_intents(load_intent_file(path)?);
        tracing::info!(path = %path.display(), intents = intents.len(), "Loaded intents");
        assembler = assembler.with_intents(intents);
    }
    if let Some(path) = &args.entities {
        let entities = build_entities(load_entity_file(path)?, options);
        tracing::info!(path = %path.display(), entities = entities.len(), "Loaded entities");
        assembler = assembler.with_entities(entities);
    }
    if let Some(name) = &args.name {
        assembler = assembler.with_name(name.as_str());
    }
    if let Some(description) = &args.description {
        assembler = assembler.with_description(description.as_str());
    }

    Ok(assembler.assemble())
}

/// Build, submit and wait for the workspace, then print the final report.
///
/// Nothing is written to `out` unless training completes.
pub async fn run_train<S, W>(
    service: &S,
    args: &TrainArgs,
    poll: &PollConfig,
    out: &mut W,
) -> Result<WorkspaceReport, CliError>
where
    S: AssistantService + ?Sized,
    W: Write,
{
    let workspace = build_workspace(args, &TransformOptions::default())?;
    let report = train_workspace(service, &workspace, poll).await?;
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(report)
}

/// Download a workspace and write it as training files into `args.output`.
pub async fn run_export<S>(service: &S, args: &ExportArgs) -> Result<ExportSummary, CliError>
where
    S: AssistantService + ?Sized,
{
    let document = service.export_workspace(&args.workspace_id).await?;
    let paths = ExportPaths::in_dir(&args.output);
    let summary = export_workspace(&args.workspace_id, &document, &paths)?;
    Ok(summary)
}
