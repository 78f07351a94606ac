//! Command-line arguments.

use clap::{Args, Parser, Subcommand};
use convtrain_client::Credentials;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "convtrain", version, about = "Train assistant workspaces from CSV files")]
pub struct Cli {
    /// TOML file with [service] and [polling] settings
    #[arg(long, global = true, env = "CONVTRAIN_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build a workspace from CSV files, submit it and wait for training
    Train(TrainArgs),
    /// Download a workspace as CSV files and a base document
    Export(ExportArgs),
}

#[derive(Debug, Clone, Args)]
pub struct ServiceArgs {
    /// Service username
    #[arg(short = 'u', long)]
    pub username: String,

    /// Service password
    #[arg(short = 'p', long)]
    pub password: String,

    /// Service base URL, overriding the config file
    #[arg(long)]
    pub url: Option<String>,
}

impl ServiceArgs {
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.username.as_str(), self.password.as_str())
    }
}

#[derive(Debug, Clone, Args)]
pub struct TrainArgs {
    /// Intent file: utterance,intent
    #[arg(short = 'i', long = "intents")]
    pub intents: Option<PathBuf>,

    /// Entity file: entity,value,synonym-or-/pattern/...
    #[arg(short = 'e', long = "entities")]
    pub entities: Option<PathBuf>,

    /// Base workspace JSON document
    #[arg(short = 'w', long = "workspace")]
    pub base: Option<PathBuf>,

    /// Workspace name
    #[arg(short = 'n', long)]
    pub name: Option<String>,

    /// Workspace description
    #[arg(short = 'd', long)]
    pub description: Option<String>,

    #[command(flatten)]
    pub service: ServiceArgs,
}

#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// Id of the workspace to export
    #[arg(short = 'w', long = "workspace-id")]
    pub workspace_id: String,

    /// Directory receiving the exported files
    #[arg(short = 'o', long = "output", default_value = ".")]
    pub output: PathBuf,

    #[command(flatten)]
    pub service: ServiceArgs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_train_parses_all_flags() {
        let cli = Cli::try_parse_from([
            "convtrain", "train", "-i", "intents.csv", "-e", "entities.csv", "-w", "base.json",
            "-n", "pizza", "-d", "orders", "-u", "apikey", "-p", "secret", "--url",
            "http://localhost:8080",
        ])
        .unwrap();

        let Command::Train(args) = cli.command else {
            panic!("expected train");
        };
        assert_eq!(args.intents, Some(PathBuf::from("intents.csv")));
        assert_eq!(args.entities, Some(PathBuf::from("entities.csv")));
        assert_eq!(args.base, Some(PathBuf::from("base.json")));
        assert_eq!(args.name.as_deref(), Some("pizza"));
        assert_eq!(args.description.as_deref(), Some("orders"));
        assert_eq!(args.service.username, "apikey");
        assert_eq!(args.service.url.as_deref(), Some("http://localhost:8080"));
    }

    #[test]
    fn test_train_inputs_are_optional() {
        let cli = Cli::try_parse_from(["convtrain", "train", "-u", "u", "-p", "p"]).unwrap();
        let Command::Train(args) = cli.command else {
            panic!("expected train");
        };
        assert!(args.intents.is_none());
        assert!(args.entities.is_none());
        assert!(args.base.is_none());
    }

    #[test]
    fn test_credentials_are_required() {
        assert!(Cli::try_parse_from(["convtrain", "train", "-u", "u"]).is_err());
        assert!(Cli::try_parse_from(["convtrain", "export", "-w", "ws", "-p", "p"]).is_err());
    }

    #[test]
    fn test_export_defaults_to_current_dir() {
        let cli = Cli::try_parse_from([
            "convtrain", "export", "-w", "ws-1", "-u", "u", "-p", "p", "--config", "c.toml",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("c.toml")));
        let Command::Export(args) = cli.command else {
            panic!("expected export");
        };
        assert_eq!(args.workspace_id, "ws-1");
        assert_eq!(args.output, PathBuf::from("."));
    }
}
