use std::io;
use std::path::PathBuf;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::services::DocumentView;
use crate::application::IoResultExt;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, local_config_path, Settings};
use crate::domain::sample_document;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::traits::{FileSystem, RealFileSystem};
use crate::infrastructure::InfraError;
use crate::tree_traits::TreeNodeConvert;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Tree {
            query,
            expand,
            all,
            document,
        }) => _tree(cli, query.as_deref(), expand, *all, document.as_deref()),
        Some(Commands::Outline { document }) => _outline(cli, document.as_deref()),
        Some(Commands::Sample) => _sample(),
        Some(Commands::Config { command }) => _config(cli, command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Err(CliError::Usage(
            "no command given, try `doctree --help`".to_string(),
        )),
    }
}

fn local_dir(cli: &Cli) -> Option<PathBuf> {
    cli.dir.clone().or_else(|| std::env::current_dir().ok())
}

fn load_settings(cli: &Cli) -> CliResult<Settings> {
    let mut settings = Settings::load(local_dir(cli).as_deref())?;
    if let Some(file) = &cli.file {
        settings.documents_file = Some(file.clone());
    }
    debug!("settings: {:?}", settings);
    Ok(settings)
}

fn build_container(cli: &Cli) -> CliResult<ServiceContainer> {
    Ok(ServiceContainer::new(load_settings(cli)?)?)
}

#[instrument(skip(cli))]
fn _tree(
    cli: &Cli,
    query: Option<&str>,
    expand: &[String],
    all: bool,
    document: Option<&str>,
) -> CliResult<()> {
    let mut container = build_container(cli)?;
    let store = &mut container.store;

    if let Some(id) = document {
        store.document(id)?;
    }
    for id in expand {
        store.expand(id.as_str());
    }
    if all {
        store.expand_all();
    }
    if let Some(query) = query {
        store.set_search_query(query);
    }

    let views: Vec<DocumentView> = store
        .visible_documents()
        .into_iter()
        .filter(|v| document.map_or(true, |id| v.id == id))
        .collect();

    if views.is_empty() {
        output::warning(&format!(
            "no document matches {:?}",
            store.search_query()
        ));
        return Ok(());
    }

    let indent = container.settings.indent;
    for view in &views {
        output::header(&view.name);
        for row in &view.rows {
            output::row(row, indent);
        }
    }
    Ok(())
}

#[instrument(skip(cli))]
fn _outline(cli: &Cli, document: Option<&str>) -> CliResult<()> {
    let container = build_container(cli)?;
    let store = &container.store;

    match document {
        Some(id) => output::info(&store.document(id)?.to_tree_string()),
        None => {
            for doc in store.documents() {
                output::info(&doc.to_tree_string());
            }
        }
    }
    Ok(())
}

fn _sample() -> CliResult<()> {
    let json = serde_json::to_string_pretty(&sample_document())
        .map_err(|e| InfraError::parse("serialize sample document", e))?;
    output::info(&json);
    Ok(())
}

fn _config(cli: &Cli, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = load_settings(cli)?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Path => {
            match global_config_path() {
                Some(path) => output::action("global", &path.display()),
                None => output::warning("no config directory for this platform"),
            }
            if let Some(dir) = local_dir(cli) {
                output::action("local", &local_config_path(&dir).display());
            }
        }
        ConfigCommands::Init { force } => {
            let path = global_config_path().ok_or_else(|| {
                CliError::Usage("no config directory for this platform".to_string())
            })?;
            init_config(&RealFileSystem, &path, *force)?;
            output::success(&format!("created {}", path.display()));
        }
    }
    Ok(())
}

/// Write the config template to `path`, refusing to overwrite unless forced.
pub fn init_config(fs: &dyn FileSystem, path: &std::path::Path, force: bool) -> CliResult<()> {
    if fs.exists(path) && !force {
        return Err(CliError::InvalidArgs(format!(
            "{} exists, use --force to overwrite",
            path.display()
        )));
    }
    fs.ensure_parent(path)
        .with_path_context("create config directory", path)?;
    fs.write(path, &Settings::template())
        .with_path_context("write config", path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn given_missing_file_when_init_config_then_writes_template() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("doctree.toml");

        init_config(&RealFileSystem, &path, false).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, Settings::template());
    }

    #[test]
    fn given_existing_file_when_init_without_force_then_refuses() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("doctree.toml");
        std::fs::write(&path, "indent = 4\n").unwrap();

        let err = init_config(&RealFileSystem, &path, false).unwrap_err();
        assert!(matches!(err, CliError::InvalidArgs(_)));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "indent = 4\n");

        init_config(&RealFileSystem, &path, true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), Settings::template());
    }
}
