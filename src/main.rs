// fskit: Filesystem helper kit
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Settings --> Logging --> Logger::install --> Command Dispatch
//!   Copy | Move | Rm | Exists | Ls | Mkdir | Cat | Write | Log
//! ```

use std::process::ExitCode;

use fskit::cli::global::GlobalOptions;
use fskit::cli::{self, Command};
use fskit::cmd::RunContext;
use fskit::cmd::config::{run_configs_command, run_options_command};
use fskit::cmd::fs::{
    run_cat_command, run_copy_command, run_exists_command, run_ls_command, run_mkdir_command,
    run_move_command, run_rm_command, run_write_command,
};
use fskit::cmd::log::run_log_command;
use fskit::config::Settings;
use fskit::config::loader::SettingsLoader;
use fskit::logging::{Logger, init_logging};

fn main() -> ExitCode {
    let cli = cli::parse();

    let settings = match load_settings(&cli.global) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match init_logging(&settings.log_config()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &settings)
}

fn dispatch_command(cli: &cli::Cli, settings: &Settings) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => {
            run_options_command(settings);
            Ok(())
        }
        Some(Command::Configs) => settings_loader(&cli.global).map(|loader| {
            run_configs_command(&loader.describe_sources());
        }),
        Some(command) => install_logger(settings).and_then(|logger| {
            let ctx = RunContext::new(logger, cli.global.background);
            run_fs_command(command, &ctx)
        }),
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run_fs_command(command: &Command, ctx: &RunContext<'_>) -> fskit::error::Result<()> {
    match command {
        Command::Copy(args) => run_copy_command(args, ctx),
        Command::Move(args) => run_move_command(args, ctx),
        Command::Rm(args) => run_rm_command(args, ctx),
        Command::Exists(args) => run_exists_command(args, ctx),
        Command::Ls(args) => run_ls_command(args, ctx),
        Command::Mkdir(args) => run_mkdir_command(args, ctx),
        Command::Cat(args) => run_cat_command(args, ctx),
        Command::Write(args) => run_write_command(args, ctx),
        Command::Log(args) => run_log_command(args, ctx),
        Command::Version | Command::Options | Command::Configs => Ok(()),
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn install_logger(settings: &Settings) -> fskit::error::Result<&'static Logger> {
    let location = settings.log_location()?;
    Ok(Logger::install(Logger::new(location))?)
}

fn settings_loader(global: &GlobalOptions) -> fskit::error::Result<SettingsLoader> {
    SettingsLoader::standard(!global.no_default_config, &global.configs)
        .apply_overrides(global.to_config_overrides())
}

fn load_settings(global: &GlobalOptions) -> fskit::error::Result<Settings> {
    settings_loader(global)?.build()
}
