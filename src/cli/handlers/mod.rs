use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use log::info;

use crate::cli::commands::*;
use crate::cli::output::render_list;
use crate::cli::script::{ScriptRunner, parse_script};
use crate::io::config_io;
use crate::io::logging::{self, LogTarget};
use crate::ops::task_ops::{Notice, TaskList};
use crate::tui::{self, RunOptions};

type HandlerResult = Result<(), Box<dyn std::error::Error>>;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> HandlerResult {
    let config = config_io::load_config(cli.config.as_deref())?;
    let level = logging::parse_level(cli.log_level.as_deref().or(config.log.level.as_deref()))?;
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| config.log.file.as_ref().map(PathBuf::from));

    match cli.command {
        None => {
            // The TUI owns the terminal: a log file or nothing
            let target = log_file.map_or(LogTarget::Off, LogTarget::File);
            logging::init_logging(level, target)?;
            tui::run(RunOptions {
                config,
                seed: cli.tasks,
            })
        }
        Some(Commands::Run(args)) => {
            let target = log_file.map_or(LogTarget::Stderr, LogTarget::File);
            logging::init_logging(level, target)?;
            cmd_run(args, cli.tasks, cli.json)
        }
    }
}

// ---------------------------------------------------------------------------
// run
// ---------------------------------------------------------------------------

fn cmd_run(args: RunArgs, seed: Vec<String>, json: bool) -> HandlerResult {
    let script = read_script(args.script.as_deref())?;
    let commands = parse_script(&script)?;

    let mut tasks = TaskList::new();
    let mut notices: Vec<Notice> = Vec::new();
    for title in seed {
        tasks.add_task(title, &mut notices);
    }
    for notice in &notices {
        eprintln!("warning: {}", notice);
    }

    info!("replaying {} command(s)", commands.len());
    let mut runner = ScriptRunner::new(tasks, json);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = runner.run(&commands, &mut out);

    for warning in runner.warnings() {
        eprintln!("warning: {}", warning);
    }
    result?;

    writeln!(out, "{}", render_list(runner.tasks().tasks(), json)?)?;
    Ok(())
}

/// Read the script from a file, or from stdin for `None` and `-`
fn read_script(path: Option<&Path>) -> Result<String, String> {
    match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .map_err(|e| format!("could not read {}: {}", p.display(), e)),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| format!("could not read script from stdin: {}", e))?;
            Ok(text)
        }
    }
}
