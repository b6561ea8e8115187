//! Line based designer front-end
//!
//! Reads one command per line and answers with the status line of the
//! action. Character arguments are taken verbatim after the first space,
//! so `load  ` asks for the space character.

use std::io::{BufRead, Write};

use dotmatrix_edit::{status_message, EditorController};

use crate::DesignerResult;

const HELP: &str = "\
Commands:
  load <char>            show the glyph of <char> in the grid
  save <char>            store the grid as the glyph of <char>
  remove <char>          remove <char> from the character set
  toggle <row> <column>  flip one cell of the grid
  clear                  clear the grid
  grid                   print the grid
  file                   print the character set file content
  help                   print this help
  quit                   leave the designer";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Load(String),
    Save(String),
    Remove(String),
    Toggle(usize, usize),
    Clear,
    Grid,
    File,
    Help,
    Quit,
}

impl ShellCommand {
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim_end_matches(['\n', '\r']);
        let (name, arg) = match line.split_once(' ') {
            Some((name, arg)) => (name, Some(arg)),
            None => (line, None),
        };

        match (name, arg) {
            ("load", _) => Ok(ShellCommand::Load(arg.unwrap_or_default().to_string())),
            ("save", _) => Ok(ShellCommand::Save(arg.unwrap_or_default().to_string())),
            ("remove", _) => Ok(ShellCommand::Remove(arg.unwrap_or_default().to_string())),
            ("toggle", Some(arg)) => {
                let mut parts = arg.split_whitespace().map(str::parse::<usize>);
                match (parts.next(), parts.next(), parts.next()) {
                    (Some(Ok(row)), Some(Ok(column)), None) => Ok(ShellCommand::Toggle(row, column)),
                    _ => Err(format!("Usage: toggle <row> <column> (got \"{arg}\")")),
                }
            }
            ("clear", None) => Ok(ShellCommand::Clear),
            ("grid", None) => Ok(ShellCommand::Grid),
            ("file", None) => Ok(ShellCommand::File),
            ("help", None) => Ok(ShellCommand::Help),
            ("quit" | "exit", None) => Ok(ShellCommand::Quit),
            _ => Err(format!("Unknown command \"{line}\", type 'help' for a list of commands")),
        }
    }
}

/// Runs commands from `input` until `quit` or end of input.
pub fn run_shell<R: BufRead, W: Write>(controller: &mut EditorController, input: R, mut output: W) -> DesignerResult<()> {
    writeln!(output, "Editing {} ({} rows, {} columns)", controller.path().display(), controller.size().rows, controller.size().columns)?;

    for line in input.lines() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        let command = match ShellCommand::parse(&line) {
            Ok(command) => command,
            Err(message) => {
                writeln!(output, "{message}")?;
                continue;
            }
        };

        match command {
            ShellCommand::Load(arg) => {
                let result = controller.show_character(&arg);
                writeln!(output, "{}", status_message(&result))?;
                if result.is_ok() {
                    writeln!(output, "{}", controller.buffer().to_text('#', '.'))?;
                }
            }
            ShellCommand::Save(arg) => writeln!(output, "{}", status_message(&controller.save_character(&arg)))?,
            ShellCommand::Remove(arg) => writeln!(output, "{}", status_message(&controller.remove_character(&arg)))?,
            ShellCommand::Toggle(row, column) => match controller.toggle(row, column) {
                Ok(_) => writeln!(output, "{}", controller.buffer().to_text('#', '.'))?,
                Err(err) => writeln!(output, "{err}")?,
            },
            ShellCommand::Clear => {
                controller.clear_grid();
                writeln!(output, "{}", controller.buffer().to_text('#', '.'))?;
            }
            ShellCommand::Grid => writeln!(output, "{}", controller.buffer().to_text('#', '.'))?,
            ShellCommand::File => writeln!(output, "{}", controller.file_content())?,
            ShellCommand::Help => writeln!(output, "{HELP}")?,
            ShellCommand::Quit => break,
        }
    }
    Ok(())
}
