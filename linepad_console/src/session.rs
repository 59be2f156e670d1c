//! Interactive session loop
//!
//! Reads one command token per line, gathers the text a command needs,
//! calls the editor core once and prints the framed view.

use std::io::{BufRead, Write};

use linepad_core::{CoreOutcome, EditorAction, EditorCore};

use crate::commands::{CommandParser, ShellCommand};
use crate::config::ConsoleConfig;
use crate::ConsoleResult;

const COMMAND_PROMPT: &str = "Enter command (I: Insert, M: Multiline Insert, D: Delete, \
L: Left, R: Right, U: Undo, Y: Redo, N: New Line, W: Up, S: Down): ";
const INSERT_PROMPT: &str = "Enter text to insert: ";
const MULTILINE_PROMPT: &str = "Enter multiple lines (Enter empty line to finish): ";
const NOTHING_TO_DELETE: &str = "Nothing to delete at this position!";
const INVALID_COMMAND: &str = "Invalid command!";

/// Whether the session should keep reading commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Continue,
    Exit,
}

/// A console session over any input/output pair
pub struct Session<R, W> {
    editor: EditorCore,
    config: ConsoleConfig,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(config: ConsoleConfig, input: R, output: W) -> Self {
        Self::with_editor(EditorCore::new(), config, input, output)
    }

    pub fn with_editor(editor: EditorCore, config: ConsoleConfig, input: R, output: W) -> Self {
        Self {
            editor,
            config,
            input,
            output,
        }
    }

    pub fn editor(&self) -> &EditorCore {
        &self.editor
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until `Q` or end of input
    pub fn run(&mut self) -> ConsoleResult<()> {
        while self.step()? == SessionState::Continue {}
        log::info!("session ended");
        Ok(())
    }

    /// Prompt for and handle a single command
    pub fn step(&mut self) -> ConsoleResult<SessionState> {
        self.prompt(COMMAND_PROMPT)?;
        let Some(token) = self.read_line()? else {
            return Ok(SessionState::Exit);
        };

        let command = match CommandParser::parse(&token) {
            Ok(command) => command,
            Err(err) => {
                log::warn!("rejected input: {}", err);
                writeln!(self.output, "{}", INVALID_COMMAND)?;
                return Ok(SessionState::Continue);
            }
        };

        self.handle(command)
    }

    fn handle(&mut self, command: ShellCommand) -> ConsoleResult<SessionState> {
        if let Some(action) = command.immediate_action() {
            self.execute(action)?;
            return Ok(SessionState::Continue);
        }

        match command {
            ShellCommand::Insert => {
                self.prompt(INSERT_PROMPT)?;
                let Some(text) = self.read_line()? else {
                    return Ok(SessionState::Exit);
                };
                self.execute(EditorAction::InsertText(text))?;
            }
            ShellCommand::MultilineInsert => {
                writeln!(self.output, "{}", MULTILINE_PROMPT)?;
                let texts = self.read_lines_until_empty()?;
                self.execute(EditorAction::InsertLines(texts))?;
            }
            ShellCommand::Delete => {
                let prompt = format!(
                    "Press '{}' to confirm deletion or other key to cancel: ",
                    self.config.confirm_token
                );
                self.prompt(&prompt)?;
                let Some(answer) = self.read_line()? else {
                    return Ok(SessionState::Exit);
                };
                if answer.trim() == self.config.confirm_token {
                    self.execute(EditorAction::DeleteChar)?;
                } else {
                    log::debug!("delete cancelled");
                }
            }
            ShellCommand::Quit => return Ok(SessionState::Exit),
            _ => {}
        }

        Ok(SessionState::Continue)
    }

    fn execute(&mut self, action: EditorAction) -> ConsoleResult<()> {
        log::debug!("executing {}", action.as_str());
        match self.editor.apply(action) {
            CoreOutcome::NothingToDelete => {
                writeln!(self.output, "{}", NOTHING_TO_DELETE)?;
            }
            CoreOutcome::Changed | CoreOutcome::Continue => self.display()?,
        }
        Ok(())
    }

    fn display(&mut self) -> ConsoleResult<()> {
        let view = self.editor.render_with_marker(&self.config.cursor_marker);
        writeln!(self.output, "{}", self.config.header)?;
        for line in view.lines() {
            writeln!(self.output, "{}", line)?;
        }
        writeln!(self.output, "{}", self.config.footer)?;
        self.output.flush()?;
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> ConsoleResult<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    /// Read one line without its terminator; `None` at end of input
    fn read_line(&mut self) -> ConsoleResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }

    fn read_lines_until_empty(&mut self) -> ConsoleResult<Vec<String>> {
        let mut texts = Vec::new();
        while let Some(line) = self.read_line()? {
            if line.is_empty() {
                break;
            }
            texts.push(line);
        }
        Ok(texts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linepad_core::Position;

    fn run_script(script: &str) -> (EditorCore, String) {
        let mut session = Session::new(ConsoleConfig::default(), script.as_bytes(), Vec::new());
        session.run().unwrap();
        let editor = session.editor().clone();
        let output = String::from_utf8(session.into_output()).unwrap();
        (editor, output)
    }

    #[test]
    fn test_insert_prints_framed_view() {
        let (editor, output) = run_script("I\nhello\n");
        assert_eq!(editor.buffer().lines(), ["hello"]);
        assert!(output.contains("------ Text Editor ------\nhello|\n---------------------------\n"));
    }

    #[test]
    fn test_step_reports_exit_on_quit() {
        let mut session = Session::new(ConsoleConfig::default(), "N\nQ\nN\n".as_bytes(), Vec::new());
        assert_eq!(session.step().unwrap(), SessionState::Continue);
        assert_eq!(session.step().unwrap(), SessionState::Exit);
        assert_eq!(session.editor().buffer().line_count(), 2);
    }

    #[test]
    fn test_crlf_input_is_trimmed() {
        let (editor, _) = run_script("I\r\nab\r\nL\r\n");
        assert_eq!(editor.buffer().lines(), ["ab"]);
        assert_eq!(editor.cursor(), Position::new(0, 1));
    }

    #[test]
    fn test_invalid_command_leaves_state() {
        let (editor, output) = run_script("X\n\n");
        assert_eq!(output.matches(INVALID_COMMAND).count(), 2);
        assert_eq!(editor.snapshot(), EditorCore::new().snapshot());
    }
}
