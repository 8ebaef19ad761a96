use std::io::{self, BufRead, Write};

use rustyline::{error::ReadlineError, DefaultEditor};

use crate::core::errors::{CliError, CommandError};
use crate::core::validation;

/// Source of user input lines.
///
/// `Ok(None)` means the user ended input (EOF or interrupt).
pub trait LineReader {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Line editor with history, used when stdin is a terminal.
pub struct EditorReader {
    editor: DefaultEditor,
}

impl EditorReader {
    pub fn new() -> Result<Self, CliError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineReader for EditorReader {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor.add_history_entry(line.as_str()).ok();
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(ReadlineError::Io(err)) => Err(err),
            Err(err) => Err(io::Error::other(err.to_string())),
        }
    }
}

/// Plain buffered reader, used when stdin is piped.
///
/// Prompts are still written to stdout so that a transcript reads like an
/// interactive session.
pub struct ScriptReader<R> {
    reader: R,
}

impl<R: BufRead> ScriptReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineReader for ScriptReader<R> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let mut stdout = io::stdout();
        write!(stdout, "{prompt}")?;
        stdout.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

/// Prompt the user for free-form text input. Any string, including empty, is accepted.
pub fn prompt_text(reader: &mut dyn LineReader, prompt: &str) -> Result<String, CommandError> {
    reader.read_line(prompt)?.ok_or(CommandError::ExitRequested)
}

/// Prompt for a decimal value; non-numeric text is reported as invalid input.
pub fn prompt_decimal(
    reader: &mut dyn LineReader,
    prompt: &str,
    field: &str,
) -> Result<f64, CommandError> {
    let raw = prompt_text(reader, prompt)?;
    Ok(validation::parse_decimal(field, &raw)?)
}

pub fn prompt_id(
    reader: &mut dyn LineReader,
    prompt: &str,
    field: &str,
) -> Result<i64, CommandError> {
    let raw = prompt_text(reader, prompt)?;
    Ok(validation::parse_id(field, &raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reader(input: &str) -> ScriptReader<Cursor<Vec<u8>>> {
        ScriptReader::new(Cursor::new(input.as_bytes().to_vec()))
    }

    #[test]
    fn script_reader_strips_line_endings() {
        let mut input = reader("first\r\nsecond\n\nlast");
        assert_eq!(input.read_line("").unwrap().as_deref(), Some("first"));
        assert_eq!(input.read_line("").unwrap().as_deref(), Some("second"));
        assert_eq!(input.read_line("").unwrap().as_deref(), Some(""));
        assert_eq!(input.read_line("").unwrap().as_deref(), Some("last"));
        assert_eq!(input.read_line("").unwrap(), None);
    }

    #[test]
    fn end_of_input_requests_exit() {
        let mut input = reader("");
        let err = prompt_text(&mut input, "Enter category: ").unwrap_err();
        assert!(matches!(err, CommandError::ExitRequested));
    }

    #[test]
    fn numeric_prompts_validate() {
        let mut input = reader("12.5\nabc\n3\n");
        assert_eq!(prompt_decimal(&mut input, "", "amount").unwrap(), 12.5);
        let err = prompt_decimal(&mut input, "", "amount").unwrap_err();
        assert!(matches!(err, CommandError::Core(_)));
        assert_eq!(prompt_id(&mut input, "", "goal ID").unwrap(), 3);
    }
}
