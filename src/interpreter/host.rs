use std::{collections::VecDeque,
          io::{self, BufRead, Write},
          path::Path};

use crate::error::HostError;

/// The outside world as seen by a running program.
///
/// The evaluator never touches stdin or stdout directly; `ask` and `shout`
/// go through this trait so programs can run against a console, a test
/// harness or an embedding application.
pub trait Host {
    /// Blocks until one line of input is available and returns it without
    /// its line terminator.
    ///
    /// # Errors
    /// Returns a `HostError` if reading fails or the input has ended.
    fn read_input_line(&mut self) -> Result<String, HostError>;

    /// Emits one line of program output. Failures are ignored.
    fn write_output_line(&mut self, text: &str);
}

/// Reads a program from disk.
///
/// # Errors
/// Returns `HostError::UnreadableSource` if the file cannot be read as UTF-8
/// text.
pub fn read_program_source(path: &Path) -> Result<String, HostError> {
    std::fs::read_to_string(path).map_err(|source| HostError::UnreadableSource { path:
                                                                                     path.to_path_buf(),
                                                                                 source })
}

/// A host backed by the process's standard input and output.
#[derive(Debug, Default)]
pub struct Console;

impl Host for Console {
    fn read_input_line(&mut self) -> Result<String, HostError> {
        // Prompts written with `shout` must be visible before blocking.
        let _ = io::stdout().flush();

        let mut line = String::new();
        let read = io::stdin().lock()
                              .read_line(&mut line)
                              .map_err(|source| HostError::ReadFailed { source })?;

        if read == 0 {
            return Err(HostError::InputClosed);
        }

        Ok(strip_line_terminator(line))
    }

    fn write_output_line(&mut self, text: &str) {
        let _ = writeln!(io::stdout().lock(), "{text}");
    }
}

/// A host that serves queued input lines and records every output line.
///
/// # Example
/// ```
/// use piratelang::{interpreter::host::ScriptedHost, run};
///
/// let mut host = ScriptedHost::with_input(["Anne"]);
/// run("ask name\nshout \"ahoy \" + name", &mut host).unwrap();
///
/// assert_eq!(host.output(), ["ahoy Anne"]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct ScriptedHost {
    input:  VecDeque<String>,
    output: Vec<String>,
}

impl ScriptedHost {
    /// Creates a host that answers `ask` with `lines`, in order.
    pub fn with_input<I, S>(lines: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        Self { input:  lines.into_iter().map(Into::into).collect(),
               output: Vec::new(), }
    }

    /// Every line written so far.
    #[must_use]
    pub fn output(&self) -> &[String] {
        &self.output
    }
}

impl Host for ScriptedHost {
    fn read_input_line(&mut self) -> Result<String, HostError> {
        self.input.pop_front().ok_or(HostError::InputClosed)
    }

    fn write_output_line(&mut self, text: &str) {
        self.output.push(text.to_string());
    }
}

fn strip_line_terminator(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}
