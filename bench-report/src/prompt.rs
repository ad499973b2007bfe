//! Interactive input: free-text answers and numbered menus.

use std::fs;
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::path::Path;

use crate::error::{ReportError, Result};


pub struct Prompter<R, W> {
    input: R,
    output: W,
}


impl Prompter<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Prompter::new(io::stdin().lock(), io::stdout())
    }
}


impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }
    
    #[cfg(test)]
    pub(crate) fn into_output(self) -> W {
        self.output
    }
    
    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{line}").map_err(stdout_error)
    }
    
    /// Print `message` and return the trimmed answer; empty at end of input.
    pub fn ask(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{message}").map_err(stdout_error)?;
        self.output.flush().map_err(stdout_error)?;
        
        let mut line = String::new();
        self.input
            .read_line(&mut line)
            .map_err(|e| ReportError::io("stdin", e))?;
        Ok(line.trim().to_string())
    }
    
    /// Like [`Prompter::ask`] but an empty answer is an error.
    pub fn ask_required(&mut self, message: &str) -> Result<String> {
        let answer = self.ask(message)?;
        if answer.is_empty() {
            return Err(ReportError::NothingEntered);
        }
        Ok(answer)
    }
    
    /// List `options` numbered from 1 and return the chosen index.
    pub fn choose(&mut self, message: &str, options: &[String]) -> Result<usize> {
        self.say("\nAvailable files:")?;
        for (i, name) in options.iter().enumerate() {
            self.say(&format!("{}) {name}", i + 1))?;
        }
        
        let answer = self.ask(message)?;
        match answer.parse::<usize>() {
            Ok(n) if (1..=options.len()).contains(&n) => Ok(n - 1),
            _ => Err(ReportError::InvalidSelection(answer)),
        }
    }
}


fn stdout_error(e: io::Error) -> ReportError {
    ReportError::io("stdout", e)
}


/// Sorted names of the `.csv` files directly inside `dir`.
pub fn list_csv_files(dir: &Path) -> Result<Vec<String>> {
    let entries = fs::read_dir(dir).map_err(|e| ReportError::io(dir, e))?;
    
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ReportError::io(dir, e))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.to_lowercase().ends_with(".csv") && entry.path().is_file() {
            files.push(name);
        }
    }
    if files.is_empty() {
        return Err(ReportError::NoCsvFiles(dir.to_path_buf()));
    }
    files.sort();
    Ok(files)
}
