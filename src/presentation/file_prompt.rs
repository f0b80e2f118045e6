// History file chooser - bounded prompt over the discovered files
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChoiceError {
    #[error("`{0}` is not a number")]
    NotANumber(String),

    #[error("index {index} is outside 1 ~ {count}")]
    OutOfRange { index: i64, count: usize },

    #[error("no valid choice after {0} attempts")]
    AttemptsExhausted(u32),

    #[error("input closed before a file was chosen")]
    EndOfInput,

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Checks a 1-based index and converts it to a 0-based one.
pub fn check_index(index: i64, count: usize) -> Result<usize, ChoiceError> {
    if index >= 1 && (index as u64) <= count as u64 {
        Ok(index as usize - 1)
    } else {
        Err(ChoiceError::OutOfRange { index, count })
    }
}

/// Empty input picks the last file.
pub fn parse_choice(input: &str, count: usize) -> Result<usize, ChoiceError> {
    let input = input.trim();
    if input.is_empty() {
        return check_index(count as i64, count);
    }
    let index: i64 = input
        .parse()
        .map_err(|_| ChoiceError::NotANumber(input.to_string()))?;
    check_index(index, count)
}

pub fn list_files<W: Write>(files: &[PathBuf], root: &Path, mut output: W) -> io::Result<()> {
    writeln!(output, "### Battery data found:\n")?;
    for file in files {
        let shown = file.strip_prefix(root).unwrap_or(file);
        writeln!(output, "    * {}", shown.display())?;
    }
    writeln!(output)
}

/// Asks for a file until a valid index is given, at most `max_attempts` times.
pub fn choose_file<R: BufRead, W: Write>(
    count: usize,
    mut input: R,
    mut output: W,
    max_attempts: u32,
) -> Result<usize, ChoiceError> {
    for _ in 0..max_attempts {
        write!(
            output,
            "### Choose data file [1 ~ {}], defaults to the last item: ",
            count
        )?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(ChoiceError::EndOfInput);
        }

        match parse_choice(&line, count) {
            Ok(idx) => return Ok(idx),
            Err(e) => {
                tracing::debug!("Rejected file choice: {}", e);
                writeln!(output, "\n### Illegal index, try again!")?;
            }
        }
    }

    Err(ChoiceError::AttemptsExhausted(max_attempts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice("1", 3).unwrap(), 0);
        assert_eq!(parse_choice(" 3\n", 3).unwrap(), 2);
        assert_eq!(parse_choice("\n", 3).unwrap(), 2);
        assert!(matches!(parse_choice("0", 3), Err(ChoiceError::OutOfRange { index: 0, count: 3 })));
        assert!(matches!(parse_choice("4", 3), Err(ChoiceError::OutOfRange { index: 4, .. })));
        assert!(matches!(parse_choice("-1", 3), Err(ChoiceError::OutOfRange { .. })));
        assert!(matches!(parse_choice("two", 3), Err(ChoiceError::NotANumber(_))));
    }

    #[test]
    fn test_choose_file_retries_until_valid() {
        let input = Cursor::new("x\n9\n2\n");
        let mut output = Vec::new();
        let idx = choose_file(3, input, &mut output, 3).unwrap();

        assert_eq!(idx, 1);
        let shown = String::from_utf8(output).unwrap();
        assert_eq!(shown.matches("Illegal index").count(), 2);
    }

    #[test]
    fn test_choose_file_gives_up() {
        let input = Cursor::new("x\ny\nz\n1\n");
        let result = choose_file(2, input, Vec::new(), 3);
        assert!(matches!(result, Err(ChoiceError::AttemptsExhausted(3))));
    }

    #[test]
    fn test_choose_file_end_of_input() {
        let result = choose_file(2, Cursor::new(""), Vec::new(), 3);
        assert!(matches!(result, Err(ChoiceError::EndOfInput)));
    }

    #[test]
    fn test_list_files_relative_to_root() {
        let root = Path::new("/var/lib/upower");
        let files = vec![root.join("history-charge-BAT0.dat")];
        let mut output = Vec::new();
        list_files(&files, root, &mut output).unwrap();

        assert!(String::from_utf8(output).unwrap().contains("    * history-charge-BAT0.dat"));
    }
}
