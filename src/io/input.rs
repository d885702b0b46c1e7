use std::fs::File;
use std::io::{self, Read};

use is_terminal::IsTerminal;

use super::log;
use xlate::error::{Result, XlateError};
use xlate::types::{InputSource, Verbosity};

pub fn read_input(source: &InputSource, verbosity: Verbosity) -> Result<String> {
    let buf = match source {
        InputSource::Stdin => {
            if io::stdin().is_terminal() {
                log::warn("reading from terminal, end input with Ctrl-D", verbosity);
            }
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            buf
        }
        InputSource::File(path) => {
            log::debug(format!("reading {}", path.display()), verbosity);
            let mut file = File::open(path)?;
            let mut buf = Vec::new();
            file.read_to_end(&mut buf)?;
            buf
        }
        InputSource::Literal(text) => return Ok(text.clone()),
    };

    let text = String::from_utf8(buf).map_err(|_| XlateError::invalid_input("input is not valid UTF-8"))?;
    Ok(strip_line_ending(text))
}

// `echo` and most editors leave one trailing newline that is not part of the value.
fn strip_line_ending(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_line_ending() {
        assert_eq!(strip_line_ending("abc\n".to_string()), "abc");
        assert_eq!(strip_line_ending("abc\r\n".to_string()), "abc");
        assert_eq!(strip_line_ending("abc\n\n".to_string()), "abc\n");
        assert_eq!(strip_line_ending("abc".to_string()), "abc");
    }

    #[test]
    fn test_read_literal_is_verbatim() {
        let source = InputSource::Literal("SGk=\n".to_string());
        assert_eq!(read_input(&source, Verbosity::Quiet).unwrap(), "SGk=\n");
    }

    #[test]
    fn test_read_missing_file() {
        let source = InputSource::File("/nonexistent/xlate-input.txt".into());
        assert!(matches!(read_input(&source, Verbosity::Quiet), Err(XlateError::Io(_))));
    }
}
