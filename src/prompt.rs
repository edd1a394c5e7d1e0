//! Interactive line prompts.

use crate::error::Result;
use std::io::{BufRead, Write};

/// Write `prompt`, then read one line with its terminator stripped.
///
/// End of input reads as an empty line.
pub fn read_line_prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<String> {
    output.write_all(prompt.as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}

/// Prompt with a default value.
///
/// Returns `default` verbatim when the response is empty after trimming,
/// otherwise the untrimmed response.
pub fn prompt_with_default<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    default: &str,
) -> Result<String> {
    let text = format!("{prompt} (press Enter to use default: '{default}'):");
    let response = read_line_prompt(input, output, &text)?;

    if response.trim().is_empty() {
        tracing::debug!("Using default for {:?}", prompt);
        Ok(default.to_string())
    } else {
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn ask(response: &str) -> (String, String) {
        let mut input = Cursor::new(response.as_bytes().to_vec());
        let mut output = Vec::new();
        let value = prompt_with_default(&mut input, &mut output, "Enter route", "1 -> 2").unwrap();
        (value, String::from_utf8(output).unwrap())
    }

    #[test]
    fn shows_default_in_prompt() {
        let (_, shown) = ask("\n");
        assert_eq!(shown, "Enter route (press Enter to use default: '1 -> 2'):");
    }

    #[test]
    fn blank_response_returns_default() {
        assert_eq!(ask("\n").0, "1 -> 2");
        assert_eq!(ask("   \r\n").0, "1 -> 2");
        assert_eq!(ask("").0, "1 -> 2");
    }

    #[test]
    fn non_blank_response_is_returned_untrimmed() {
        assert_eq!(ask(" 0 -> 1 \n").0, " 0 -> 1 ");
        assert_eq!(ask("3\r\n").0, "3");
    }

    #[test]
    fn reads_a_single_line() {
        let mut input = Cursor::new(b"first\nsecond\n".to_vec());
        let mut output = Vec::new();
        assert_eq!(read_line_prompt(&mut input, &mut output, "> ").unwrap(), "first");
        assert_eq!(read_line_prompt(&mut input, &mut output, "> ").unwrap(), "second");
        assert_eq!(output, b"> > ");
    }
}
