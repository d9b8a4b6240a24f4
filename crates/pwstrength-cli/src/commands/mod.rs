pub mod check;
pub mod criteria;
pub mod init;
pub mod session;
pub mod summarize;

use std::io::BufRead;
use std::time::Duration;

use crate::config::PwstrengthConfig;

/// Strip the line terminator (`\n`, `\r\n` or a lone `\r`), keeping every
/// other character.
pub(crate) fn trim_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Read a single candidate from a reader. EOF yields the empty string.
pub(crate) fn read_candidate(reader: &mut impl BufRead) -> std::io::Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(trim_line_ending(&line).to_owned())
}

/// Show the "analyzing" indicator for the configured delay.
pub(crate) fn analysis_pause(config: &PwstrengthConfig) {
    if config.analysis_delay_ms > 0 {
        eprintln!("Analyzing your password...");
        std::thread::sleep(Duration::from_millis(config.analysis_delay_ms));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_endings_are_stripped() {
        assert_eq!(trim_line_ending("abc\n"), "abc");
        assert_eq!(trim_line_ending("abc\r\n"), "abc");
        assert_eq!(trim_line_ending("  abc  \n"), "  abc  ");
        assert_eq!(trim_line_ending("abc"), "abc");
        assert_eq!(trim_line_ending("abc\r"), "abc");
        assert_eq!(trim_line_ending("a\rb"), "a\rb");
    }

    #[test]
    fn read_candidate_keeps_whitespace() {
        let mut input: &[u8] = b" P@ss w0rd \nsecond\n";
        assert_eq!(read_candidate(&mut input).unwrap(), " P@ss w0rd ");
    }

    #[test]
    fn read_candidate_at_eof_is_empty() {
        let mut input: &[u8] = b"";
        assert_eq!(read_candidate(&mut input).unwrap(), "");
    }
}
