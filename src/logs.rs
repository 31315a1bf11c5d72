//! Reporting error messages to the user.
use std::io::{self, Write};
use tracing::warn;

/// Write `messages` one per line, framed by blank lines.
///
/// Returns `Ok(false)` without writing anything when `messages` is empty.
pub fn write_error_messages<W, S>(writer: &mut W, messages: &[S]) -> io::Result<bool>
where
    W: Write,
    S: AsRef<str>,
{
    if messages.is_empty() {
        return Ok(false);
    }
    writeln!(writer)?;
    for message in messages {
        writeln!(writer, "{}", message.as_ref())?;
    }
    writeln!(writer)?;
    writer.flush()?;
    Ok(true)
}

/// Print `messages` to stderr, then exit with `exit_status` if one is given.
///
/// Nothing is printed and the process keeps running when `messages` is empty.
#[allow(clippy::exit)]
pub fn display_error_messages<S: AsRef<str>>(messages: &[S], exit_status: Option<i32>) {
    let printed = match write_error_messages(&mut io::stderr().lock(), messages) {
        Ok(printed) => printed,
        Err(e) => {
            warn!("Failed to write error messages: {e}");
            !messages.is_empty()
        }
    };
    if let (true, Some(code)) = (printed, exit_status) {
        std::process::exit(code);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_error_messages() {
        let mut out = Vec::new();
        let printed = write_error_messages(&mut out, &["message one", "message two"])
            .expect("write to Vec");
        assert!(printed);
        assert_eq!(String::from_utf8_lossy(&out), "\nmessage one\nmessage two\n\n");
    }

    #[test]
    fn test_write_error_messages_empty() {
        let mut out = Vec::new();
        let messages: [&str; 0] = [];
        let printed = write_error_messages(&mut out, &messages).expect("write to Vec");
        assert!(!printed);
        assert!(out.is_empty());
    }

    #[test]
    fn test_write_error_messages_owned_strings() {
        let mut out = Vec::new();
        let messages = vec![format!("{} failed", "build")];
        write_error_messages(&mut out, &messages).expect("write to Vec");
        assert!(String::from_utf8_lossy(&out).contains("build failed"));
    }

    #[test]
    fn test_display_error_messages_without_exit() {
        // No exit status: must return normally.
        display_error_messages(&["message one"], None);
        let messages: [String; 0] = [];
        display_error_messages(&messages, Some(1));
    }
}
