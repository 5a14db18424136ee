//! Command line framing: `keyword ["=" argument] "\n"`.

use heapless::Vec;

use super::TERMINATOR;
use crate::config::CMD_LEN_MAX;

/// Room left for keyword, `=` and argument once the terminator is reserved.
const BODY_MAX: usize = CMD_LEN_MAX - 1;

/// A framed AT command, at most [`CMD_LEN_MAX`] bytes and always ending in
/// exactly one `\n`.
///
/// Over-long input is cut rather than rejected, so a long device name is
/// still sent, just shortened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Command {
    bytes: Vec<u8, CMD_LEN_MAX>,
    truncated: bool,
}

impl Command {
    /// Frame `keyword=argument`, or just `keyword` when there is no argument.
    pub fn new(keyword: &str, argument: Option<&str>) -> Self {
        let mut cmd = Self {
            bytes: Vec::new(),
            truncated: false,
        };
        cmd.push_line(keyword.as_bytes());
        if let Some(arg) = argument {
            cmd.push_body(b"=");
            cmd.push_line(arg.as_bytes());
        }
        // BODY_MAX keeps one slot free.
        let _ = cmd.bytes.push(TERMINATOR);
        cmd
    }

    /// Frame a complete line such as `AT+FACTORYRESET`.
    pub fn from_line(line: &str) -> Self {
        Self::new(line, None)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// `true` if part of the input did not fit or spanned several lines.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    fn push_line(&mut self, text: &[u8]) {
        let line = single_line(text);
        if line.len() < text.len() {
            self.truncated = true;
        }
        self.push_body(line);
    }

    fn push_body(&mut self, part: &[u8]) {
        let room = BODY_MAX.saturating_sub(self.bytes.len());
        let take = part.len().min(room);
        if take < part.len() {
            self.truncated = true;
        }
        let _ = self.bytes.extend_from_slice(&part[..take]);
    }
}

impl AsRef<[u8]> for Command {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// Cut `text` at the first byte that would end the line early.
fn single_line(text: &[u8]) -> &[u8] {
    match text.iter().position(|&b| matches!(b, b'\n' | b'\r' | 0)) {
        Some(end) => &text[..end],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_only() {
        let cmd = Command::from_line("AT+FACTORYRESET");
        assert_eq!(cmd.as_bytes(), b"AT+FACTORYRESET\n");
        assert!(!cmd.is_truncated());
    }

    #[test]
    fn keyword_with_argument() {
        let cmd = Command::new("AT+BLEHIDEN", Some("1"));
        assert_eq!(cmd.as_bytes(), b"AT+BLEHIDEN=1\n");

        let cmd = Command::new("AT+GAPDEVNAME", Some("Planck Keyboard"));
        assert_eq!(cmd.as_bytes(), b"AT+GAPDEVNAME=Planck Keyboard\n");
    }

    #[test]
    fn empty_argument_keeps_separator() {
        let cmd = Command::new("AT+GAPDEVNAME", Some(""));
        assert_eq!(cmd.as_bytes(), b"AT+GAPDEVNAME=\n");
    }

    #[test]
    fn long_argument_is_cut_to_bound() {
        let name = "A Very Long Keyboard Name That Does Not Fit";
        let cmd = Command::new("AT+GAPDEVNAME", Some(name));
        assert_eq!(cmd.len(), CMD_LEN_MAX);
        assert_eq!(cmd.as_bytes().last(), Some(&b'\n'));
        assert_eq!(&cmd.as_bytes()[..15], b"AT+GAPDEVNAME=A");
        assert!(cmd.is_truncated());
    }

    #[test]
    fn exactly_fitting_argument_is_not_truncated() {
        // 14 bytes of keyword and '=' plus 25 of name fill the body.
        let name = "ABCDEFGHIJKLMNOPQRSTUVWXY";
        let cmd = Command::new("AT+GAPDEVNAME", Some(name));
        assert_eq!(cmd.len(), CMD_LEN_MAX);
        assert!(!cmd.is_truncated());
    }

    #[test]
    fn embedded_newline_ends_argument() {
        let cmd = Command::new("AT+GAPDEVNAME", Some("Planck\nATZ"));
        assert_eq!(cmd.as_bytes(), b"AT+GAPDEVNAME=Planck\n");
        assert!(cmd.is_truncated());
        assert_eq!(cmd.as_bytes().iter().filter(|&&b| b == b'\n').count(), 1);
    }

    #[test]
    fn never_exceeds_bound() {
        let long = "X".repeat(200);
        let cmd = Command::new(&long, Some(&long));
        assert_eq!(cmd.len(), CMD_LEN_MAX);
        assert_eq!(cmd.as_bytes()[CMD_LEN_MAX - 1], b'\n');
        assert!(!cmd.as_bytes().contains(&b'='));
    }
}
