use crate::error::SeedError;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

pub const EMAIL_PROMPT: &str = "Digite o e-mail do professor: ";
pub const PASSWORD_PROMPT: &str = "Digite a senha do professor: ";

/// Where the intake gets the two values it submits.
pub trait CredentialSource {
    fn email(&mut self) -> Result<String, SeedError>;
    fn password(&mut self) -> Result<String, SeedError>;
}

/// Line-oriented prompt over any reader/writer pair.
pub struct TerminalPrompt<R, W> {
    input: R,
    output: W,
}

impl TerminalPrompt<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn ask(&mut self, prompt: &str) -> Result<String, SeedError> {
        self.output.write_all(prompt.as_bytes())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before a value was entered",
            )
            .into());
        }
        Ok(strip_line_ending(line))
    }
}

impl<R: BufRead, W: Write> CredentialSource for TerminalPrompt<R, W> {
    fn email(&mut self) -> Result<String, SeedError> {
        self.ask(EMAIL_PROMPT)
    }

    fn password(&mut self) -> Result<String, SeedError> {
        self.ask(PASSWORD_PROMPT)
    }
}

/// Drop the trailing `\n` or `\r\n`; everything else is kept as typed.
fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompt(input: &str) -> TerminalPrompt<Cursor<Vec<u8>>, Vec<u8>> {
        TerminalPrompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn writes_prompts_in_order() {
        let mut p = prompt("prof1@example.com\nhunter2\n");
        assert_eq!(p.email().unwrap(), "prof1@example.com");
        assert_eq!(p.password().unwrap(), "hunter2");

        let (_, out) = p.into_inner();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("{EMAIL_PROMPT}{PASSWORD_PROMPT}")
        );
    }

    #[test]
    fn keeps_surrounding_whitespace() {
        let mut p = prompt("  Prof@Example.com \r\n\tpw \n");
        assert_eq!(p.email().unwrap(), "  Prof@Example.com ");
        assert_eq!(p.password().unwrap(), "\tpw ");
    }

    #[test]
    fn empty_lines_are_values() {
        let mut p = prompt("\n\n");
        assert_eq!(p.email().unwrap(), "");
        assert_eq!(p.password().unwrap(), "");
    }

    #[test]
    fn last_line_without_newline_is_accepted() {
        let mut p = prompt("a@b.c\nsecret");
        p.email().unwrap();
        assert_eq!(p.password().unwrap(), "secret");
    }

    #[test]
    fn eof_is_an_error() {
        let mut p = prompt("a@b.c\n");
        p.email().unwrap();
        let err = p.password().unwrap_err();
        assert!(
            matches!(err, SeedError::Prompt(ref e) if e.kind() == io::ErrorKind::UnexpectedEof)
        );
    }

    #[test]
    fn lone_carriage_return_is_kept() {
        assert_eq!(strip_line_ending("x\r".to_string()), "x\r");
    }
}
