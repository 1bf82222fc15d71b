use std::fmt;

use crate::core::alphabet;

/// Errors that can occur during decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The input contains a byte that is not one of the 85 alphabet symbols
    InvalidSymbol {
        symbol: u8,
        /// Byte offset into the caller's input
        position: usize,
    },
    /// A group of valid symbols decodes to a value above `u32::MAX`
    Overflow {
        /// The five symbols of the group, including any `~` padding
        group: [u8; 5],
        /// Byte offset of the group's first symbol
        position: usize,
    },
    /// The decoded length does not match a fixed-width target
    InvalidLength { actual: usize, expected: usize },
}

impl DecodeError {
    pub fn invalid_symbol(symbol: u8, position: usize) -> Self {
        DecodeError::InvalidSymbol { symbol, position }
    }

    pub fn overflow(group: [u8; 5], position: usize) -> Self {
        DecodeError::Overflow { group, position }
    }

    pub fn invalid_length(actual: usize, expected: usize) -> Self {
        DecodeError::InvalidLength { actual, expected }
    }

    /// Byte offset the error refers to, if any.
    pub fn position(&self) -> Option<usize> {
        match self {
            DecodeError::InvalidSymbol { position, .. } | DecodeError::Overflow { position, .. } => {
                Some(*position)
            }
            DecodeError::InvalidLength { .. } => None,
        }
    }

    /// Renders the error with an explicit color choice instead of probing
    /// `NO_COLOR` and the terminal.
    pub fn render(&self, color: bool) -> Rendered<'_> {
        Rendered { error: self, color }
    }

    fn write_message<W: fmt::Write>(&self, f: &mut W, use_color: bool) -> fmt::Result {
        match self {
            DecodeError::InvalidSymbol { symbol, position } => {
                let shown = escape(&[*symbol]);
                if use_color {
                    writeln!(
                        f,
                        "\x1b[1;31merror:\x1b[0m invalid base85 alphabet '{}' at offset {}",
                        shown, position
                    )?;
                } else {
                    writeln!(
                        f,
                        "error: invalid base85 alphabet '{}' at offset {}",
                        shown, position
                    )?;
                }
                writeln!(f)?;
                if use_color {
                    write!(
                        f,
                        "\x1b[1;36mhint:\x1b[0m valid characters: {}",
                        alphabet::as_str()
                    )
                } else {
                    write!(f, "hint: valid characters: {}", alphabet::as_str())
                }
            }
            DecodeError::Overflow { group, position } => {
                if use_color {
                    writeln!(
                        f,
                        "\x1b[1;31merror:\x1b[0m invalid base85 sequence {} at offset {}",
                        escape(group),
                        position
                    )?;
                } else {
                    writeln!(
                        f,
                        "error: invalid base85 sequence {} at offset {}",
                        escape(group),
                        position
                    )?;
                }
                writeln!(f)?;
                if use_color {
                    write!(
                        f,
                        "\x1b[1;36mhint:\x1b[0m a group of 5 symbols must not exceed 4294967295 (|NsC0)"
                    )
                } else {
                    write!(
                        f,
                        "hint: a group of 5 symbols must not exceed 4294967295 (|NsC0)"
                    )
                }
            }
            DecodeError::InvalidLength { actual, expected } => {
                if use_color {
                    writeln!(f, "\x1b[1;31merror:\x1b[0m invalid length for decode")?;
                } else {
                    writeln!(f, "error: invalid length for decode")?;
                }
                writeln!(f)?;
                write!(
                    f,
                    "  input is {} characters, expected {}",
                    actual, expected
                )
            }
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_message(f, should_use_color())
    }
}

impl std::error::Error for DecodeError {}

/// A [`DecodeError`] paired with a fixed color choice, see
/// [`DecodeError::render`].
pub struct Rendered<'a> {
    error: &'a DecodeError,
    color: bool,
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.error.write_message(f, self.color)
    }
}

fn escape(bytes: &[u8]) -> String {
    bytes.escape_ascii().to_string()
}

/// Check if colored output should be used
fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stderr is a terminal
    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}
