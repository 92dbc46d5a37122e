//! Turning commands into request lines and response bytes into text.
//!
//! A request is one line: the command name followed by its arguments, all
//! joined by [`SEPARATOR`] and terminated by `\n`. The separator is a
//! musical-notation codepoint that never shows up in chat messages, item
//! names, or numbers, so arguments travel without any escaping:
//!
//! ```text
//! postChat𝇉hello: world; bye\n
//! ```
//!
//! Responses come back as a single chunk of bytes. [`decode_text`] turns
//! that chunk into trimmed text; the model types in this crate take it
//! from there.

use std::fmt;

use crate::ProtocolError;

/// Field separator for both requests and responses.
pub const SEPARATOR: char = '\u{1D1C9}';

/// A value that can be written as one argument of a request line.
///
/// Numbers use Rust's default `Display` formatting, booleans are written as
/// `true` / `false`, enums as their wire name, strings as-is.
pub trait WireArg {
    /// Returns the textual form of this argument.
    fn to_wire_arg(&self) -> String;
}

macro_rules! display_wire_arg {
    ($($ty:ty),* $(,)?) => {
        $(
            impl WireArg for $ty {
                fn to_wire_arg(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

display_wire_arg!(i32, i64, u32, u64, usize, f32, f64, bool, str, String);

impl<T: WireArg + ?Sized> WireArg for &T {
    fn to_wire_arg(&self) -> String {
        (**self).to_wire_arg()
    }
}

/// Formats a `key:value` argument, the shape used by optional arguments
/// such as `name:Excalibur` or `rotation:90`.
pub fn tagged(key: &str, value: impl WireArg) -> String {
    format!("{key}:{}", value.to_wire_arg())
}

/// A request line under construction.
///
/// ```rust
/// use blockwire_protocol::{CommandLine, SEPARATOR};
///
/// let line = CommandLine::new("getBlock").arg(1).arg(64).arg(-3).arg("world");
/// assert_eq!(
///     line.encode().unwrap(),
///     format!("getBlock{SEPARATOR}1{SEPARATOR}64{SEPARATOR}-3{SEPARATOR}world\n"),
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    name: &'static str,
    args: Vec<String>,
}

impl CommandLine {
    /// Starts a line for the command `name`.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            args: Vec::new(),
        }
    }

    /// Appends an argument.
    pub fn arg(mut self, value: impl WireArg) -> Self {
        self.args.push(value.to_wire_arg());
        self
    }

    /// Appends an argument only when `value` is `Some`.
    pub fn arg_opt(self, value: Option<impl WireArg>) -> Self {
        match value {
            Some(value) => self.arg(value),
            None => self,
        }
    }

    /// The command name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The stringified arguments, in order.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Encodes the line for transmission, including the trailing newline.
    ///
    /// # Errors
    /// Returns `ProtocolError::IllegalArgument` if any argument contains
    /// [`SEPARATOR`] or a line break. Nothing is sent in that case.
    pub fn encode(&self) -> Result<String, ProtocolError> {
        if let Some(bad) = self
            .args
            .iter()
            .find(|a| a.contains(SEPARATOR) || a.contains(['\n', '\r']))
        {
            return Err(ProtocolError::IllegalArgument(bad.clone()));
        }
        Ok(format!("{self}\n"))
    }
}

/// Displays the line without its terminator, for logging.
impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)?;
        for arg in &self.args {
            write!(f, "{SEPARATOR}{arg}")?;
        }
        Ok(())
    }
}

/// Decodes one response chunk into text, trimming surrounding whitespace
/// and the line terminator.
///
/// # Errors
/// Returns `ProtocolError::InvalidUtf8` if the bytes are not UTF-8.
pub fn decode_text(data: &[u8]) -> Result<String, ProtocolError> {
    let text = std::str::from_utf8(data)?;
    Ok(text.trim().to_string())
}

/// Splits a response into its separator-delimited fields.
pub fn split_fields(text: &str) -> std::str::Split<'_, char> {
    text.split(SEPARATOR)
}

/// Joins already-encoded fields with [`SEPARATOR`].
pub fn join_fields<I, S>(fields: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for (i, field) in fields.into_iter().enumerate() {
        if i > 0 {
            out.push(SEPARATOR);
        }
        out.push_str(field.as_ref());
    }
    out
}
