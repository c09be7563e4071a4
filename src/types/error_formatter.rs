//! Outcome and error rendering utilities.
//!
//! `Display` on [`Outcome`] and [`Error`](crate::Error) always produces the
//! single-line form. [`OutcomeFormatConfig`] covers the other shapes callers
//! want in logs: one error per line, or messages without causes and metadata.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let failed: Outcome<()> = Outcome::failure_messages("a", ["b"]);
//!
//! assert_eq!(
//!     failed.fmt().compact().to_string(),
//!     "Result{success=false, object=null, errors=[Error[message=a], Error[message=b]]}"
//! );
//! assert_eq!(
//!     failed.fmt().compact().pretty().to_string(),
//!     "Result{success=false, object=null, errors=[\n  Error[message=a],\n  Error[message=b]\n]}"
//! );
//! ```

use crate::traits::GenericError;
use crate::types::alloc_type;
use crate::types::Outcome;
use core::fmt::{self, Debug, Display, Write};

/// Writes `Error[message=.., throwable=.., metadata=..]`, dropping the parts
/// that are switched off. Absent parts render as `null`.
pub(crate) fn write_error<G, W>(
    out: &mut W,
    error: &G,
    show_cause: bool,
    show_metadata: bool,
) -> fmt::Result
where
    G: GenericError + ?Sized,
    W: Write + ?Sized,
{
    write!(out, "Error[message={}", error.message())?;
    if show_cause {
        match error.cause() {
            Some(cause) => write!(out, ", throwable={}", cause)?,
            None => out.write_str(", throwable=null")?,
        }
    }
    if show_metadata {
        match error.metadata() {
            Some(metadata) => write!(out, ", metadata={}", metadata)?,
            None => out.write_str(", metadata=null")?,
        }
    }
    out.write_char(']')
}

/// Configuration for rendering an [`Outcome`].
///
/// `Default` reproduces the `Display` output exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeFormatConfig {
    /// Placed between errors on a single line.
    pub separator: alloc_type::String,
    /// One error per line, each prefixed by `indent`.
    pub multiline: bool,
    pub indent: alloc_type::String,
    pub show_object: bool,
    pub show_cause: bool,
    pub show_metadata: bool,
}

impl Default for OutcomeFormatConfig {
    fn default() -> Self {
        Self {
            separator: ", ".into(),
            multiline: false,
            indent: "  ".into(),
            show_object: true,
            show_cause: true,
            show_metadata: true,
        }
    }
}

impl OutcomeFormatConfig {
    #[inline]
    pub fn pretty() -> Self {
        Self { multiline: true, ..Default::default() }
    }

    #[inline]
    pub fn compact() -> Self {
        Self { show_cause: false, show_metadata: false, ..Default::default() }
    }

    /// Renders `outcome` into `out` following this configuration, the payload
    /// through `Debug`.
    pub fn write_outcome<T, E, W>(&self, out: &mut W, outcome: &Outcome<T, E>) -> fmt::Result
    where
        T: Debug,
        E: GenericError,
        W: Write + ?Sized,
    {
        self.write_parts(out, outcome, outcome.object().map(AsDebug))
    }

    /// Like [`write_outcome`](Self::write_outcome) but renders the payload
    /// through `Display`, so a string payload appears unquoted.
    pub fn write_outcome_display<T, E, W>(
        &self,
        out: &mut W,
        outcome: &Outcome<T, E>,
    ) -> fmt::Result
    where
        T: Display,
        E: GenericError,
        W: Write + ?Sized,
    {
        self.write_parts(out, outcome, outcome.object())
    }

    fn write_parts<T, E, O, W>(
        &self,
        out: &mut W,
        outcome: &Outcome<T, E>,
        object: Option<O>,
    ) -> fmt::Result
    where
        E: GenericError,
        O: Display,
        W: Write + ?Sized,
    {
        write!(out, "Result{{success={}", outcome.is_success())?;
        if self.show_object {
            match object {
                Some(object) => write!(out, ", object={}", object)?,
                None => out.write_str(", object=null")?,
            }
        }
        out.write_str(", errors=[")?;

        let errors = outcome.errors();
        for (i, error) in errors.iter().enumerate() {
            if self.multiline {
                if i > 0 {
                    out.write_char(',')?;
                }
                out.write_char('\n')?;
                out.write_str(&self.indent)?;
            } else if i > 0 {
                out.write_str(&self.separator)?;
            }
            write_error(out, error, self.show_cause, self.show_metadata)?;
        }
        if self.multiline && !errors.is_empty() {
            out.write_char('\n')?;
        }
        out.write_str("]}")
    }
}

struct AsDebug<'a, T>(&'a T);

impl<T: Debug> Display for AsDebug<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(self.0, f)
    }
}

/// Builder for customizing outcome display output.
pub struct OutcomeFormatBuilder<'a, T, E> {
    pub(crate) outcome: &'a Outcome<T, E>,
    pub(crate) config: OutcomeFormatConfig,
}

impl<'a, T, E> OutcomeFormatBuilder<'a, T, E> {
    pub fn new(outcome: &'a Outcome<T, E>) -> Self {
        Self { outcome, config: OutcomeFormatConfig::default() }
    }

    pub fn with_config(mut self, config: OutcomeFormatConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<alloc_type::String>) -> Self {
        self.config.separator = separator.into();
        self
    }

    pub fn show_object(mut self, show: bool) -> Self {
        self.config.show_object = show;
        self
    }

    pub fn show_cause(mut self, show: bool) -> Self {
        self.config.show_cause = show;
        self
    }

    pub fn show_metadata(mut self, show: bool) -> Self {
        self.config.show_metadata = show;
        self
    }

    /// Switches to one error per line, keeping the other settings.
    pub fn pretty(mut self) -> Self {
        self.config.multiline = true;
        self
    }

    /// Hides causes and metadata, keeping the other settings.
    pub fn compact(mut self) -> Self {
        self.config.show_cause = false;
        self.config.show_metadata = false;
        self
    }

    /// Renders the payload through `Display` instead of `Debug`.
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let ok = Outcome::success("id-7");
    /// assert_eq!(ok.to_string(), "Result{success=true, object=\"id-7\", errors=[]}");
    /// assert_eq!(
    ///     ok.fmt().display_object().to_string(),
    ///     "Result{success=true, object=id-7, errors=[]}"
    /// );
    /// ```
    pub fn display_object(self) -> DisplayObjectFormat<'a, T, E> {
        DisplayObjectFormat { inner: self }
    }
}

/// Outcome renderer that writes the payload through `Display`.
///
/// Created by [`OutcomeFormatBuilder::display_object`].
pub struct DisplayObjectFormat<'a, T, E> {
    inner: OutcomeFormatBuilder<'a, T, E>,
}

impl<'a, T, E> Display for DisplayObjectFormat<'a, T, E>
where
    T: Display,
    E: GenericError,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.config.write_outcome_display(f, self.inner.outcome)
    }
}

impl<'a, T, E> Display for OutcomeFormatBuilder<'a, T, E>
where
    T: Debug,
    E: GenericError,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.config.write_outcome(f, self.outcome)
    }
}
