//! The [`Error`] record: one failure with a message, an optional cause and
//! optional metadata.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{Error, GenericError};
//!
//! let io = std::io::Error::other("connection reset");
//! let err = Error::from_cause(io);
//!
//! assert_eq!(err.message(), "connection reset");
//! assert!(err.cause().is_some());
//! assert!(err.metadata().is_none());
//! ```
use crate::traits::GenericError;
use crate::types::alloc_type::String;
use crate::types::{Metadata, OutcomeError};
use alloc::boxed::Box;
use alloc::string::ToString;
use alloc::sync::Arc;
use core::fmt::{self, Debug, Display};
use core::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

type DynError = dyn core::error::Error + Send + Sync + 'static;

/// Shared handle to the underlying error that caused a failure.
///
/// Cloning is a reference-count bump. Two causes are equal only when they
/// point at the same underlying error value: error types rarely define value
/// equality, so a freshly constructed but identical-looking error is a
/// different cause.
#[derive(Clone)]
pub struct Cause {
    inner: Arc<DynError>,
    type_name: &'static str,
}

impl Cause {
    /// Wraps an error value, remembering its concrete type name.
    #[inline]
    pub fn new<C>(error: C) -> Self
    where
        C: core::error::Error + Send + Sync + 'static,
    {
        Self { inner: Arc::new(error), type_name: core::any::type_name::<C>() }
    }

    /// Wraps an already boxed error. The type name is reported as the trait
    /// object since the concrete type is erased.
    #[inline]
    pub fn from_boxed(error: Box<DynError>) -> Self {
        Self { inner: Arc::from(error), type_name: core::any::type_name::<DynError>() }
    }

    /// Fully qualified type name of the wrapped error.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// The wrapped error's `Display` output.
    #[inline]
    pub fn description(&self) -> String {
        self.inner.to_string()
    }

    #[inline]
    pub fn as_error(&self) -> &(dyn core::error::Error + 'static) {
        &*self.inner
    }

    /// Attempts to view the wrapped error as a concrete type.
    #[inline]
    pub fn downcast_ref<C>(&self) -> Option<&C>
    where
        C: core::error::Error + 'static,
    {
        self.inner.downcast_ref::<C>()
    }

    /// Returns `true` if both handles share the same underlying error.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<C> From<C> for Cause
where
    C: core::error::Error + Send + Sync + 'static,
{
    #[inline]
    fn from(error: C) -> Self {
        Self::new(error)
    }
}

impl PartialEq for Cause {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Cause {}

impl Hash for Cause {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Same address as `ptr_eq`, vtable dropped.
        (Arc::as_ptr(&self.inner) as *const () as usize).hash(state);
    }
}

impl Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = self.description();
        if description.is_empty() {
            f.write_str(self.type_name)
        } else {
            write!(f, "{}: {}", self.type_name, description)
        }
    }
}

impl Debug for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cause")
            .field("type_name", &self.type_name)
            .field("error", &self.inner)
            .finish()
    }
}

#[cfg(feature = "serde")]
impl Serialize for Cause {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Cause", 2)?;
        state.serialize_field("type", self.type_name)?;
        state.serialize_field("description", &self.description())?;
        state.end()
    }
}

/// Immutable failure record.
///
/// The message is always present. Constructors that take only a cause derive
/// the message from the cause's `Display` output.
///
/// Equality and hashing cover the message, the cause and the metadata. Causes
/// compare by identity (see [`Cause`]), so two errors built from separately
/// constructed but identical-looking causes are unequal, while clones of one
/// error are equal.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Error {
    message: String,
    #[cfg_attr(feature = "serde", serde(default, skip_deserializing))]
    cause: Option<Cause>,
    metadata: Option<Metadata>,
}

impl Error {
    /// Creates an error with only a message.
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), cause: None, metadata: None }
    }

    /// Alias of [`Error::new`].
    #[inline]
    pub fn just_text(message: impl Into<String>) -> Self {
        Self::new(message)
    }

    /// Creates an error with a message and metadata.
    #[inline]
    pub fn with_metadata(message: impl Into<String>, metadata: impl Into<Metadata>) -> Self {
        Self { message: message.into(), cause: None, metadata: Some(metadata.into()) }
    }

    /// Creates an error with a message and a cause.
    #[inline]
    pub fn with_cause(message: impl Into<String>, cause: impl Into<Cause>) -> Self {
        Self { message: message.into(), cause: Some(cause.into()), metadata: None }
    }

    /// Creates an error from a cause; the message is the cause's description.
    #[inline]
    pub fn from_cause(cause: impl Into<Cause>) -> Self {
        let cause = cause.into();
        Self { message: cause.description(), cause: Some(cause), metadata: None }
    }

    /// Creates an error from a cause and metadata; the message is the cause's
    /// description.
    #[inline]
    pub fn from_cause_with_metadata(cause: impl Into<Cause>, metadata: impl Into<Metadata>) -> Self {
        let cause = cause.into();
        Self { message: cause.description(), cause: Some(cause), metadata: Some(metadata.into()) }
    }

    /// Creates an error from a possibly absent cause.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::NullReference`] when `cause` is `None`, since no
    /// message can be derived.
    pub fn try_from_cause<C>(cause: Option<C>) -> Result<Self, OutcomeError>
    where
        C: Into<Cause>,
    {
        cause.map(Self::from_cause).ok_or(OutcomeError::NullReference { what: "cause" })
    }

    /// Creates an error with all three parts. `None` metadata stays absent.
    #[inline]
    pub fn full(
        message: impl Into<String>,
        cause: impl Into<Cause>,
        metadata: Option<Metadata>,
    ) -> Self {
        Self { message: message.into(), cause: Some(cause.into()), metadata }
    }

    /// Returns a builder for errors assembled from optional parts.
    #[inline]
    pub fn builder() -> ErrorBuilder {
        ErrorBuilder::new()
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    #[inline]
    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }
}

impl GenericError for Error {
    #[inline]
    fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    #[inline]
    fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::types::error_formatter::write_error(f, self, true, true)
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.cause.as_ref().map(Cause::as_error)
    }
}

/// Staging object for an [`Error`] whose parts may or may not be available.
///
/// # Examples
///
/// ```
/// use outcome_rail::{Error, OutcomeError};
///
/// let err = Error::builder().message("timeout").metadata_entry("ms", 500).build().unwrap();
/// assert_eq!(err.message(), "timeout");
///
/// assert_eq!(
///     Error::builder().build(),
///     Err(OutcomeError::NullArgument { name: "message" })
/// );
/// ```
#[derive(Debug, Default)]
pub struct ErrorBuilder {
    message: Option<String>,
    cause: Option<Cause>,
    metadata: Option<Metadata>,
}

impl ErrorBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn cause(mut self, cause: impl Into<Cause>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    /// Replaces the metadata map. `None` leaves the error without metadata.
    pub fn metadata(mut self, metadata: Option<Metadata>) -> Self {
        self.metadata = metadata;
        self
    }

    /// Adds one metadata entry, creating the map on first use.
    pub fn metadata_entry(
        mut self,
        key: impl Into<String>,
        value: impl Into<crate::types::MetadataValue>,
    ) -> Self {
        let metadata = self.metadata.take().unwrap_or_default();
        self.metadata = Some(metadata.with(key, value));
        self
    }

    /// Builds the error, deriving the message from the cause when none was set.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::NullArgument`] when neither a message nor a
    /// cause was supplied.
    pub fn build(self) -> Result<Error, OutcomeError> {
        let message = match (self.message, &self.cause) {
            (Some(message), _) => message,
            (None, Some(cause)) => cause.description(),
            (None, None) => return Err(OutcomeError::NullArgument { name: "message" }),
        };
        Ok(Error { message, cause: self.cause, metadata: self.metadata })
    }
}
