use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::slice;
use std::vec;

/// A boxed, thread-safe error of any type.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// A collection of errors that is itself an error.
///
/// When displayed, a MultiError lists the count followed by each contained error, in the order
/// they were added:
///
/// ```
/// # use exercise_lib::errors::MultiError;
/// let mut error = MultiError::new();
/// error.push("error 1");
/// error.push("error 2");
/// assert_eq!(error.to_string(), "2 errors occurred:\n\t* error 1\t* error 2\n");
/// ```
///
/// An empty MultiError displays as an empty string.
#[derive(Debug, Default)]
pub struct MultiError {
    errors: Vec<BoxError>,
}

impl MultiError {
    pub const fn new() -> MultiError {
        MultiError { errors: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Adds an error to the end of the collection.
    pub fn push<E: Into<BoxError>>(&mut self, error: E) {
        self.errors.push(error.into());
    }

    pub fn iter(&self) -> slice::Iter<'_, BoxError> {
        self.errors.iter()
    }

    /// Converts the collection into a [`Result`], which is [`Ok`] only if no errors were added.
    ///
    /// # Errors
    /// Returns `self` if it contains at least one error.
    pub fn into_result(self) -> Result<(), MultiError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// Combines an optional existing error with more errors.
///
/// If `error` is a [`MultiError`], its contents are flattened into the result rather than being
/// nested. Any other error becomes the first entry. The entries of `errors` follow in order.
///
/// # Examples
/// ```
/// # use exercise_lib::errors::append;
/// let error = append(None, ["error 1"]);
/// let error = append(Some(error.into()), ["error 2"]);
/// assert_eq!(error.len(), 2);
/// ```
pub fn append<I>(error: Option<BoxError>, errors: I) -> MultiError
where
    I: IntoIterator,
    I::Item: Into<BoxError>,
{
    let mut result = match error {
        Some(error) => match error.downcast::<MultiError>() {
            Ok(multi) => *multi,
            Err(error) => MultiError { errors: vec![error] },
        },
        None => MultiError::new(),
    };
    result.extend(errors);
    result
}

impl Display for MultiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        writeln!(f, "{} errors occurred:", self.len())?;
        for error in &self.errors {
            write!(f, "\t* {}", error)?;
        }
        writeln!(f)
    }
}

impl Error for MultiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.errors.first().map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}

impl<E: Into<BoxError>> Extend<E> for MultiError {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.errors.extend(iter.into_iter().map(Into::into));
    }
}

impl<E: Into<BoxError>> FromIterator<E> for MultiError {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut result = MultiError::new();
        result.extend(iter);
        result
    }
}

impl IntoIterator for MultiError {
    type Item = BoxError;

    type IntoIter = vec::IntoIter<BoxError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a MultiError {
    type Item = &'a BoxError;

    type IntoIter = slice::Iter<'a, BoxError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
