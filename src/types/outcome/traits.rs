use super::Outcome;
use core::fmt::{self, Debug, Display};

/// Renders `Result{success=<bool>, object=<payload|null>, errors=[<e1>, ...]}`.
///
/// The payload goes through `Debug` and each error through `Display`.
impl<T: Debug, E: Display> Display for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Result{{success={}, object=", self.success)?;
        match &self.object {
            Some(object) => write!(f, "{:?}", object)?,
            None => f.write_str("null")?,
        }
        f.write_str(", errors=[")?;
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", error)?;
        }
        f.write_str("]}")
    }
}

