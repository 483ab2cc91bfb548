use boolsimp_attrs::ErrorKind;

/// The expression contains a variable the assignment has no value for.
#[derive(Debug, Clone, ErrorKind, PartialEq, Eq)]
#[error(
    message = format!("no value was given for the variable `{}`", name),
    labels = ["this variable"],
    help = "assign a value of `0` or `1` to every variable in the expression",
)]
pub struct UnboundVariable {
    /// The name of the variable.
    pub name: String,
}

impl std::fmt::Display for UnboundVariable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", boolsimp_error::ErrorKind::message(self))
    }
}

impl std::error::Error for UnboundVariable {}
