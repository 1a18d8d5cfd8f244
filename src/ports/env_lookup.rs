//! Environment lookup port definition.

/// Read-only view of environment variables.
///
/// Unset and empty variables are indistinguishable: both read as `""`.
pub trait EnvLookup {
    /// Value of `name`, or an empty string when it is not set.
    fn var(&self, name: &str) -> String;
}

impl<F> EnvLookup for F
where
    F: Fn(&str) -> String,
{
    fn var(&self, name: &str) -> String {
        self(name)
    }
}
