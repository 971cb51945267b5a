use crate::error::Result;

/// A freshly deserialized ("unresolved") configuration that still needs
/// validation before it can be used.
///
/// [`read_typed_config`][super::read_typed_config] deserializes a YAML file
/// into an implementor and returns the output of [`Self::resolve`].
pub trait ResolvableConfiguration {
    type Resolved;

    /// Validate the configuration, returning
    /// [`Error::InvalidConfiguration`][crate::Error::InvalidConfiguration]
    /// for values that deserialize but cannot be used.
    fn resolve(self) -> Result<Self::Resolved>;
}


/// A configuration section whose resolution depends on values defined
/// elsewhere in the file.
///
/// Stage directories, for example, are resolved against the placeholder
/// map built from `artifacts_root` (`{ARTIFACTS_ROOT}` → its value).
pub trait ResolvableConfigurationWithContext {
    type Context;
    type Resolved;

    /// Substitute `context` into the section and validate the result.
    fn resolve(self, context: Self::Context) -> Result<Self::Resolved>;
}
