//! Error types for registry construction.

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Error raised while building or populating the built-in registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The generated built-in text failed to parse.
    Parse(String),
    /// Two prototypes with one signature but different return types.
    ConflictingPrototype(String),
    /// A declaration used a type the lowering does not recognize.
    UnknownType(String),
}

impl RegistryError {
    /// Create a new parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        RegistryError::Parse(msg.into())
    }

    /// Create a conflicting-prototype error for the given function.
    pub fn conflicting_prototype(name: impl Into<String>) -> Self {
        RegistryError::ConflictingPrototype(name.into())
    }

    /// Create an unknown-type error.
    pub fn unknown_type(name: impl Into<String>) -> Self {
        RegistryError::UnknownType(name.into())
    }
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::Parse(msg) => write!(f, "built-in text parse error: {}", msg),
            RegistryError::ConflictingPrototype(name) => {
                write!(
                    f,
                    "conflicting return types for one signature of '{}'",
                    name
                )
            }
            RegistryError::UnknownType(name) => write!(f, "unknown type '{}'", name),
        }
    }
}

impl std::error::Error for RegistryError {}
