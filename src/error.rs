use std::fmt;

/// Errors returned by the fallible accessors of [`TypeMap`](crate::TypeMap)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// No value of the named type is stored in the map
    NotFound(&'static str),
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MapError::NotFound(type_name) => write!(f, "No value of type {} in map", type_name),
        }
    }
}

impl std::error::Error for MapError {}
