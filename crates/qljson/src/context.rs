//! Per-parse configuration.

/// Default limit on object/array nesting.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Options fixed for the duration of one parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseContext {
    /// Return unrecognised bare tokens as strings instead of failing with
    /// [`QlJsonError::InvalidValue`](crate::QlJsonError::InvalidValue).
    pub unknown_value_is_spaceless_string: bool,
    /// Maximum nesting of objects and arrays.
    pub max_depth: usize,
}

impl ParseContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_spaceless_strings(mut self, enabled: bool) -> Self {
        self.unknown_value_is_spaceless_string = enabled;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ParseContext {
    fn default() -> Self {
        Self {
            unknown_value_is_spaceless_string: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
