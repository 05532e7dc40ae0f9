use std::fmt;

use itertools::Itertools as _;

use crate::{parser::SourcePosition, validation::DirectiveRegistry};

/// Document validation error
#[derive(Clone, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct RuleError {
    locations: Vec<SourcePosition>,
    message: String,
}

#[doc(hidden)]
pub struct ValidatorContext<'a> {
    pub directives: &'a DirectiveRegistry<'a>,
    errors: Vec<RuleError>,
}

impl RuleError {
    #[doc(hidden)]
    pub fn new(message: &str, locations: &[SourcePosition]) -> Self {
        Self {
            message: message.into(),
            locations: locations.to_vec(),
        }
    }

    /// Access the message for a validation error
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Access the positions of the validation error
    ///
    /// All validation errors contain at least one source position, but some
    /// validators supply extra context through multiple positions.
    pub fn locations(&self) -> &[SourcePosition] {
        &self.locations
    }
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // This is fine since all `RuleError`s should have at least one source
        // position.
        let locations = self.locations.iter().join(", ");
        write!(f, "{} At {locations}", self.message)
    }
}

impl std::error::Error for RuleError {}

impl<'a> ValidatorContext<'a> {
    #[doc(hidden)]
    pub fn new(directives: &'a DirectiveRegistry<'a>) -> Self {
        Self {
            directives,
            errors: Vec::new(),
        }
    }

    #[doc(hidden)]
    pub fn report_error(&mut self, message: &str, locations: &[SourcePosition]) {
        self.errors.push(RuleError::new(message, locations))
    }

    /// Consumes this context, returning the reported errors in the order
    /// they were found.
    #[doc(hidden)]
    pub fn into_errors(self) -> Vec<RuleError> {
        self.errors
    }
}
