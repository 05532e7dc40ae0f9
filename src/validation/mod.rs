//! Document validation related methods and data structures

mod context;
mod location;
mod multi_visitor;
mod registry;
mod rules;
mod traits;
mod visitor;

#[cfg(test)]
pub(crate) mod test_harness;

pub use self::{
    context::{RuleError, ValidatorContext},
    location::{NodeKind, directive_location},
    multi_visitor::{MultiVisitorCons, MultiVisitorNil},
    registry::DirectiveRegistry,
    rules::validate_document,
    traits::Visitor,
    visitor::visit,
};

#[cfg(test)]
pub(crate) use self::test_harness::{expect_fails_rule, expect_passes_rule};
