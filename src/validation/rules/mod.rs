mod known_directives;

use crate::{
    ast::Document,
    validation::{DirectiveRegistry, MultiVisitorNil, RuleError, ValidatorContext, visit},
};

pub(crate) fn visit_all_rules<'a>(ctx: &mut ValidatorContext<'a>, doc: &'a Document<'a>) {
    let mut mv = MultiVisitorNil.with(self::known_directives::factory());

    visit(&mut mv, ctx, doc)
}

/// Validates `document` against the directives known by `registry`.
///
/// Works on executable and type system documents alike. Errors are returned in
/// the order their nodes appear in `document`; an empty list means the
/// document is valid.
pub fn validate_document<'a>(
    registry: &'a DirectiveRegistry<'a>,
    document: &'a Document<'a>,
) -> Vec<RuleError> {
    __sdl_span_trace!("validate_document");

    let mut ctx = ValidatorContext::new(registry);
    visit_all_rules(&mut ctx, document);
    let errors = ctx.into_errors();

    __sdl_trace_debug!("document validated with {} errors", errors.len());

    errors
}
