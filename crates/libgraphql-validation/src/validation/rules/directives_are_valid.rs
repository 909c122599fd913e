use crate::document::Document;
use crate::validation::RuleKind;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;
use crate::validation::ValidationRule;
use crate::validation::traversal;

/// Every directive used in the document must be defined by the schema,
/// used only in one of its declared locations, and (unless declared
/// `repeatable`) used at most once per location.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Validation.Directives)
#[derive(Clone, Copy, Debug, Default)]
pub struct DirectivesAreValidRule;
impl ValidationRule for DirectivesAreValidRule {
    fn validate(&self, ctx: &mut ValidationContext<'_>, document: &Document) {
        let schema = ctx.schema();
        traversal::for_each_directive_list(document, &mut |location, directives| {
            ctx.clear_names();
            for directive in directives {
                let position = document.position(directive.position);
                let Some(directive_def) = schema.lookup_directive(directive.name.as_str()) else {
                    ctx.report(ValidationError::DirectiveNotSupported {
                        directive_name: directive.name.to_string(),
                        locations: vec![position],
                    });
                    continue;
                };

                if !directive_def.is_valid_in(location) {
                    ctx.report(ValidationError::DirectiveNotValidInLocation {
                        directive_name: directive.name.to_string(),
                        location,
                        locations: vec![position.clone()],
                    });
                }

                if !directive_def.is_repeatable() && !ctx.insert_name(directive.name.as_str()) {
                    ctx.report(ValidationError::DirectiveNotUniqueInLocation {
                        directive_name: directive.name.to_string(),
                        locations: vec![position],
                    });
                }
            }
        });
    }

    fn kind(&self) -> RuleKind {
        RuleKind::DirectivesAreValid
    }
}
