use crate::document::Definition;
use crate::document::Document;
use crate::validation::RuleKind;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;
use crate::validation::ValidationRule;

/// Only operations and fragments may appear in a document submitted for
/// execution.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Executable-Definitions)
#[derive(Clone, Copy, Debug, Default)]
pub struct ExecutableDefinitionsRule;
impl ValidationRule for ExecutableDefinitionsRule {
    fn validate(&self, ctx: &mut ValidationContext<'_>, document: &Document) {
        for def in document.definitions() {
            if let Definition::TypeSystem(_) = def {
                ctx.report(ValidationError::TypeSystemDefinitionNotExecutable {
                    locations: vec![document.position(def.position())],
                });
            }
        }
    }

    fn kind(&self) -> RuleKind {
        RuleKind::ExecutableDefinitions
    }
}
