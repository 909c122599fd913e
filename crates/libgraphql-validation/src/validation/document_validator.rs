use crate::document::Document;
use crate::schema::Schema;
use crate::validation::RuleKind;
use crate::validation::ValidationContext;
use crate::validation::ValidationContextPool;
use crate::validation::ValidationResult;
use crate::validation::ValidationRule;
use crate::validation::ValidatorConfig;

/// Runs an ordered list of [`ValidationRule`]s against documents.
///
/// A `DocumentValidator` is `Send + Sync` and is meant to be constructed once
/// and shared: each call to [`validate`](Self::validate) leases its own
/// context state from an internal pool.
#[derive(Debug)]
pub struct DocumentValidator {
    pool: ValidationContextPool,
    rules: Vec<Box<dyn ValidationRule>>,
}
impl DocumentValidator {
    pub fn builder() -> DocumentValidatorBuilder {
        DocumentValidatorBuilder::new()
    }

    pub fn from_config(config: &ValidatorConfig) -> Self {
        Self::new(
            ValidationContextPool::new(config.pool_capacity),
            config.rules.iter().map(RuleKind::instantiate).collect(),
        )
    }

    pub fn new(
        pool: ValidationContextPool,
        rules: Vec<Box<dyn ValidationRule>>,
    ) -> Self {
        Self { pool, rules }
    }

    pub fn pool(&self) -> &ValidationContextPool {
        &self.pool
    }

    pub fn rules(&self) -> impl Iterator<Item = RuleKind> + '_ {
        self.rules.iter().map(|rule| rule.kind())
    }

    /// Validate `document` against `schema`, running every rule in full and
    /// collecting every error they report.
    pub fn validate(&self, schema: &Schema, document: &Document) -> ValidationResult {
        let span = tracing::debug_span!(
            "validate_document",
            file = ?document.file_path(),
            rule_count = self.rules.len(),
        );
        let _enter = span.enter();

        let mut state = self.pool.lease();
        let mut ctx = ValidationContext::new(schema, document, &mut state);

        for rule in &self.rules {
            let errors_before = ctx.errors().len();
            ctx.clear_scratch();
            rule.validate(&mut ctx, document);
            tracing::trace!(
                rule = %rule.kind(),
                new_errors = ctx.errors().len() - errors_before,
                "ran validation rule",
            );
        }

        let errors = ctx.take_errors();
        tracing::debug!(error_count = errors.len(), "document validated");
        ValidationResult::new(errors)
    }
}
impl Default for DocumentValidator {
    fn default() -> Self {
        Self::from_config(&ValidatorConfig::default())
    }
}

/// Utility for assembling a [`DocumentValidator`] one rule at a time.
#[derive(Debug)]
pub struct DocumentValidatorBuilder {
    pool_capacity: usize,
    rules: Vec<Box<dyn ValidationRule>>,
}
impl DocumentValidatorBuilder {
    pub fn build(self) -> DocumentValidator {
        DocumentValidator::new(
            ValidationContextPool::new(self.pool_capacity),
            self.rules,
        )
    }

    /// Append the built-in rules in their default order.
    pub fn default_rules(self) -> Self {
        self.rules(RuleKind::DEFAULT_ORDER.iter().map(RuleKind::instantiate))
    }

    pub fn new() -> Self {
        Self {
            pool_capacity: ValidatorConfig::DEFAULT_POOL_CAPACITY,
            rules: vec![],
        }
    }

    pub fn pool_capacity(mut self, capacity: usize) -> Self {
        self.pool_capacity = capacity;
        self
    }

    pub fn rule(mut self, rule: impl ValidationRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn rules(
        mut self,
        rules: impl IntoIterator<Item = Box<dyn ValidationRule>>,
    ) -> Self {
        self.rules.extend(rules);
        self
    }
}
impl Default for DocumentValidatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
