mod context_pool;
mod document_validator;
mod rule;
pub mod rules;
pub(crate) mod traversal;
mod validation_context;
mod validation_error;
mod validation_result;
mod validator_config;

pub use context_pool::ContextState;
pub use context_pool::PooledContextState;
pub use context_pool::ValidationContextPool;
pub use context_pool::VisitState;
pub use document_validator::DocumentValidator;
pub use document_validator::DocumentValidatorBuilder;
pub use rule::ValidationRule;
pub use validation_context::ValidationContext;
pub use validation_error::ErrorCategory;
pub use validation_error::ValidationError;
pub use validation_result::ValidationResult;
pub use validator_config::RuleKind;
pub use validator_config::ValidatorConfig;

#[cfg(test)]
mod tests;
