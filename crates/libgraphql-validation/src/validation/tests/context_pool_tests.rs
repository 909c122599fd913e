use crate::document::Document;
use crate::validation::DocumentValidator;
use crate::validation::RuleKind;
use crate::validation::ValidationContext;
use crate::validation::ValidationContextPool;
use crate::validation::ValidationError;
use crate::validation::ValidationRule;
use crate::validation::tests::test_schema;
use std::panic::AssertUnwindSafe;

#[test]
fn pool_is_preallocated() {
    let pool = ValidationContextPool::new(3);

    assert_eq!(pool.capacity(), 3);
    assert_eq!(pool.idle_count(), 3);
}

#[test]
fn exhausted_pool_allocates_and_never_exceeds_capacity() {
    let pool = ValidationContextPool::new(2);

    let states = (0..5).map(|_| pool.acquire()).collect::<Vec<_>>();
    assert_eq!(pool.idle_count(), 0);

    for state in states {
        pool.release(state);
        assert!(pool.idle_count() <= 2);
    }
    assert_eq!(pool.idle_count(), 2);
}

#[test]
fn release_resets_state_and_bumps_generation() {
    let pool = ValidationContextPool::new(1);

    let mut state = pool.acquire();
    let generation = state.generation();
    state.errors.push(ValidationError::TypeSystemDefinitionNotExecutable {
        locations: vec![],
    });
    state.fragment_index.insert("F".to_string(), 0);
    state.names.insert("a".to_string());
    state.spread_path.push("F".to_string());
    state.visited_fragments.insert("F".to_string());
    pool.release(state);

    let reused = pool.acquire();
    assert!(reused.is_clean());
    assert!(reused.generation() > generation);
}

#[test]
fn lease_releases_on_drop() {
    let pool = ValidationContextPool::new(1);

    {
        let mut lease = pool.lease();
        assert_eq!(pool.idle_count(), 0);
        lease.names.insert("a".to_string());
    }

    assert_eq!(pool.idle_count(), 1);
    assert!(pool.acquire().is_clean());
}

#[derive(Debug)]
struct PanickingRule;
impl ValidationRule for PanickingRule {
    fn validate(&self, ctx: &mut ValidationContext<'_>, _document: &Document) {
        ctx.report(ValidationError::TypeSystemDefinitionNotExecutable {
            locations: vec![],
        });
        panic!("rule failure");
    }

    fn kind(&self) -> RuleKind {
        RuleKind::ExecutableDefinitions
    }
}

#[test]
fn context_is_released_when_a_rule_panics() {
    let validator = DocumentValidator::builder()
        .pool_capacity(1)
        .rule(PanickingRule)
        .build();
    let document = test_schema::document("{ dog { name } }");

    let outcome = std::panic::catch_unwind(AssertUnwindSafe(|| {
        validator.validate(test_schema::schema(), &document)
    }));

    assert!(outcome.is_err());
    assert_eq!(validator.pool().idle_count(), 1);
    assert!(validator.pool().acquire().is_clean());
}
