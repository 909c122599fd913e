mod all_variable_usages_are_allowed_tests;
mod all_variables_used_tests;
mod context_pool_tests;
mod test_schema;
