use crate::validation::ValidationError;

/// Outcome of validating one document: valid iff no errors were reported.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
}
impl ValidationResult {
    pub(crate) fn new(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }

    /// Every error reported, in rule registration order (and, within a rule,
    /// in the order the rule encountered them).
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }

    pub fn into_result(self) -> Result<(), Vec<ValidationError>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}
