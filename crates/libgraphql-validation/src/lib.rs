//! Static validation of GraphQL executable documents.
//!
//! Given a [`Schema`](crate::schema::Schema) and a parsed
//! [`Document`](crate::document::Document), a
//! [`DocumentValidator`](crate::validation::DocumentValidator) runs an
//! ordered set of [`ValidationRule`](crate::validation::ValidationRule)s and
//! reports every violation it finds in a single pass:
//!
//! ```
//! use libgraphql_validation::document::DocumentBuilder;
//! use libgraphql_validation::schema::SchemaBuilder;
//! use libgraphql_validation::validation::DocumentValidator;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let schema = SchemaBuilder::from_str(None, "type Query { hello: String }")?
//!     .build()?;
//! let document = DocumentBuilder::from_str(None, "{ hello goodbye }")?
//!     .build();
//!
//! let result = DocumentValidator::default().validate(&schema, &document);
//! assert!(!result.is_valid());
//! assert_eq!(result.errors().len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod ast;
pub mod document;
pub mod file_reader;
pub mod loc;
pub mod schema;
pub mod types;
pub mod validation;
