mod directive_location_tests;
mod directive_tests;
mod type_annotation_tests;
