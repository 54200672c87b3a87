//! Error type tests.

mod source_error_tests;
