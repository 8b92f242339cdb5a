//! Unit tests for the message module.
//!
//! Tests are organised by concept, covering happy paths, error cases, and
//! edge cases for the public APIs.

mod domain_tests;
