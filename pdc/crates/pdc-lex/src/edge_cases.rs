//! Edge case tests for pdc-lex
