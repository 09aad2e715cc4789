//! Edge case tests for swiftlex-lex
