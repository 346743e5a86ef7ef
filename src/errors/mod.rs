//! Error types and error handling for the front end.
//!
//! This module defines the error types shared by every stage:
//!
//! - Error structures with source position information
//! - Lexical, syntactic and semantic error variants
//! - Symbol table failures
//! - Error names and suggestions used when rendering diagnostics

pub mod errors;
