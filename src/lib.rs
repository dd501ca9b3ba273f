//! SoapScribe - nursing dictation to SOAP-structured records
//!
//! This crate converts spoken or written nursing observations into
//! SOAP-structured (Subjective / Objective / Assessment / Plan) records,
//! using Google Gemini when configured and a rule-based formatter otherwise.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Core business logic, value objects, entities, and errors
//! - **Application**: Use cases and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (Gemini, config store, input)
//! - **CLI**: Command-line interface, argument parsing, and signal handling

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
