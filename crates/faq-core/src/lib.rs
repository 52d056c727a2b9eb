//! # faq-core
//!
//! Core types and error types for faqdesk.
//!
//! This crate provides the foundational types shared across all faqdesk crates:
//! - Entity structs for the knowledge base (FAQ entries, vote counters, questions)
//! - Vote and sort enums
//! - Lenient wire normalization for the remote FAQ API
//! - Cross-cutting error types
//! - Response types rendered by the CLI
//! - Share-link construction

pub mod entities;
pub mod enums;
pub mod errors;
pub mod links;
pub mod responses;
pub mod wire;
