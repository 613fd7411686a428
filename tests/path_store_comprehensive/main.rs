//! PathStore Comprehensive Test Suite
//!
//! ## Test Tier Structure
//!
//! - **Tier 1: Semantic Invariants**
//!   Shadowing, auto-vivification, overwrite and aliasing guarantees.
//!
//! - **Tier 2: Property-Based**
//!   Random paths and values against the read/write contract.
//!
//! - **Tier 3: End-to-End**
//!   Decoding a fixture document and reading it through typed accessors.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test path_store_comprehensive
//!
//! # Only the property tests
//! cargo test --test path_store_comprehensive prop
//! ```

// Test utilities
mod test_utils;

// Tier 1: Semantic Invariants
mod path_semantics_invariants;

// Tier 2: Property-Based
mod property_tests;

// Tier 3: End-to-End
mod end_to_end_tests;
