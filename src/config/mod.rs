//! Configuration module for SiteSearch-RS
//!
//! Handles loading settings from YAML files and environment variables.
//! Index aliases, template prefixes, and the requested field list are
//! all configuration so deployments can be redirected without code
//! changes.

mod settings;

pub use settings::*;
