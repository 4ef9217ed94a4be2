// Text normalization and catalog-driven skill extraction from job descriptions.
// No network or LLM calls: everything here is a pure function over the catalog.

pub mod extractor;
pub mod handlers;
pub mod normalizer;
pub mod requirements;
