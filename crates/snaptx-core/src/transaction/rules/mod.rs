//! Rule-based field extractors for transaction text.
//!
//! Each extractor is an ordered list of precompiled patterns evaluated in
//! fixed priority order. The extractors are mutually independent and pure:
//! none holds mutable state, none fails — a field that cannot be recovered
//! is simply absent.

pub mod amounts;
pub mod dates;
pub mod description;
pub mod patterns;
pub mod references;

pub use amounts::AmountExtractor;
pub use dates::DateExtractor;
pub use description::DescriptionExtractor;
pub use references::ReferenceExtractor;

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the highest-priority field value from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all acceptable candidates, in priority order.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}
