//! Read-only relationship queries and graded similarity over bound
//! documents.

pub mod lookup;
pub mod similarity;

// Re-export commonly used types
pub use lookup::RelationshipLookup;
pub use similarity::similarity;
