//! Extractor trait and implementations.

pub mod coordinate;
pub mod identity;
pub mod simple;
pub mod trait_;

pub use coordinate::CoordinateExtractor;
pub use identity::IdentityExtractor;
pub use simple::{SimpleExtractor, SimpleFeature};
pub use trait_::FeatureExtractor;
