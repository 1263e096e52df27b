//! Feature extraction for linear Q-function approximation.
//!
//! An extractor maps a `(state, action)` pair to a sparse
//! [`FeatureVector`]. The reflex [`SimpleExtractor`] is the one meant for
//! real play; [`IdentityExtractor`] and [`CoordinateExtractor`] are the
//! tabular and grid-world baselines.

pub mod config;
pub mod error;
pub mod extractor;
pub mod search;
pub mod vector;

pub use config::ExtractorConfig;
pub use error::FeatureError;
pub use extractor::{
    CoordinateExtractor, FeatureExtractor, IdentityExtractor, SimpleExtractor, SimpleFeature,
};
pub use search::closest_food;
pub use vector::FeatureVector;
