//! Data types shared by the matcher and the source manager

pub mod dataset;
pub mod source;

pub use dataset::Dataset;
pub use source::SourceDescriptor;
