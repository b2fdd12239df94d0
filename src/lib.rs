// ArtStory: artwork similarity scoring and recommendations
//
// This is the library root. Each module corresponds to a major subsystem
// of the recommender.

pub mod config;
pub mod corpus;
pub mod embeddings;
pub mod output;
pub mod recommend;
pub mod scoring;
pub mod status;
