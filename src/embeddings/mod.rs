// Text embeddings: TF-IDF vectors, cosine similarity, and theme models.

pub mod cosine;
pub mod index;
pub mod stop_list;
pub mod tfidf;
pub mod theme;
pub mod traits;
