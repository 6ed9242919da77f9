pub mod username_normalizer;

pub use username_normalizer::{UsernameNormalizer, slugify};
