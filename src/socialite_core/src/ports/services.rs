/// Source of random tokens used to seed and disambiguate usernames.
pub trait TokenGenerator: Send + Sync {
    /// A fresh 128-bit token rendered as 32 lowercase hex characters.
    fn hex_token(&self) -> String;
}

/// Pure transform applied to every username candidate.
pub trait HandleNormalizer: Send + Sync {
    fn normalize(&self, raw: &str) -> String;
}
