use socialite_core::TokenGenerator;
use uuid::Uuid;

/// Random v4 UUIDs in their 32-character hex form.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidTokenGenerator;

impl UuidTokenGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl TokenGenerator for UuidTokenGenerator {
    fn hex_token(&self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}
