pub mod create_user;
pub mod resolve_username;
pub mod update_user_details;

// Re-export for convenience
pub use create_user::{CreateUserUseCase, CreatedUser};
pub use resolve_username::{
    MAX_COLLISION_RETRIES, ResolveUsernameError, ResolveUsernameUseCase, truncate_chars,
};
pub use update_user_details::{UpdateUserDetailsError, UpdateUserDetailsUseCase, merge_fields};
