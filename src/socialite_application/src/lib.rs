pub mod pipeline;
pub mod use_cases;

pub use pipeline::{PipelineError, PipelineOutcome, SocialAuthPipeline};
pub use use_cases::*;
