pub mod config;
pub mod errors;
pub mod pipeline;
pub mod session;

pub use config::{Args, Preset, RunConfig};
pub use errors::PipelineError;
pub use pipeline::{run, FitOutcome, FitReport};
pub use session::{finish, prompt, session, Session, EXIT_COMMAND};
