//! Shared plumbing for the insert benchmark workspace: logger setup and
//! environment-variable helpers used by the runner, the criterion benches and
//! the integration tests.

pub mod env;
pub mod logging;

pub use logging::initialize_logger;
