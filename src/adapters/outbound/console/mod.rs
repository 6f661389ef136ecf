/// Console adapters for operator-facing terminal output
mod progress_reporter;

pub use progress_reporter::StderrProgressReporter;
