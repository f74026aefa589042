use super::progress::ProgressReporter;

/// Everything a generation task borrows for the duration of one pass.
#[derive(Clone, Copy)]
pub struct GenerationContext<'a, C> {
    pub config: &'a C,
    pub reporter: &'a ProgressReporter<'a>,
}

impl<'a, C> GenerationContext<'a, C> {
    pub fn new(config: &'a C, reporter: &'a ProgressReporter<'a>) -> Self {
        Self { config, reporter }
    }
}
