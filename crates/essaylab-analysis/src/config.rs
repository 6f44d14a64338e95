/// How much diagnostic output the reporting functions produce.
///
/// Only [`correlation_test`](crate::correlation::correlation_test) is gated by
/// this setting; feature reports are always written.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Verbosity {
    #[default]
    Quiet,
    Verbose,
}

impl From<bool> for Verbosity {
    fn from(verbose: bool) -> Self {
        if verbose {
            Self::Verbose
        } else {
            Self::Quiet
        }
    }
}
