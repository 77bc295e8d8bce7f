use std::fmt;

/// Failures that can end the analysis of a single timeframe.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// The market-data provider could not deliver a series (network, unknown symbol, ...).
    Provider(String),
    /// A series reached the indicator calculator in a shape it cannot use.
    Validation(String),
    /// The provider does not know how to request this interval code.
    UnsupportedInterval(String),
}

impl AnalysisError {
    /// Provider-side failures, as opposed to problems with the data itself.
    pub fn is_provider_error(&self) -> bool {
        matches!(
            self,
            AnalysisError::Provider(_) | AnalysisError::UnsupportedInterval(_)
        )
    }
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AnalysisError::Provider(msg) => write!(f, "Provider error: {}", msg),
            AnalysisError::Validation(msg) => write!(f, "Invalid price series: {}", msg),
            AnalysisError::UnsupportedInterval(code) => {
                write!(f, "Unsupported interval: {}", code)
            }
        }
    }
}

impl std::error::Error for AnalysisError {}
