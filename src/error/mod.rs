use std::fmt::{Display, Debug, Formatter, Result};
use std::io;


/// Error set for potential passive property measurement errors
pub enum MeasureError {
    /// Trace has no samples to measure from
    EmptyTrace,
    /// Time and voltage sequences have different lengths
    MismatchedTraceLengths,
    /// Input resistance cannot be measured from a zero amplitude stimulus
    ZeroAmplitudeStimulus,
    /// No sample near the 63% decay voltage within the stimulus window
    DecayPointNotFound,
}

impl Display for MeasureError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let err_msg = match self {
            MeasureError::EmptyTrace => "Trace has no samples",
            MeasureError::MismatchedTraceLengths => "Time and voltage sequences must have the same length",
            MeasureError::ZeroAmplitudeStimulus => "Stimulus amplitude must be nonzero to measure input resistance",
            MeasureError::DecayPointNotFound => "No sample near the decay voltage within the stimulus window",
        };

        write!(f, "{}", err_msg)
    }
}

impl Debug for MeasureError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "file: {}, line: {}, error: {}", file!(), line!(), self)
    }
}

/// A set of errors that may occur when using the library
pub enum PassiveDendriteError {
    /// Errors related to measuring passive properties from a trace
    MeasureRelatedError(MeasureError),
    /// Errors related to the filesystem or figure numbering
    IoRelatedError(io::Error),
    /// Errors raised while rendering the voltage plot
    PlottingError(String),
}

impl Display for PassiveDendriteError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            PassiveDendriteError::MeasureRelatedError(err) => write!(f, "{}", err),
            PassiveDendriteError::IoRelatedError(err) => write!(f, "{}", err),
            PassiveDendriteError::PlottingError(err) => write!(f, "{}", err),
        }
    }
}

impl Debug for PassiveDendriteError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "file: {}, line: {}, error: {}", file!(), line!(), self)
    }
}

impl From<MeasureError> for PassiveDendriteError {
    fn from(err: MeasureError) -> PassiveDendriteError {
        PassiveDendriteError::MeasureRelatedError(err)
    }
}

impl From<io::Error> for PassiveDendriteError {
    fn from(err: io::Error) -> PassiveDendriteError {
        PassiveDendriteError::IoRelatedError(err)
    }
}
