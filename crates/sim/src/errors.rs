use std::error;
use std::fmt;

/// Error returned when attempting to convert an invalid byte/character into
/// a `Nucleotide`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidNucleotide(pub u8);

impl fmt::Display for InvalidNucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid nucleotide byte: {} ('{}')", self.0, self.0 as char)
    }
}

impl error::Error for InvalidNucleotide {}

/// Error type for failures when parsing or constructing a `Sequence`.
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidSequence {
    /// A character was not recognized as a valid nucleotide.
    InvalidChar(char),
}

impl fmt::Display for InvalidSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidChar(c) => write!(f, "Invalid character in sequence: '{c}'"),
        }
    }
}

impl error::Error for InvalidSequence {}

/// Error returned when an index is outside the valid range of a sequence or
/// matrix dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfBounds {
    /// The index that was requested
    pub index: usize,

    /// The upper bound that was violated
    pub len: usize,
}

impl fmt::Display for OutOfBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds (len = {})", self.index, self.len)
    }
}

impl error::Error for OutOfBounds {}

/// Errors that can occur when constructing a mutation model.
#[derive(Debug, Clone, PartialEq)]
pub enum MutationError {
    /// Invalid mutation rate (must be between 0.0 and 1.0)
    InvalidMutationRate(f64),
}

impl fmt::Display for MutationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MutationError::InvalidMutationRate(mu) => {
                write!(
                    f,
                    "Invalid mutation rate: {mu} (must be between 0.0 and 1.0)"
                )
            }
        }
    }
}

impl error::Error for MutationError {}

/// Errors that can occur in fitness scoring.
#[derive(Debug, Clone, PartialEq)]
pub enum FitnessError {
    /// Scored sequence and target have different lengths
    LengthMismatch { sequence: usize, target: usize },
    /// The target sequence was empty
    EmptyTarget,
}

impl fmt::Display for FitnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FitnessError::LengthMismatch { sequence, target } => {
                write!(
                    f,
                    "Sequence length mismatch: sequence has {sequence} bases, target has {target}"
                )
            }
            FitnessError::EmptyTarget => write!(f, "Empty target sequence not allowed"),
        }
    }
}

impl error::Error for FitnessError {}

/// Validation errors for simulation parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// Initial and target sequences have different lengths
    LengthMismatch { initial: usize, target: usize },
    /// The initial (and therefore target) sequence was empty
    EmptySequence,
    /// Mutation rate outside [0.0, 1.0]
    InvalidMutationRate(f64),
    /// Population size must be greater than zero
    ZeroPopulation,
    /// Generation count must be greater than zero
    ZeroGenerations,
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterError::LengthMismatch { initial, target } => {
                write!(
                    f,
                    "Initial/target length mismatch: {initial} vs {target} bases"
                )
            }
            ParameterError::EmptySequence => write!(f, "Sequences must not be empty"),
            ParameterError::InvalidMutationRate(mu) => {
                write!(
                    f,
                    "Invalid mutation rate: {mu} (must be between 0.0 and 1.0)"
                )
            }
            ParameterError::ZeroPopulation => {
                write!(f, "Population size must be greater than zero")
            }
            ParameterError::ZeroGenerations => {
                write!(f, "Generation count must be greater than zero")
            }
        }
    }
}

impl error::Error for ParameterError {}

/// Errors that can occur while constructing or running a simulation.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// Parameter validation failed
    Parameter(ParameterError),
    /// Fitness scoring failed
    Fitness(FitnessError),
    /// A matrix write landed outside the allocated dimensions
    Matrix(OutOfBounds),
    /// `step` was called after the configured generations were exhausted
    Finished { total_generations: usize },
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parameter(e) => write!(f, "Parameter error: {e}"),
            Self::Fitness(e) => write!(f, "Fitness error: {e}"),
            Self::Matrix(e) => write!(f, "Matrix error: {e}"),
            Self::Finished { total_generations } => {
                write!(
                    f,
                    "Simulation already ran its {total_generations} configured generations"
                )
            }
        }
    }
}

impl error::Error for SimulationError {}

impl From<ParameterError> for SimulationError {
    fn from(e: ParameterError) -> Self {
        Self::Parameter(e)
    }
}

impl From<FitnessError> for SimulationError {
    fn from(e: FitnessError) -> Self {
        Self::Fitness(e)
    }
}

impl From<OutOfBounds> for SimulationError {
    fn from(e: OutOfBounds) -> Self {
        Self::Matrix(e)
    }
}

/// Errors that can occur during simulation building.
#[derive(Debug)]
pub enum BuilderError {
    /// A required parameter is missing
    MissingRequired(&'static str),
    /// An invalid parameter value was provided
    InvalidParameter(SimulationError),
}

impl fmt::Display for BuilderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRequired(param) => {
                write!(f, "Missing required parameter: {param}")
            }
            Self::InvalidParameter(e) => {
                write!(f, "Invalid parameter: {e}")
            }
        }
    }
}

impl error::Error for BuilderError {}

impl From<SimulationError> for BuilderError {
    fn from(e: SimulationError) -> Self {
        Self::InvalidParameter(e)
    }
}
