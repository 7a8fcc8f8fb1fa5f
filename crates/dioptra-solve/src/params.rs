//! Run parameters for the Diophantine searches.

use serde::{Deserialize, Serialize};

use crate::error::{SolveError, SolveResult};

/// Configuration for rayon-backed parallel maps.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallelConfig {
    /// Minimum number of independent work items before going parallel.
    /// Zero disables parallelism entirely.
    pub parallel_threshold: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 64,
        }
    }
}

impl ParallelConfig {
    /// Sequential execution regardless of input size.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel_threshold: 0,
        }
    }

    /// Returns true if `len` work items should be mapped in parallel.
    #[must_use]
    pub fn should_parallelize(&self, len: usize) -> bool {
        self.parallel_threshold > 0 && len >= self.parallel_threshold
    }
}

/// Parameters of one run: the modulus parameter `z`, the sweep bound on
/// `n`, the per-`n` solution cap and the recurrence depth.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveParams {
    /// Modulus parameter of the quadratic form and of `a^2 - 2b^2 = 2z + 1`.
    pub z: u64,
    /// Upper bound of the sweep `n = 1..=max_n`.
    pub max_n: u64,
    /// Maximum number of `(x, y)` pairs accepted for one `n`.
    pub max_solutions_per_n: usize,
    /// Number of recurrence columns to generate.
    pub iterations: usize,
    /// Optional cap on the Pell search, below the complete bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pell_search_limit: Option<u64>,
    /// Parallel execution settings.
    #[serde(default)]
    pub parallel: ParallelConfig,
}

impl Default for SolveParams {
    fn default() -> Self {
        Self {
            z: 3,
            max_n: 64,
            max_solutions_per_n: 8,
            iterations: 3,
            pell_search_limit: None,
            parallel: ParallelConfig::default(),
        }
    }
}

impl SolveParams {
    /// Creates a new parameter builder.
    #[must_use]
    pub fn builder() -> SolveParamsBuilder {
        SolveParamsBuilder::default()
    }

    /// Rejects parameters that must be positive but are zero.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::InvalidParameter`] naming the first offending field.
    pub fn validate(&self) -> SolveResult<()> {
        let positive = [
            ("z", self.z),
            ("max_n", self.max_n),
            ("max_solutions_per_n", self.max_solutions_per_n as u64),
        ];
        for (name, value) in positive {
            if value == 0 {
                return Err(SolveError::InvalidParameter { name, value });
            }
        }
        if self.pell_search_limit == Some(0) {
            return Err(SolveError::InvalidParameter {
                name: "pell_search_limit",
                value: 0,
            });
        }
        Ok(())
    }
}

/// Builder for [`SolveParams`].
#[derive(Debug, Default)]
pub struct SolveParamsBuilder {
    params: SolveParams,
}

impl SolveParamsBuilder {
    /// Sets `z`.
    #[must_use]
    pub fn z(mut self, z: u64) -> Self {
        self.params.z = z;
        self
    }

    /// Sets the sweep bound on `n`.
    #[must_use]
    pub fn max_n(mut self, max_n: u64) -> Self {
        self.params.max_n = max_n;
        self
    }

    /// Sets the per-`n` solution cap.
    #[must_use]
    pub fn max_solutions_per_n(mut self, cap: usize) -> Self {
        self.params.max_solutions_per_n = cap;
        self
    }

    /// Sets the recurrence depth.
    #[must_use]
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.params.iterations = iterations;
        self
    }

    /// Caps the Pell search at `limit`.
    #[must_use]
    pub fn pell_search_limit(mut self, limit: Option<u64>) -> Self {
        self.params.pell_search_limit = limit;
        self
    }

    /// Sets the parallel execution settings.
    #[must_use]
    pub fn parallel(mut self, parallel: ParallelConfig) -> Self {
        self.params.parallel = parallel;
        self
    }

    /// Validates and returns the parameters.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::InvalidParameter`] if validation fails.
    pub fn build(self) -> SolveResult<SolveParams> {
        self.params.validate()?;
        Ok(self.params)
    }
}
