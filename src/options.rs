//! Per-call configuration for the spatial filters.

/// Slack added before truncating, so accumulations that land a hair under an
/// integer (`99.99999` from a kernel summing to `0.9999999`) keep their value.
///
/// Applies to every filter that rounds through [`SampleRounding::to_u8`]:
/// blur, sharpen, Sobel magnitude and bilinear resize.
const TRUNCATE_SLACK: f32 = 1e-3;

/// How a floating-point accumulation is turned into an output byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SampleRounding {
    /// Drop the fractional part (C-style cast), after absorbing
    /// floating-point noise just below the next integer.
    #[default]
    Truncate,

    /// Round half away from zero before storing.
    Nearest,
}

impl SampleRounding {
    /// Convert an accumulated value to a byte, clamping to `[0, 255]`.
    #[inline]
    pub fn to_u8(self, v: f32) -> u8 {
        let v = match self {
            SampleRounding::Truncate => v + TRUNCATE_SLACK,
            SampleRounding::Nearest => v.round(),
        };
        // NaN saturates to 0 through the `as` cast
        v.clamp(0.0, 255.0) as u8
    }
}

/// Controls how a filter pass is scheduled.
///
/// Every pixel is accumulated in the same order under both strategies, so
/// the output is bit-identical; only wall-clock time differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// Run sequentially on the current thread.
    ///
    /// Useful for small images, or when the caller already parallelizes
    /// across images.
    Serial,

    /// Split the output rows across the global Rayon thread pool.
    #[default]
    ParallelRows,
}

/// Options shared by the spatial filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterOptions {
    pub rounding: SampleRounding,
    pub execution: ExecutionStrategy,
}

impl FilterOptions {
    /// Options that run on the calling thread.
    pub fn serial() -> Self {
        Self {
            execution: ExecutionStrategy::Serial,
            ..Self::default()
        }
    }

    pub fn with_rounding(mut self, rounding: SampleRounding) -> Self {
        self.rounding = rounding;
        self
    }

    pub fn with_execution(mut self, execution: ExecutionStrategy) -> Self {
        self.execution = execution;
        self
    }
}
