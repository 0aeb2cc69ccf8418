/// Events the batch workflow emits while it evaluates equations.
///
/// Equation numbers are 1-based positions among the evaluated lines, i.e. the line after
/// the count is equation 1. Per-equation events may arrive out of order because lines
/// are evaluated in parallel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    BatchStart {
        /// Number of equations that will be evaluated.
        total: u64,
    },
    EquationEvaluated {
        equation: usize,
        equivalent: bool,
    },
    /// A line without exactly one `->`; reported instead of `EquationEvaluated`.
    EquationMalformed { equation: usize, text: String },
    BatchFinish { evaluated: usize, equivalent: usize },
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

/// Forwards [`Progress`] events to an optional callback.
///
/// The callback may be invoked from several rayon worker threads at once, hence the
/// `Send + Sync` bound.
#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}
