//! Batch evaluation of drive scenarios over a shared time grid.
//!
//! A [`Case`] fixes the drive-frequency ratio `chi2` for one scenario; the
//! coupling strength `chi1` is shared by all cases in a batch. [`run`] builds
//! the time grid, evaluates every case on it, and packages each output with
//! its input parameters and display metadata for downstream plotting.

use ndarray as nd;
use thiserror::Error;
use crate::bloch::{ BlochEvolution, SpinDrive };

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no cases to evaluate")]
    NoCases,

    #[error("need at least 2 time samples, got {0}")]
    TooFewSamples(usize),

    #[error("evolution time must be positive, got {0}")]
    NonPositiveTime(f64),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// A single drive scenario.
///
/// `label` and `color` are display metadata only; unset values receive
/// defaults when the case is evaluated (see [`CaseResult`]).
#[derive(Clone, Debug, PartialEq)]
pub struct Case {
    /// Ratio of the drive frequency to the transition frequency.
    pub chi2: f64,
    pub label: Option<String>,
    pub color: Option<String>,
}

impl Case {
    /// Create a new case with unset display metadata.
    pub fn new(chi2: f64) -> Self {
        Self { chi2, label: None, color: None }
    }

    /// Set the display label.
    pub fn with_label<S>(mut self, label: S) -> Self
    where S: Into<String>
    {
        self.label = Some(label.into());
        self
    }

    /// Set the display color token.
    pub fn with_color<S>(mut self, color: S) -> Self
    where S: Into<String>
    {
        self.color = Some(color.into());
        self
    }
}

impl From<f64> for Case {
    fn from(chi2: f64) -> Self { Self::new(chi2) }
}

/// Evaluated lab-frame components for one case, index-aligned with the time
/// grid returned alongside it.
///
/// Create-once, read-many: nothing mutates a result after [`run`] returns it.
#[derive(Clone, Debug, PartialEq)]
pub struct CaseResult {
    /// Echo of the input `chi2`.
    pub chi2: f64,
    pub Sx: nd::Array1<f64>,
    pub Sy: nd::Array1<f64>,
    pub Sz: nd::Array1<f64>,
    pub mag: nd::Array1<f64>,
    /// Input label, or `"chi2 = {chi2}"` if unset.
    pub label: String,
    /// Input color; `None` means the renderer picks.
    pub color: Option<String>,
}

/// Evaluate `cases` over `n_samples` evenly spaced times covering `[0, T]`,
/// endpoints included.
///
/// Results are returned in input case order; downstream color and legend
/// assignment relies on this. Either all cases evaluate or the whole call
/// fails; no partial output is produced.
pub fn run(chi1: f64, cases: &[Case], n_samples: usize, T: f64)
    -> ConfigResult<(nd::Array1<f64>, Vec<CaseResult>)>
{
    if cases.is_empty() { return Err(ConfigError::NoCases); }
    if n_samples < 2 { return Err(ConfigError::TooFewSamples(n_samples)); }
    if T <= 0.0 { return Err(ConfigError::NonPositiveTime(T)); }
    let tau: nd::Array1<f64> = nd::Array1::linspace(0.0, T, n_samples);
    let results: Vec<CaseResult>
        = cases.iter()
        .map(|case| {
            let BlochEvolution { Sx, Sy, Sz, mag }
                = SpinDrive::new(chi1, case.chi2).gen(&tau);
            CaseResult {
                chi2: case.chi2,
                Sx, Sy, Sz, mag,
                label: case.label.clone()
                    .unwrap_or_else(|| format!("chi2 = {:.1}", case.chi2)),
                color: case.color.clone(),
            }
        })
        .collect();
    Ok((tau, results))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn order_preserved() {
        let cases: Vec<Case>
            = [1.0, 0.6, 1.4].into_iter().map(Case::from).collect();
        let (_, results) = run(0.1, &cases, 400, 60.0).unwrap();
        assert_eq!(results.len(), cases.len());
        for (case, res) in cases.iter().zip(results.iter()) {
            assert_eq!(res.chi2, case.chi2);
        }
    }

    #[test]
    fn outputs_aligned_with_grid() {
        let cases = vec![Case::new(1.0), Case::new(0.6)];
        let (tau, results) = run(0.1, &cases, 250, 30.0).unwrap();
        assert_eq!(tau.len(), 250);
        for res in results.iter() {
            assert_eq!(res.Sx.len(), tau.len());
            assert_eq!(res.Sy.len(), tau.len());
            assert_eq!(res.Sz.len(), tau.len());
            assert_eq!(res.mag.len(), tau.len());
        }
    }

    #[test]
    fn grid_covers_endpoints() {
        let (tau, _) = run(0.1, &[Case::new(1.0)], 400, 60.0).unwrap();
        assert_eq!(tau[0], 0.0);
        assert_eq!(tau[tau.len() - 1], 60.0);
    }

    #[test]
    fn display_defaults() {
        let cases = vec![
            Case::new(0.6),
            Case::new(1.0).with_label("resonant").with_color("C0"),
        ];
        let (_, results) = run(0.1, &cases, 10, 1.0).unwrap();
        assert_eq!(results[0].label, "chi2 = 0.6");
        assert_eq!(results[0].color, None);
        assert_eq!(results[1].label, "resonant");
        assert_eq!(results[1].color.as_deref(), Some("C0"));
    }

    #[test]
    fn empty_cases_rejected() {
        let res = run(0.1, &[], 400, 60.0);
        assert!(matches!(res, Err(ConfigError::NoCases)));
    }

    #[test]
    fn single_sample_rejected() {
        let res = run(0.1, &[Case::new(1.0)], 1, 60.0);
        assert!(matches!(res, Err(ConfigError::TooFewSamples(1))));
    }

    #[test]
    fn nonpositive_time_rejected() {
        let res = run(0.1, &[Case::new(1.0)], 400, 0.0);
        assert!(matches!(res, Err(ConfigError::NonPositiveTime(_))));
    }
}
