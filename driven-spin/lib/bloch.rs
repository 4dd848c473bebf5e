//! Closed-form evolution of the Bloch vector of a driven spin-1/2.
//!
//! The system is a spin-1/2 in a static field plus a rotating RF drive. All
//! quantities here are dimensionless: time `tau` is measured in units of the
//! inverse transition frequency `1/w21`, the drive coupling strength `chi1`
//! and the drive frequency `chi2` in units of `w21` itself. In these units the
//! generalized Rabi frequency and the detuning are
//! ```text
//! W = sqrt(chi1^2 + ((chi2 - 1) / 2)^2)
//! D = chi2 - 1
//! ```
//! and, for a system starting in the reference state `(0, 0, 1)`, the
//! rotating-frame components evolve as
//! ```text
//! Sx_R = -(chi1/W) sin(2 W t) sin(D t) + (chi1 D/W^2) sin(W t)^2 cos(D t)
//! Sy_R = -(chi1/W) sin(2 W t) cos(D t) - (chi1 D/W^2) sin(W t)^2 sin(D t)
//! Sz_R = 1 - 2 (chi1/W)^2 sin(W t)^2
//! ```
//! The lab frame is recovered by an in-plane rotation of angle `tau` (the
//! rotation angle of the drive frame, equal to `tau` itself in these units).
//!
//! Every operation is elementwise over `tau`; there is no sequential
//! dependency between time samples.

use itertools::Itertools;
use ndarray as nd;
use num_complex::Complex64 as C64;

/// Dimensionless parameters of a rotating drive on a spin-1/2.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpinDrive {
    /// Drive coupling strength in units of the transition frequency.
    pub chi1: f64,
    /// Ratio of the drive frequency to the transition frequency; `chi2 = 1`
    /// is resonant.
    pub chi2: f64,
}

/// A single Bloch-vector sample.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bloch {
    pub Sx: f64,
    pub Sy: f64,
    pub Sz: f64,
}

impl Bloch {
    /// Euclidean norm of the vector; equal to 1 for a pure state.
    pub fn norm(self) -> f64 {
        (self.Sx.powi(2) + self.Sy.powi(2) + self.Sz.powi(2)).sqrt()
    }
}

/// Lab-frame component time series, index-aligned with the time grid they
/// were generated from.
#[derive(Clone, Debug, PartialEq)]
pub struct BlochEvolution {
    pub Sx: nd::Array1<f64>,
    pub Sy: nd::Array1<f64>,
    pub Sz: nd::Array1<f64>,
    /// Total vector magnitude; deviation from 1 signals an arithmetic bug
    /// upstream, not a property of the system.
    pub mag: nd::Array1<f64>,
}

impl SpinDrive {
    /// Create a new `SpinDrive`.
    pub fn new(chi1: f64, chi2: f64) -> Self { Self { chi1, chi2 } }

    /// Dimensionless detuning `D = chi2 - 1`.
    pub fn detuning(self) -> f64 { self.chi2 - 1.0 }

    /// Generalized Rabi frequency `W = sqrt(chi1^2 + (D/2)^2)`.
    pub fn rabi_freq(self) -> f64 {
        (self.chi1.powi(2) + (self.detuning() / 2.0).powi(2)).sqrt()
    }

    /// Return `true` if the drive leaves the spin motionless, i.e. zero
    /// coupling at exact resonance (`W = 0`).
    ///
    /// The closed form divides by `W`; this is its only singular point, and
    /// it corresponds physically to no precession at all, so it is
    /// special-cased to the static solution `(0, 0, 1)` rather than treated
    /// as an error.
    pub fn is_static(self) -> bool { self.chi1 == 0.0 && self.chi2 == 1.0 }

    // rotating-frame components at a single time
    fn gen_rotating_at(self, tau: f64) -> (f64, f64, f64) {
        if self.is_static() { return (0.0, 0.0, 1.0); }
        let W = self.rabi_freq();
        let D = self.detuning();
        let sin_W2 = (W * tau).sin().powi(2);
        let sin_2W = (2.0 * W * tau).sin();
        let Sx_R
            = -(self.chi1 / W) * sin_2W * (D * tau).sin()
            + (self.chi1 * D / W.powi(2)) * sin_W2 * (D * tau).cos();
        let Sy_R
            = -(self.chi1 / W) * sin_2W * (D * tau).cos()
            - (self.chi1 * D / W.powi(2)) * sin_W2 * (D * tau).sin();
        let Sz_R = 1.0 - 2.0 * (self.chi1 / W).powi(2) * sin_W2;
        (Sx_R, Sy_R, Sz_R)
    }

    /// Compute the lab-frame Bloch vector at a single time.
    pub fn gen_at(self, tau: f64) -> Bloch {
        let (Sx_R, Sy_R, Sz_R) = self.gen_rotating_at(tau);
        // the frame transformation is a phase rotation of the transverse
        // component
        let perp = C64::from_polar(1.0, tau) * C64::new(Sx_R, Sy_R);
        Bloch { Sx: perp.re, Sy: perp.im, Sz: Sz_R }
    }

    /// Compute the lab-frame Bloch vector and its magnitude over a whole time
    /// grid.
    ///
    /// The grid is sampled pointwise, so no ordering of `tau` is assumed.
    pub fn gen(&self, tau: &nd::Array1<f64>) -> BlochEvolution {
        let (Sx, Sy, Sz, mag): (Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>)
            = tau.iter()
            .map(|&t| {
                let b = self.gen_at(t);
                (b.Sx, b.Sy, b.Sz, b.norm())
            })
            .multiunzip();
        BlochEvolution {
            Sx: Sx.into(),
            Sy: Sy.into(),
            Sz: Sz.into(),
            mag: mag.into(),
        }
    }
}
