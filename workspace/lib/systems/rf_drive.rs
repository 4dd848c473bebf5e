//! Standard resonant-vs-detuned comparison of a rotating RF drive.

use driven_spin::cases::Case;

pub const CHI1: f64 = 0.1;
// pub const CHI1: f64 = 0.25;
// pub const CHI1: f64 = 0.5;

/// Total evolution time, in units of the inverse transition frequency.
pub const T_TOTAL: f64 = 60.0;

/// Number of time samples.
pub const NT: usize = 400;

/// Resonant drive plus one detuned comparison case.
pub fn standard_cases() -> Vec<Case> {
    vec![
        Case::new(1.0).with_label("resonant").with_color("C0"),
        Case::new(0.6).with_label("detuned").with_color("C1"),
    ]
}
