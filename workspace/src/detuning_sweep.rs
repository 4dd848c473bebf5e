#![allow(dead_code, non_snake_case, non_upper_case_globals)]

use std::path::PathBuf;
use itertools::Itertools;
use ndarray as nd;
use rayon::prelude::*;
use driven_spin::{
    mkdir,
    write_npz,
    bloch::SpinDrive,
};

const NT: usize = 2000;
const T_TOTAL: f64 = 300.0;

/// Depth of the `Sz` oscillation, `1 - min(Sz)`; approaches `2 chi1^2 / W^2`
/// for grids long enough to resolve the Rabi period.
fn flip_contrast(chi1: f64, chi2: f64, tau: &nd::Array1<f64>) -> f64 {
    let ev = SpinDrive::new(chi1, chi2).gen(tau);
    1.0 - ev.Sz.iter().copied().fold(f64::INFINITY, f64::min)
}

fn main() -> anyhow::Result<()> {
    let outdir = PathBuf::from("output/detuning_sweep");
    mkdir!(outdir);

    let tau: nd::Array1<f64> = nd::Array1::linspace(0.0, T_TOTAL, NT);
    let chi1: nd::Array1<f64> = nd::Array1::linspace(0.02, 0.5, 25);
    let chi2: nd::Array1<f64> = nd::Array1::linspace(0.0, 2.0, 201);

    // every grid point is an independent evaluation
    let grid: Vec<(f64, f64)>
        = chi1.iter().copied()
        .cartesian_product(chi2.iter().copied())
        .collect();
    let contrast: Vec<f64>
        = grid.par_iter()
        .map(|&(x1, x2)| flip_contrast(x1, x2, &tau))
        .collect();
    let contrast: nd::Array2<f64>
        = nd::Array2::from_shape_vec((chi1.len(), chi2.len()), contrast)?;

    write_npz!(
        outdir.join("contrast.npz"),
        arrays: {
            "chi1" => &chi1,
            "chi2" => &chi2,
            "contrast" => &contrast,
        }
    );

    println!("done");
    Ok(())
}
