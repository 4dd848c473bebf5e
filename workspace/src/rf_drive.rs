#![allow(dead_code, non_snake_case, non_upper_case_globals)]

use std::path::PathBuf;
use ndarray as nd;
use driven_spin::{
    mkdir,
    write_npz,
    cases::run,
};
use lib::systems::rf_drive::{ CHI1, NT, T_TOTAL, standard_cases };

fn main() -> anyhow::Result<()> {
    let outdir = PathBuf::from("output/rf_drive");
    mkdir!(outdir);

    let cases = standard_cases();
    let (tau, results) = run(CHI1, &cases, NT, T_TOTAL)?;

    // one archive per case; plotting and the Bloch-sphere animation are
    // produced downstream from these
    for res in results.iter() {
        write_npz!(
            outdir.join(format!("{}.npz", res.label)),
            arrays: {
                "tau" => &tau,
                "chi2" => &nd::array![res.chi2],
                "Sx" => &res.Sx,
                "Sy" => &res.Sy,
                "Sz" => &res.Sz,
                "mag" => &res.mag,
            }
        );
        println!("wrote {} (chi2 = {})", res.label, res.chi2);
    }

    println!("done");
    Ok(())
}
