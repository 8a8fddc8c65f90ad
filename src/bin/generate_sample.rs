//! Writes sample LAMMPS-style output files (log / MSD / RDF) for trying the
//! dashboard without a real simulation run.

use std::fmt::Write as _;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// 37 lines of setup boilerplate, as a LAMMPS run prints before the
/// thermo table.
fn log_preamble(out: &mut String) {
    out.push_str("LAMMPS (2 Aug 2023)\n");
    out.push_str("Reading data file ...\n");
    out.push_str("  orthogonal box = (0 0 0) to (24.8 24.8 24.8)\n");
    out.push_str("  1536 atoms\n");
    out.push_str("  512 molecules\n");
    for i in 5..36 {
        let _ = writeln!(out, "  setup step {i} ...");
    }
    out.push_str("Per MPI rank memory allocation ...\n");
}

/// 48 lines of timing/statistics boilerplate after the thermo table.
fn log_footer(out: &mut String) {
    out.push_str("Loop time of 812.4 on 8 procs for 500000 steps\n");
    for i in 1..47 {
        let _ = writeln!(out, "  timing breakdown {i} ...");
    }
    out.push_str("Total wall time: 0:13:32\n");
}

fn sample_log(rng: &mut SimpleRng, rows: usize) -> String {
    let mut out = String::new();
    log_preamble(&mut out);
    out.push_str("Step Time Temp Density KinEng PotEng TotEng Volume\n");

    for i in 0..rows {
        let step = i * 100;
        let time = step as f64;
        let temp = rng.gauss(300.0, 2.5);
        let density = rng.gauss(0.997, 0.002);
        let kin = rng.gauss(457.0, 4.0);
        let pot = rng.gauss(-5120.0, 6.0);
        let tot = kin + pot;
        let vol = rng.gauss(15290.0, 35.0);
        let _ = writeln!(
            out,
            "{step} {time:.1} {temp:.4} {density:.6} {kin:.4} {pot:.4} {tot:.4} {vol:.2}"
        );
    }

    log_footer(&mut out);
    out
}

fn sample_msd(rng: &mut SimpleRng, rows: usize) -> String {
    let mut out = String::from("# Time-averaged data for fix msd\n");
    out.push_str("# TimeStep c_msd[1] c_msd[2] c_msd[3] c_msd[4]\n");

    // Water-like diffusion: D ≈ 2.3e-9 m²/s = 2.3e-4 Å²/fs, MSD = 6·D·t.
    let slope = 6.0 * 2.3e-4;
    for i in 0..rows {
        let step = i as f64 * 1000.0;
        let r2 = (slope * step * rng.gauss(1.0, 0.02)).max(0.0);
        let x2 = r2 / 3.0 * rng.gauss(1.0, 0.05);
        let y2 = r2 / 3.0 * rng.gauss(1.0, 0.05);
        let z2 = (r2 - x2 - y2).max(0.0);
        let _ = writeln!(out, "{step:.0} {x2:.6} {y2:.6} {z2:.6} {r2:.6}");
    }
    out
}

fn sample_rdf(rng: &mut SimpleRng, bins: usize) -> String {
    let mut out = String::from("# Time-averaged data for fix rdf\n");
    out.push_str("# Row c_rdf[1] c_rdf[2] ...\n");
    out.push_str("# 4 pairs: H-H H-O O-H O-O\n");
    let _ = writeln!(out, "500000 {bins}");

    // Gaussian first peak per pair: (position Å, width, height).
    let peaks = [(2.4, 0.35, 1.3), (1.85, 0.25, 1.6), (1.85, 0.25, 1.6), (2.8, 0.3, 3.0)];
    let dr = 0.05;
    let mut cn = [0.0f64; 4];

    for i in 1..=bins {
        let r = (i as f64 - 0.5) * dr;
        let _ = write!(out, "{i} {r:.4}");
        for (pair, &(mu, sigma, height)) in peaks.iter().enumerate() {
            let g = (height * (-(r - mu).powi(2) / (2.0 * sigma * sigma)).exp()
                + if r > mu { 1.0 } else { 0.0 })
                * rng.gauss(1.0, 0.01).abs();
            cn[pair] += g * r * r * dr * 0.33;
            let _ = write!(out, " {g:.5} {:.5}", cn[pair]);
        }
        out.push('\n');
    }
    out
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let files = [
        ("sample.log", sample_log(&mut rng, 500)),
        ("sample_msd.txt", sample_msd(&mut rng, 200)),
        ("sample_rdf.txt", sample_rdf(&mut rng, 100)),
    ];

    for (name, text) in files {
        std::fs::write(name, &text).expect("Failed to write sample file");
        println!("Wrote {} ({} lines)", name, text.lines().count());
    }
}
