use rand::{rngs::StdRng, Rng};

/// Source of uniform draws in `[0, 1)`.
///
/// The generator only ever consumes uniforms through this trait, so tests can
/// substitute a scripted stream and verify the Box-Muller/log-return formula
/// exactly while production code uses a seeded or entropy-backed [`StdRng`].
pub trait UniformSource {
    fn next_uniform(&mut self) -> f64;
}

impl UniformSource for StdRng {
    fn next_uniform(&mut self) -> f64 {
        self.gen()
    }
}

/// Standard-normal sample via the Box-Muller transform.
///
/// Raw draws in `[0, 1)` are mapped through `1 - r` so both uniforms lie in
/// `(0, 1]` and the logarithm stays in its domain.
pub fn standard_normal<S: UniformSource + ?Sized>(source: &mut S) -> f64 {
    let u1 = 1.0 - source.next_uniform();
    let u2 = 1.0 - source.next_uniform();
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}
