/// Standard normal cumulative distribution at `a`, via the error function.
pub fn normal_probability(a: f64) -> f64 {
    0.5 * (1.0 + libm::erf(a / std::f64::consts::SQRT_2))
}
