//! How unlikely a cluster of sessions is under a uniform spread.

/// Probability that at least `k` of `n` sessions land in a region covering a
/// `p` fraction of the day (or week) when sessions are spread uniformly.
pub fn uniform_tail(n: u32, k: u32, p: f64) -> f64 {
    if k == 0 || p >= 1.0 {
        return 1.0;
    }
    if k > n || p <= 0.0 {
        return 0.0;
    }
    let q = 1.0 - p;
    let ln_choose: f64 = (1..=k)
        .map(|i| (f64::from(n - k + i) / f64::from(i)).ln())
        .sum();
    let mut term = (ln_choose + f64::from(k) * p.ln() + f64::from(n - k) * q.ln()).exp();
    let mut tail = 0.0;
    for j in k..=n {
        tail += term;
        if f64::from(j) > f64::from(n) * p && term <= tail * f64::EPSILON {
            break;
        }
        term *= f64::from(n - j) / f64::from(j + 1) * p / q;
    }
    tail.min(1.0)
}

/// `uniform_tail` corrected for the `1/p` places such a region could sit.
pub fn cluster_p_value(n: u32, k: u32, p: f64) -> f64 {
    if p <= 0.0 {
        return 1.0;
    }
    (uniform_tail(n, k, p) / p).min(1.0)
}
