use log::debug;

/// Divisors `f` of `n` with `1 < f < n`, ascending. Empty for `n < 4`.
pub fn proper_divisors(n: i64) -> Vec<i64> {
    if n < 4 {
        return Vec::new();
    }

    let mut small = Vec::new();
    let mut large = Vec::new();

    let mut i: i64 = 2;
    while i.saturating_mul(i) <= n {
        if n % i == 0 {
            small.push(i);
            let pair = n / i;
            if pair != i {
                large.push(pair);
            }
        }
        i += 1;
    }

    small.extend(large.into_iter().rev());
    debug!("{} has {} proper divisors", n, small.len());
    small
}

/// Offsets `0, +1, -1, +2, -2, ...` up to `radius` in magnitude
pub fn neighbor_offsets(radius: i64) -> Vec<i64> {
    let radius = radius.max(0);
    let mut offsets = vec![0];
    for step in 1..=radius {
        offsets.push(step);
        offsets.push(-step);
    }
    offsets
}
