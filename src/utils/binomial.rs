/// Number of ways to pick `k` items out of `n`; zero when `k > n`.
pub fn binomial(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }

    let k = k.min(n - k);
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}
