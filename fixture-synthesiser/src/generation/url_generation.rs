use super::*;

/// The letters a generated TLD is made of.
pub const TLD_ALPHABET: &[u8] = b"comiudepkqa";

fn random_lowercase<T: Rng>(len: usize, rng: &mut T) -> String {
    (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
}

fn random_tld<T: Rng>(rng: &mut T) -> String {
    let len = rng.gen_range(2..=3);
    (0..len)
        .map(|_| TLD_ALPHABET[rng.gen_range(0..TLD_ALPHABET.len())] as char)
        .collect()
}

/// Produces a URL of the form `www.<domain>.<tld>` or `www.<domain>.<bld>.<tld>`.
///
/// The domain has between 2 and 10 lowercase letters and the optional second level part between 0 and 3,
/// where 0 means it is left out. The TLD has 2 or 3 letters taken from [`TLD_ALPHABET`].
pub fn generate_url<T: Rng>(rng: &mut T) -> String {
    let domain_len = rng.gen_range(2..=10);
    let domain = random_lowercase(domain_len, rng);
    let bld_len = rng.gen_range(0..=3);
    let bld = random_lowercase(bld_len, rng);
    let tld = random_tld(rng);
    if bld.is_empty() {
        format!("www.{}.{}", domain, tld)
    } else {
        format!("www.{}.{}.{}", domain, bld, tld)
    }
}
