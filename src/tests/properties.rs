use super::*;

const NS: &[usize] = &[0, 1, 2, 3, 4, 5, 6, 7, 10, 15, 20, 30, 50, 80];
const ES: &[f32] = &[0.0, 0.05, 0.1, 0.2, 0.5, 1.0];

#[test]
fn random_distances() {
    for seed in 0..4 {
        for (a, b) in gen_pairs(NS, ES, seed) {
            test_distance(&a, &b);
        }
    }
}

#[test]
fn random_scores() {
    for seed in 0..4 {
        for (a, b) in gen_pairs(NS, ES, seed) {
            test_score(&a, &b);
        }
    }
}

#[test]
fn identity_and_empty() {
    for (a, _) in gen_pairs(NS, &[0.0], 31415) {
        assert_eq!(edit_distance(&a, &a), 0);
        assert_eq!(edit_distance(&a, b""), a.len());
        assert_eq!(edit_distance(b"", &a), a.len());
        assert_eq!(match_score2(&a, &a), a.len());
        assert_eq!(match_score(&a, &a), a.len());
        assert_eq!(match_score2(&a, b""), 0);
    }
}

#[test]
fn symmetry() {
    for (a, b) in gen_pairs(NS, ES, 2718) {
        assert_eq!(edit_distance(&a, &b), edit_distance(&b, &a));
        assert_eq!(match_score2(&a, &b), match_score2(&b, &a));
        assert_eq!(match_score(&a, &b), match_score(&b, &a));
    }
}

#[test]
fn triangle_inequality() {
    let rng = &mut ChaCha8Rng::seed_from_u64(1618);
    for _ in 0..200 {
        let n = rng.gen_range(0..25);
        let a = random_sequence(n, ALPHABET, rng);
        let b = random_mutate(&a, rng.gen_range(0..8), ALPHABET, rng);
        let c = random_mutate(&b, rng.gen_range(0..8), ALPHABET, rng);
        let ab = edit_distance(&a, &b);
        let bc = edit_distance(&b, &c);
        let ac = edit_distance(&a, &c);
        assert!(ac <= ab + bc, "{ac} > {ab} + {bc}");
    }
}

/// Matched symbols of an optimal alignment form a common subsequence, and
/// deleting everything else is one way to align.
#[test]
fn distance_and_lcs_bounds() {
    for (a, b) in gen_pairs(NS, ES, 4669) {
        let d = edit_distance(&a, &b);
        let lcs = match_score2(&a, &b);
        assert!(d + lcs >= max(a.len(), b.len()));
        assert!(d <= a.len() + b.len() - 2 * lcs);
    }
}

#[test]
fn matcher_bounds() {
    for (a, b) in gen_pairs(NS, ES, 1414) {
        let prefix = match_prefix(&a, &b);
        let till_end = match_till_end(&a, &b);
        let lcs = match_score2(&a, &b);
        assert!(prefix <= till_end);
        assert!(till_end <= lcs);
        assert!(lcs <= min(a.len(), b.len()));
    }
}

/// The memoizer caches each suffix pair once, so repeated queries through a
/// shared memoizer only hit the cache.
#[test]
fn shared_memoizer_reuses_states() {
    let (a, b) = (b"ACGTACGTTA".as_slice(), b"CGTTACGAAT".as_slice());
    let ed = Memoized::recursive(|ed: &dyn Fn((usize, usize)) -> Cost, (i, j): (usize, usize)| {
        if i == a.len() {
            return b.len() - j;
        }
        if j == b.len() {
            return a.len() - i;
        }
        let cost = (a[i] != b[j]) as Cost;
        min(ed((i + 1, j + 1)) + cost, min(ed((i, j + 1)), ed((i + 1, j))) + 1)
    });
    let d = ed.call((0, 0));
    assert_eq!(d, edit_distance(a, b));
    let misses = ed.stats().misses;
    assert_eq!(misses, (a.len() + 1) * (b.len() + 1));

    // Every suffix pair is now cached.
    for i in 0..=a.len() {
        for j in 0..=b.len() {
            assert_eq!(ed.call((i, j)), edit_distance(&a[i..], &b[j..]));
        }
    }
    assert_eq!(ed.stats().misses, misses);
}
