//! List of tricky edge cases on which all implementations are tested.
use super::*;

fn test_sequences() -> Vec<(&'static [u8], &'static [u8])> {
    vec![
        (b"", b""),
        (b"A", b""),
        (b"", b"ACGT"),
        (b"A", b"A"),
        (b"A", b"C"),
        (b"AC", b"CA"),
        (b"kitten", b"sitting"),
        (b"flaw", b"lawn"),
        (b"ABCBDAB", b"BDCAB"),
        (b"aaxxxxxxxxxxxxxxbbyycc", b"aasssbbtttttttttttttcc"),
        (b"aaxxxxxxxxxxxxxxbbyyycc", b"aayyybbtttttttttttttcc"),
        (b"TTGGGTCAATCAGCCAGTTTTTA", b"TTTGAGTGGGTCATCACCGATTTTAT"),
        (b"ACTGACCAGT", b"CCGACAGGA"),
        (b"AGTTTTAT", b"ACCGATTTTTA"),
        (b"CTCTCTTCTCTCTCTA", b"CCTCTCTCTCTCCTCTC"),
        (b"AGTGGGTTGCCTTCATTCCG", b"AGTGGTGTCTTCAGGCCTTCATTCCG"),
        (b"GCACGTCGCCCCCCGCCCGCG", b"GCCCGCCCGCCCGCCCCCGCCCCC"),
        (b"CGCGTGTATCCGTCCACATCGAGCCGCCCTTGTTGCTTTTCGAGCGCTCATTTCCCGCAAGAGTGGCGTGCGGTCACTTTCGCGCAGCAATTAGAGTACTAACGGGTAGACGTGGCTTTCCTCCTCGTCCTGTCAACGCGCATAGGATGTCCTGCAGCAGGCCGCCGCGATTGCCTAAATCAAGGGGTTCCAATGGAGTTTCCATCTGATATCCGCGCTCCGGTTCTGAGTCTAAAGTGGAAATACTCCGAATGGGCCGGTATGAGGTTGGGTCAATCAGCCAGTTTTTA",
         b"CGCTGGGGATGCCTCCACCTTTCGAGTGCCTGTTGGTTCCGACGCTATCATAGTCCCCATGCAAGGAGATGGCTGCGCGTCCTATCGCGCGGCAAATAGAGTCTACGGGGGCGGCTGTCCTCCTCGTCCTGGTCAACGGCCATAGGATTTCCGCGATGGTCGCCCGGATGTGCCTAAACCAAGGCTCCGATGGAGCTGCCTCTGATATCCGCGCTGCCGGTTTCCTGACGTCTGAAAACGTTGGAAAATACCTCCGAATGGGCCCCGTTTGAGTGGGTCATCACCGATTTTAT"),
    ]
}

#[test]
fn distances() {
    for (a, b) in test_sequences() {
        let d = test_distance(a, b);
        assert_eq!(test_distance(b, a), d);
    }
}

#[test]
fn scores() {
    for (a, b) in test_sequences() {
        let s = test_score(a, b);
        assert_eq!(test_score(b, a), s);
    }
}

#[test]
fn pinned_values() {
    let (a, b) = config::EXAMPLE_PAIR;
    let (a, b) = (a.as_bytes(), b.as_bytes());
    assert_eq!(edit_distance(a, b), 18);
    assert_eq!(match_score(a, b), 6);
    assert_eq!(match_score2(a, b), 6);

    let a = b"aaxxxxxxxxxxxxxxbbyyycc";
    let b = b"aayyybbtttttttttttttcc";
    assert_eq!(match_score(a, b), 7);
    assert_eq!(match_score2(a, b), 7);
}
