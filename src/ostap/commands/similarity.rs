/// Similarity of two strings on a 0-100 scale.
///
/// Based on the indel distance (insertions and deletions only):
/// `100 * (len_a + len_b - indel) / (len_a + len_b)`, rounded. Two empty
/// strings are identical.
pub fn ratio(a: &str, b: &str) -> u8 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let total = a_chars.len() + b_chars.len();

    if total == 0 {
        return 100;
    }

    // indel distance = total - 2 * LCS
    let matched = 2 * lcs_len(&a_chars, &b_chars);
    ((matched * 100 + total / 2) / total) as u8
}

/// Length of the longest common subsequence, two-row table.
fn lcs_len(a: &[char], b: &[char]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for ca in a {
        for (j, cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
