//! Reference oracles for differential testing.
//!
//! Simple, obviously-correct implementations that serve as ground truth for
//! the optimized ones. Slow on purpose.

use charalign::utils::fold;
use std::collections::HashMap;

/// Classic O(n²) DP for the length of the longest strictly increasing
/// subsequence.
pub fn oracle_lis_length<T: Ord>(sequence: &[T]) -> usize {
    let mut best = vec![1usize; sequence.len()];
    for i in 0..sequence.len() {
        for j in 0..i {
            if sequence[j] < sequence[i] {
                best[i] = best[i].max(best[j] + 1);
            }
        }
    }
    best.into_iter().max().unwrap_or(0)
}

/// Longest common subsequence length of two texts, case-insensitively.
///
/// No alignment can get more characters right than this.
pub fn oracle_lcs_length(a: &str, b: &str) -> usize {
    let a = fold(a);
    let b = fold(b);
    let mut previous = vec![0usize; b.len() + 1];
    let mut current = vec![0usize; b.len() + 1];
    for &ca in &a {
        for (j, &cb) in b.iter().enumerate() {
            current[j + 1] = if ca == cb {
                previous[j] + 1
            } else {
                previous[j + 1].max(current[j])
            };
        }
        std::mem::swap(&mut previous, &mut current);
    }
    previous[b.len()]
}

/// Candidate sequences by plain recursion, with the strict run rule only.
///
/// Both texts must be folded. Returns no candidates when every path dead-ends
/// inside a run.
pub fn oracle_candidates(compared: &[char], accurate: &[char]) -> Vec<Vec<Option<usize>>> {
    fn walk(
        compared: &[char],
        positions: &HashMap<char, Vec<usize>>,
        used: &mut HashMap<char, Vec<usize>>,
        path: &mut Vec<Option<usize>>,
        out: &mut Vec<Vec<Option<usize>>>,
    ) {
        let index = path.len();
        let Some(&c) = compared.get(index) else {
            out.push(path.clone());
            return;
        };
        let Some(occurrences) = positions.get(&c) else {
            path.push(None);
            walk(compared, positions, used, path, out);
            path.pop();
            return;
        };
        let last_occurrence = occurrences[occurrences.len() - 1];
        for &position in occurrences {
            if let Some(&last) = used.get(&c).and_then(|u| u.last()) {
                if position < last {
                    continue;
                }
                let in_run = compared[index - 1] == c;
                if in_run && position != last + 1 && last != last_occurrence {
                    continue;
                }
            }
            used.entry(c).or_default().push(position);
            path.push(Some(position));
            walk(compared, positions, used, path, out);
            path.pop();
            used.entry(c).or_default().pop();
            if compared.get(index + 1) == Some(&c) {
                break;
            }
        }
    }

    let mut positions: HashMap<char, Vec<usize>> = HashMap::new();
    for (i, &c) in accurate.iter().enumerate() {
        positions.entry(c).or_default().push(i);
    }
    let mut out = Vec::new();
    walk(compared, &positions, &mut HashMap::new(), &mut Vec::new(), &mut out);
    out
}

/// Does `sub` occur in `sequence`, in order?
pub fn oracle_is_subsequence<T: PartialEq>(sub: &[T], sequence: &[T]) -> bool {
    let mut remaining = sequence.iter();
    sub.iter().all(|wanted| remaining.any(|x| x == wanted))
}

#[cfg(test)]
mod oracle_sanity {
    use super::*;

    #[test]
    fn lis_oracle_known_values() {
        assert_eq!(oracle_lis_length::<u8>(&[]), 0);
        assert_eq!(oracle_lis_length(&[3, 1, 2]), 2);
        assert_eq!(oracle_lis_length(&[2, 2, 2]), 1);
    }

    #[test]
    fn candidates_oracle_known_values() {
        assert_eq!(
            oracle_candidates(&fold("caaaba"), &fold("baaaac")),
            vec![
                vec![Some(5), Some(1), Some(2), Some(3), Some(0), Some(3)],
                vec![Some(5), Some(1), Some(2), Some(3), Some(0), Some(4)],
            ]
        );
        assert!(oracle_candidates(&fold("baa"), &fold("axab")).is_empty());
        assert_eq!(oracle_candidates(&[], &fold("abc")), vec![Vec::new()]);
    }

    #[test]
    fn lcs_oracle_known_values() {
        assert_eq!(oracle_lcs_length("hola", "Hello"), 2);
        assert_eq!(oracle_lcs_length("abc", ""), 0);
        assert_eq!(oracle_lcs_length("ABCBDAB", "bdcaba"), 4);
    }
}
