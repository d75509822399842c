//! Version-aware tag ordering.

use std::cmp::Ordering;

/// Sorts tag names newest version first, like `git tag --sort=-v:refname`.
pub fn sort_tags_descending(tags: &mut [String]) {
    tags.sort_by(|a, b| compare_version_refnames(b, a));
}

/// Compares two tag names as versions.
///
/// Names are compared byte by byte, except that runs of digits found at the
/// same position compare as numbers, so `1.10` follows `1.9` and `rc10`
/// follows `rc9`. A name that extends another one ranks above it, which puts
/// `1.0.0-rc.1` above `1.0.0` just as git does.
fn compare_version_refnames(a: &str, b: &str) -> Ordering {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        if a[i].is_ascii_digit() && b[j].is_ascii_digit() {
            let end_a = digit_run_end(a, i);
            let end_b = digit_run_end(b, j);
            let ordering = compare_numbers(&a[i..end_a], &b[j..end_b]);
            if ordering != Ordering::Equal {
                return ordering;
            }
            i = end_a;
            j = end_b;
        } else {
            let ordering = a[i].cmp(&b[j]);
            if ordering != Ordering::Equal {
                return ordering;
            }
            i += 1;
            j += 1;
        }
    }

    (a.len() - i).cmp(&(b.len() - j))
}

fn digit_run_end(s: &[u8], start: usize) -> usize {
    s[start..]
        .iter()
        .position(|c| !c.is_ascii_digit())
        .map_or(s.len(), |offset| start + offset)
}

/// Compares two digit runs by value without parsing, so any length works.
/// Equal values with more leading zeros rank lower.
fn compare_numbers(a: &[u8], b: &[u8]) -> Ordering {
    let trim = |run: &[u8]| -> usize { run.iter().take_while(|&&c| c == b'0').count() };
    let (sig_a, sig_b) = (&a[trim(a)..], &b[trim(b)..]);

    sig_a
        .len()
        .cmp(&sig_b.len())
        .then_with(|| sig_a.cmp(sig_b))
        .then_with(|| b.len().cmp(&a.len()))
}
