/// One rendering unit of a typed-vs-original comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffSegment {
    /// typed character agrees with the original
    Matched(char),
    /// typed character flagged as wrong
    Mismatched(char),
    /// original character the typed text never reached
    Missing,
}

impl DiffSegment {
    pub fn is_error(&self) -> bool {
        !matches!(self, DiffSegment::Matched(_))
    }

    pub fn glyph(&self, placeholder: char) -> char {
        match *self {
            DiffSegment::Matched(c) | DiffSegment::Mismatched(c) => c,
            DiffSegment::Missing => placeholder,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Synced,
    InError,
}

/// Greedy single-pass alignment of `typed` against `original`.
///
/// Positions are compared as chars. Once a mismatch is seen the scan stays in
/// error until both cursors land on equal characters again; it never searches
/// for a better alignment.
pub fn compute_diff(original: &str, typed: &str) -> Vec<DiffSegment> {
    let original: Vec<char> = original.chars().collect();
    let typed: Vec<char> = typed.chars().collect();

    let (mut i, mut j) = (0, 0);
    let mut state = ScanState::Synced;
    let mut segments = Vec::with_capacity(original.len().max(typed.len()));

    let aligned = |i: usize, j: usize| i < original.len() && j < typed.len() && original[i] == typed[j];

    while i < original.len() || j < typed.len() {
        if state == ScanState::Synced && aligned(i, j) {
            segments.push(DiffSegment::Matched(typed[j]));
            i += 1;
            j += 1;
            continue;
        }

        state = ScanState::InError;
        if j < typed.len() {
            segments.push(DiffSegment::Mismatched(typed[j]));
            j += 1;
            if i < original.len() {
                i += 1;
            }
        } else {
            segments.push(DiffSegment::Missing);
            i += 1;
        }

        if aligned(i, j) {
            state = ScanState::Synced;
        }
    }

    segments
}
