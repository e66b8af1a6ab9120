/*!
 * Proportional re-splitting of source subtitle text.
 *
 * Takes the boundary positions recorded in a split plan and cuts the paired
 * source text at the word boundaries nearest those positions. Words are
 * never broken; a fragment may come out empty when positions crowd
 * together, and the output always has exactly one more fragment than there
 * are positions.
 */

/// Split source text at word boundaries near the given relative positions.
///
/// Positions are fractions of the raw character length, expected in
/// ascending order and strictly between 0 and 1. Returns
/// `positions.len() + 1` fragments whose words, concatenated in order,
/// reproduce the input's word sequence.
pub fn resplit_at_positions(text: &str, positions: &[f64]) -> Vec<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    let total_chars = text.chars().count();

    let mut fragments: Vec<String> = Vec::with_capacity(positions.len() + 1);
    let mut word_index = 0usize;
    // Characters consumed so far, word separators included
    let mut consumed = 0usize;

    for position in positions {
        let target = (total_chars as f64 * position) as usize;
        let mut current: Vec<&str> = Vec::new();

        while word_index < words.len() && consumed < target {
            current.push(words[word_index]);
            consumed += words[word_index].chars().count() + 1;
            word_index += 1;
        }

        fragments.push(current.join(" "));
    }

    fragments.push(words[word_index..].join(" "));
    fragments
}
