/*!
 * Split-plan construction for translated subtitle text.
 *
 * Scans the whitespace-delimited words of an entry and closes a fragment at
 * every word boundary where:
 * - the characters on both sides of the boundary are CJK ideographs, and
 * - the ideograph count of the accumulated run has reached the configured
 *   minimum, and
 * - adding the next word would push the combined ideograph count past it
 *
 * Each closed fragment records the relative character offset of its end
 * boundary within the original text; the final fragment is pinned at 1.0.
 * Text that never qualifies comes back as a single fragment, unchanged.
 */

/// Minimum ideograph run length before a boundary qualifies for a split
pub const DEFAULT_MIN_RUN_LENGTH: usize = 5;

/// One fragment of a split plan
#[derive(Debug, Clone, PartialEq)]
pub struct SplitFragment {
    /// Fragment text, words joined by single spaces
    pub text: String,
    /// Relative offset of the fragment's end boundary, in (0, 1];
    /// exactly 1.0 for the final fragment
    pub position: f64,
}

/// Ordered fragments produced for one translated entry
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SplitPlan {
    pub fragments: Vec<SplitFragment>,
}

impl SplitPlan {
    /// Number of fragments in the plan
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Whether the plan actually divides the entry
    pub fn is_split(&self) -> bool {
        self.fragments.len() > 1
    }

    /// Boundary positions between fragments, excluding the final 1.0
    pub fn interior_positions(&self) -> Vec<f64> {
        let count = self.fragments.len().saturating_sub(1);
        self.fragments
            .iter()
            .take(count)
            .map(|fragment| fragment.position)
            .collect()
    }
}

/// True for CJK Unified Ideographs (U+4E00..=U+9FFF)
fn is_ideograph(c: char) -> bool {
    ('\u{4e00}'..='\u{9fff}').contains(&c)
}

/// Count of ideographic characters in a string
fn ideograph_count(text: &str) -> usize {
    text.chars().filter(|c| is_ideograph(*c)).count()
}

/// Build a split plan for one block of translated text.
///
/// Offsets are measured in characters over the raw input length, with the
/// word stream normalized to single spaces, so interior positions are
/// strictly between 0 and 1.
pub fn build_split_plan(text: &str, min_run_length: usize) -> SplitPlan {
    let single_fragment = || SplitPlan {
        fragments: vec![SplitFragment {
            text: text.to_string(),
            position: 1.0,
        }],
    };

    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() < 2 {
        return single_fragment();
    }

    let total_chars = text.chars().count();
    let mut fragments: Vec<SplitFragment> = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    // Ideograph count of `current`
    let mut run_ideographs = 0usize;
    // Characters consumed so far, word separators included
    let mut cursor = 0usize;

    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            let boundary_is_ideographic = matches!(
                (words[i - 1].chars().last(), word.chars().next()),
                (Some(prev), Some(next)) if is_ideograph(prev) && is_ideograph(next)
            );

            if boundary_is_ideographic {
                let word_ideographs = ideograph_count(word);
                if run_ideographs + word_ideographs > min_run_length
                    && run_ideographs >= min_run_length
                {
                    fragments.push(SplitFragment {
                        text: current.join(" "),
                        position: cursor as f64 / total_chars as f64,
                    });
                    current.clear();
                    current.push(word);
                    run_ideographs = word_ideographs;
                    cursor += word.chars().count() + 1;
                    continue;
                }
            }
        }

        current.push(word);
        run_ideographs += ideograph_count(word);
        cursor += if i < words.len() - 1 {
            word.chars().count() + 1
        } else {
            word.chars().count()
        };
    }

    if !current.is_empty() {
        fragments.push(SplitFragment {
            text: current.join(" "),
            position: 1.0,
        });
    }

    if fragments.len() > 1 {
        SplitPlan { fragments }
    } else {
        single_fragment()
    }
}
