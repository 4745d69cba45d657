//! Initial-sound law (두음법칙).
//!
//! Some syllables are pronounced differently when they open a word: `리` is read as `이`, `라`
//! as `나`, and so on. A word ending in `리` may therefore be followed by a word starting with
//! `이`. Every output of the table is itself a fixed point.

/// `(syllable, word-initial form)` pairs.
pub const INITIAL_SOUND_RULES: [(char, char); 10] = [
    ('리', '이'),
    ('라', '나'),
    ('르', '으'),
    ('뢰', '뇌'),
    ('료', '요'),
    ('류', '유'),
    ('녀', '여'),
    ('뇨', '요'),
    ('뉴', '유'),
    ('니', '이'),
];

/// Maps `c` to the form it takes in word-initial position.
///
/// Characters outside [`INITIAL_SOUND_RULES`] pass through unchanged.
pub fn normalize(c: char) -> char {
    INITIAL_SOUND_RULES
        .iter()
        .find(|&&(from, _)| from == c)
        .map_or(c, |&(_, to)| to)
}

/// Whether `c` is already in word-initial form, i.e. [`normalize`] leaves it unchanged.
pub fn is_normalized(c: char) -> bool {
    normalize(c) == c
}
