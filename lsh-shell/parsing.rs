// This file is part of the lsh package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

// Command line tokenizing

/// Characters that separate tokens: space, tab, CR, LF and BEL.
pub const TOKEN_DELIMITERS: &[char] = &[' ', '\t', '\r', '\n', '\x07'];

/// Split `line` into whitespace-delimited tokens borrowed from it.
///
/// Runs of delimiters collapse, so leading, trailing and repeated separators
/// never produce empty tokens. There is no quoting or escaping.
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split(TOKEN_DELIMITERS)
        .filter(|token| !token.is_empty())
        .collect()
}
