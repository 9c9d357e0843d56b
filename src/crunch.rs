//! Cut a line down to a window of context around a located word
//!
//! The window grows from the word outwards, one character on the left then one on the right,
//! each character spending one unit of a shared budget. The left side stops before reaching
//! the first character of the line, so index 0 is never part of a crunched passage. Lines
//! shorter than the budget are returned whole.

/// Default character budget for a passage
pub const MAX_LEN: usize = 100;

/// Character range `[start, end)` of `line` that a crunched passage covers
///
/// `index` is clamped to the line, so an offset past its end gives a window holding no line
/// characters after the word.
pub fn window(line_len: usize, index: usize, word_len: usize, max_len: usize) -> (usize, usize) {
    if line_len < max_len {
        return (0, line_len);
    }
    let index = index.min(line_len);
    let mut left = index as isize - 1;
    let mut right = index + word_len;
    let mut budget = max_len;
    while budget > 0 {
        if left > 0 {
            left -= 1;
            budget -= 1;
        }
        if budget > 0 && right < line_len {
            right += 1;
            budget -= 1;
        }
        if left <= 0 && right >= line_len {
            break;
        }
    }
    ((left + 1) as usize, right.min(line_len))
}

/// Crunch `line` around `word`, which starts at character offset `index`
///
/// `None` means the word was not found and yields an empty passage. `word` is the word as it
/// appears in the line. The result is at most `max_len` characters longer than `word`.
pub fn crunch(line: &str, index: Option<usize>, word: &str, max_len: usize) -> String {
    let index = match index {
        Some(index) => index,
        None => return String::new(),
    };
    let chars: Vec<char> = line.chars().collect();
    if chars.len() < max_len {
        return line.to_string();
    }

    let word_len = word.chars().count();
    let (start, end) = window(chars.len(), index, word_len, max_len);
    let index = index.min(chars.len());
    let after = (index + word_len).min(end);
    let mut crunched: String = chars[start..index].iter().collect();
    crunched.push_str(word);
    crunched.extend(&chars[after..end]);
    crunched
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_empty() {
        assert_eq!(crunch("the cat sat", None, "cat", 100), "");
    }

    #[test]
    fn short_lines_are_untouched() {
        assert_eq!(crunch("the cat sat", Some(4), "cat", 100), "the cat sat");
    }

    #[test]
    fn long_lines_are_centered() {
        let line = format!("{}cat{}", "a".repeat(50), "b".repeat(50));
        let passage = crunch(&line, Some(50), "cat", 10);
        assert_eq!(passage, "aaaaacatbbbbb");
    }

    #[test]
    fn left_edge_never_includes_first_character() {
        let line = format!("xycat{}", "b".repeat(20));
        let passage = crunch(&line, Some(2), "cat", 10);
        // 'x' at index 0 stays out, the right side takes the spare budget
        assert_eq!(passage, format!("ycat{}", "b".repeat(9)));
    }

    #[test]
    fn word_at_end_takes_budget_from_the_left() {
        let line = format!("{}cat", "a".repeat(20));
        let passage = crunch(&line, Some(20), "cat", 8);
        assert_eq!(passage, "aaaaaaaacat");
    }

    #[test]
    fn whole_line_except_first_char_when_budget_exceeds_it() {
        let line = "0123456789cat0123456789";
        let passage = crunch(line, Some(10), "cat", 16);
        assert_eq!(passage, "23456789cat01234567");
        let passage = crunch(line, Some(10), "cat", 20);
        assert_eq!(passage, "123456789cat0123456789");
        let passage = crunch(line, Some(10), "cat", 23);
        assert_eq!(passage, "123456789cat0123456789");
    }

    #[test]
    fn window_matches_passage() {
        let line = format!("{}cat{}", "a".repeat(50), "b".repeat(50));
        assert_eq!(window(103, 50, 3, 10), (45, 58));
        let (start, end) = window(103, 50, 3, 10);
        let covered: String = line.chars().skip(start).take(end - start).collect();
        assert_eq!(covered, crunch(&line, Some(50), "cat", 10));
        assert_eq!(window(11, 4, 3, 100), (0, 11));
    }

    #[test]
    fn index_past_the_line_is_clamped() {
        let line = "a".repeat(20);
        assert_eq!(crunch(&line, Some(40), "cat", 5), "aaaaacat");
        assert_eq!(window(20, 40, 3, 5), (15, 20));
    }

    #[test]
    fn budget_is_counted_in_characters() {
        let line = format!("{}cat{}", "é".repeat(10), "ü".repeat(10));
        let passage = crunch(&line, Some(10), "cat", 4);
        assert_eq!(passage, "éécatüü");
    }
}
