//! Swap the located word for an alternative before re-classifying
use crate::locate::Match;

/// The passage covering characters `window` of `line`, with the matched word exchanged
///
/// Every occurrence of the matched text inside the window is replaced by `exchange_word` in the
/// case form of the match, so "GOOD" becomes "BAD" for "bad". With `whole_words`, occurrences
/// glued to other letters ("GOODS") are left alone; the neighbours are read from the whole
/// line, so a token cut off at the window edge is not mistaken for a standalone word.
pub fn exchange(line: &str, window: (usize, usize), found: &Match, exchange_word: &str,
                whole_words: bool) -> String {
    let replacement = found.form.render(exchange_word);
    let chars: Vec<char> = line.chars().collect();
    let end = window.1.min(chars.len());
    let start = window.0.min(end);
    if !whole_words {
        let passage: String = chars[start..end].iter().collect();
        return passage.replace(&found.text, &replacement);
    }

    let target: Vec<char> = found.text.chars().collect();
    let mut out = String::with_capacity(line.len());
    let mut at = start;
    while at < end {
        let stop = at + target.len();
        let standalone = !target.is_empty()
            && stop <= end
            && chars[at..stop] == target[..]
            && (at == 0 || !chars[at - 1].is_alphabetic())
            && (stop == chars.len() || !chars[stop].is_alphabetic());
        if standalone {
            out.push_str(&replacement);
            at = stop;
        } else {
            out.push(chars[at]);
            at += 1;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crunch::{crunch, window};
    use crate::locate::{CaseForm, Locator, Policy};

    fn found(text: &str, form: CaseForm) -> Match {
        Match { index: 0, form, text: text.to_string() }
    }

    fn whole(line: &str) -> (usize, usize) {
        (0, line.chars().count())
    }

    #[test]
    fn replacement_follows_match_case() {
        let m = found("GOOD", CaseForm::Upper);
        assert_eq!(exchange("a GOOD day", whole("a GOOD day"), &m, "bad", true), "a BAD day");
        let m = found("good", CaseForm::Lower);
        assert_eq!(exchange("a good day", whole("a good day"), &m, "Bad", true), "a bad day");
        let m = found("Good", CaseForm::Original);
        assert_eq!(exchange("Good day", whole("Good day"), &m, "Bad", true), "Bad day");
    }

    #[test]
    fn whole_words_leaves_longer_tokens() {
        let line = "cat, category, cat";
        let m = found("cat", CaseForm::Original);
        assert_eq!(exchange(line, whole(line), &m, "dog", true), "dog, category, dog");
        assert_eq!(exchange(line, whole(line), &m, "dog", false), "dog, dogegory, dog");
    }

    #[test]
    fn adjacent_occurrences_are_not_standalone() {
        let m = found("ab", CaseForm::Original);
        assert_eq!(exchange("abab ab", whole("abab ab"), &m, "x", true), "abab x");
    }

    #[test]
    fn token_cut_by_the_window_keeps_its_text() {
        let line = format!("{} cat {} category", "x".repeat(30), "y".repeat(10));
        let locator = Locator::new("cat", Policy::Boundary, false).unwrap();
        let m = locator.locate(&line).unwrap();
        let len = line.chars().count();
        let span = window(len, m.index, m.char_len(), 30);
        let passage = crunch(&line, Some(m.index), &m.text, 30);
        assert_eq!(passage, format!("{} cat {} cat", "x".repeat(14), "y".repeat(10)));
        assert_eq!(exchange(&line, span, &m, "dog", true),
            format!("{} dog {} cat", "x".repeat(14), "y".repeat(10)));
    }

    #[test]
    fn only_the_window_is_returned() {
        let line = "the cat sat on the mat";
        let m = found("cat", CaseForm::Original);
        assert_eq!(exchange(line, (4, 11), &m, "dog", true), "dog sat");
        assert_eq!(exchange(line, (4, 99), &m, "dog", false), "dog sat on the mat");
    }
}
