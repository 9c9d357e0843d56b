//! Find a target word in a raw corpus line
//!
//! Two policies share one `Locator`:
//!
//! - `Policy::Substring` accepts the word as typed, then all upper case, then all lower case,
//!   anywhere in the line, including inside longer tokens.
//! - `Policy::Boundary` scans case-insensitively and only accepts a hit whose neighbours are not
//!   alphabetic, so "cat" is not found in "category".
//!
//! Positions are character (not byte) offsets.

use crate::errors::*;

/// Which rendering of the target word matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseForm {
    Original,
    Upper,
    Lower,
}

impl CaseForm {
    /// Render `word` in this case form
    pub fn render(self, word: &str) -> String {
        match self {
            CaseForm::Original => word.to_string(),
            CaseForm::Upper => word.to_uppercase(),
            CaseForm::Lower => word.to_lowercase(),
        }
    }

    /// Name the form of `found`, which is some casing of `word`
    ///
    /// Mixed casings such as "Cat" for "cat" count as `Original`.
    pub fn classify(found: &str, word: &str) -> CaseForm {
        if found == word {
            CaseForm::Original
        } else if found == word.to_uppercase() {
            CaseForm::Upper
        } else if found == word.to_lowercase() {
            CaseForm::Lower
        } else {
            CaseForm::Original
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    Substring,
    Boundary,
}

/// One located occurrence of the target word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// Character offset of the first character of the word
    pub index: usize,
    pub form: CaseForm,
    /// The word exactly as it appears in the line
    pub text: String,
}

impl Match {
    /// Length of the matched word in characters
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

#[derive(Debug, Clone)]
pub struct Locator {
    word: String,
    policy: Policy,
    case_sensitive: bool,
}

impl Locator {
    pub fn new(word: &str, policy: Policy, case_sensitive: bool) -> Result<Self> {
        if word.is_empty() {
            return Err(Error::EmptyWord);
        }
        Ok(Locator { word: word.to_string(), policy, case_sensitive })
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// First acceptable occurrence of the word in `line`
    pub fn locate(&self, line: &str) -> Option<Match> {
        match self.policy {
            Policy::Substring => {
                let found = if self.case_sensitive {
                    if line.contains(&self.word) { Some(CaseForm::Original) } else { None }
                } else {
                    find_case_insensitive(line, &self.word)
                };
                let form = found?;
                let text = form.render(&self.word);
                let byte = line.find(&text)?;
                Some(Match { index: line[..byte].chars().count(), form, text })
            }
            Policy::Boundary => {
                let chars: Vec<char> = line.chars().collect();
                let word: Vec<char> = self.word.chars().collect();
                let index = scan_boundary(&chars, &word, self.case_sensitive)?;
                let text: String = chars[index..index + word.len()].iter().collect();
                let form = CaseForm::classify(&text, &self.word);
                Some(Match { index, form, text })
            }
        }
    }
}

/// Substring variant: which case form of `word` occurs anywhere in `line`
///
/// Tries the word as given, then upper case, then lower case.
pub fn find_case_insensitive(line: &str, word: &str) -> Option<CaseForm> {
    [CaseForm::Original, CaseForm::Upper, CaseForm::Lower].iter()
        .cloned()
        .find(|form| line.contains(&form.render(word)))
}

/// Boundary variant: character offset of the first standalone, case-insensitive `word`
pub fn locate_word(line: &str, word: &str) -> Option<usize> {
    let chars: Vec<char> = line.chars().collect();
    let word: Vec<char> = word.chars().collect();
    scan_boundary(&chars, &word, false)
}

fn scan_boundary(line: &[char], word: &[char], case_sensitive: bool) -> Option<usize> {
    if word.is_empty() || word.len() > line.len() {
        return None;
    }
    let same = |a: char, b: char| {
        a == b || (!case_sensitive && a.to_lowercase().eq(b.to_lowercase()))
    };
    // Rejected candidates don't stop the scan
    (0..=line.len() - word.len()).find(|&start| {
        let end = start + word.len();
        line[start..end].iter().zip(word).all(|(&a, &b)| same(a, b))
            && (start == 0 || !line[start - 1].is_alphabetic())
            && (end == line.len() || !line[end].is_alphabetic())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_skips_word_stems() {
        assert_eq!(locate_word("the category is cat", "cat"), Some(16));
    }

    #[test]
    fn boundary_ignores_case_and_punctuation() {
        assert_eq!(locate_word("CAT!", "cat"), Some(0));
        assert_eq!(locate_word("(Cat) sat", "cat"), Some(1));
        assert_eq!(locate_word("concatenate", "cat"), None);
        assert_eq!(locate_word("ca", "cat"), None);
    }

    #[test]
    fn boundary_counts_characters_not_bytes() {
        assert_eq!(locate_word("né cat", "cat"), Some(3));
    }

    #[test]
    fn substring_reports_case_form() {
        assert_eq!(find_case_insensitive("The CAT sat", "cat"), Some(CaseForm::Upper));
        assert_eq!(find_case_insensitive("the cat sat", "Cat"), Some(CaseForm::Lower));
        assert_eq!(find_case_insensitive("the Cat sat", "cat"), None);
    }

    #[test]
    fn substring_policy_matches_inside_tokens() {
        let locator = Locator::new("cat", Policy::Substring, false).unwrap();
        let m = locator.locate("a category").unwrap();
        assert_eq!(m.index, 2);
        assert_eq!(m.text, "cat");
    }

    #[test]
    fn boundary_policy_records_matched_text() {
        let locator = Locator::new("good", Policy::Boundary, false).unwrap();
        let m = locator.locate("it was GOOD, really").unwrap();
        assert_eq!(m, Match { index: 7, form: CaseForm::Upper, text: "GOOD".to_string() });
    }

    #[test]
    fn case_sensitive_only_accepts_word_as_typed() {
        let boundary = Locator::new("cat", Policy::Boundary, true).unwrap();
        assert_eq!(boundary.locate("The CAT and the cat"), Some(Match {
            index: 16, form: CaseForm::Original, text: "cat".to_string(),
        }));
        let substring = Locator::new("cat", Policy::Substring, true).unwrap();
        assert!(substring.locate("The CAT").is_none());
    }

    #[test]
    fn empty_word_is_rejected() {
        assert!(Locator::new("", Policy::Boundary, false).is_err());
    }
}
