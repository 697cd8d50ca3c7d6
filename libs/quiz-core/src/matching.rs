//! Word matching and surah-name matching for typed answers.

use crate::variations::{clean_word, variations};

/// Variations at or below this length never match by containment; a stray
/// letter or two would otherwise match inside every longer name.
const PARTIAL_MATCH_MIN_CHARS: usize = 2;

/// Decide whether a typed word counts as the target word.
///
/// True iff any variation of the guess is string-equal to any variation of
/// the target. The full cross product is checked rather than one canonical
/// form per side: stripping and shape folding can diverge on a pair whose
/// differences sit in different mark classes, and the intersection test
/// accepts combined variant forms that a single form would reject.
pub fn words_match(guess: &str, target: &str) -> bool {
    if guess.trim().is_empty() || target.trim().is_empty() {
        return false;
    }

    let guess_forms = variations(guess);
    let target_forms = variations(target);
    guess_forms.iter().any(|form| target_forms.contains(form))
}

/// Comparable forms of a surah name: the whole name plus every
/// whitespace/hyphen-separated part longer than two characters. The parts
/// let a guess meet the distinctive piece of a compound name ("Baqarah"
/// against "Al-Baqara") while the article alone never enters the pool.
fn name_forms(name: &str) -> Vec<String> {
    let mut forms = variations(name);
    for part in name.split(|c: char| c.is_whitespace() || c == '-') {
        if clean_word(part).chars().count() > PARTIAL_MATCH_MIN_CHARS {
            for form in variations(part) {
                if !forms.contains(&form) {
                    forms.push(form);
                }
            }
        }
    }
    forms
}

/// Decide whether a typed guess names any of the accepted surah names.
///
/// Exact variation equality always matches. Variations longer than two
/// characters also match by substring containment, in both directions,
/// which tolerates partial or abbreviated entry of compound names. The
/// containment stays bidirectional on purpose: the surah screens pass
/// several aliases per surah and rely on a long guess meeting a short
/// alias as well as the reverse.
pub fn name_matches<S: AsRef<str>>(guess: &str, accepted: &[S]) -> bool {
    if guess.trim().is_empty() || accepted.is_empty() {
        return false;
    }

    let guess_forms = name_forms(guess);
    for name in accepted {
        for candidate in name_forms(name.as_ref()) {
            for form in &guess_forms {
                if *form == candidate {
                    return true;
                }
                if form.chars().count() > PARTIAL_MATCH_MIN_CHARS
                    && candidate.chars().count() > PARTIAL_MATCH_MIN_CHARS
                    && (form.contains(candidate.as_str()) || candidate.contains(form.as_str()))
                {
                    return true;
                }
            }
        }
    }
    false
}
