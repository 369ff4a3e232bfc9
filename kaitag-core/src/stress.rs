//! Stress mark placement
//!
//! Derives where to put a combining acute accent on a Cyrillic headword from
//! the entry's IPA transcription. Stress on single-vowel words is predictable
//! and therefore not written; only the remaining marked vowel positions are
//! mapped from the phonemic string back onto the orthographic string.
//!
//! The whole module is fail-soft: any inconsistency between the transcription
//! and the headword yields the unmodified headword, never an error.

use crate::alphabet::Alphabet;

/// Combining acute accent, the orthographic stress mark.
pub const COMBINING_ACUTE: char = '\u{0301}';

/// Internal marker both IPA stress symbols are normalized to.
const MARKER: char = '\'';

/// Place a combining stress mark on `headword` according to `ipa`.
///
/// Returns the headword unchanged when no IPA is given, when every stress in
/// the transcription is predictable (single-vowel word parts), or when a
/// vowel of the transcription cannot be located in the headword.
pub fn mark_stress(headword: &str, ipa: Option<&str>, alphabet: &Alphabet) -> String {
    let Some(ipa) = ipa.filter(|s| !s.is_empty()) else {
        return headword.to_string();
    };
    let vowels = alphabet.vowel_map();

    // Primary and secondary stress collapse into one marker.
    let mut ipa: Vec<char> = ipa
        .chars()
        .map(|c| if c == 'ˈ' || c == 'ˌ' { MARKER } else { c })
        .collect();

    // Predictability pass: walk word parts (delimited by space, hyphen, or
    // end of string) and delete the marker of every part with at most one
    // vowel. Deletion shifts the indices, so the cursor steps back one to
    // re-examine the current position. Signed indices mirror that shift even
    // when the deleted marker sits at position 0.
    let mut i_stress: i64 = -1;
    let mut i_word: i64 = 0;
    let mut v_count = 0u32;
    let mut i_char: i64 = 0;
    while (i_char as usize) < ipa.len() {
        let c = ipa[i_char as usize];
        if c == MARKER {
            i_stress = i_char;
        } else if vowels.contains_key(&c) {
            v_count += 1;
        }
        if c == ' ' || c == '-' || i_char as usize == ipa.len() - 1 {
            if v_count <= 1 && i_stress >= i_word {
                ipa.remove(i_stress as usize);
                i_char -= 1;
            }
            i_word = i_char + 1;
            v_count = 0;
        }
        i_char += 1;
    }

    if !ipa.contains(&MARKER) {
        return headword.to_string();
    }

    // Placement pass: align IPA vowels with headword vowel graphemes left to
    // right; a marker arms the next vowel for accent insertion.
    let mut marked: Vec<char> = headword.chars().collect();
    let mut i_vowel: i64 = -1;
    let mut needs_stress = false;
    for &c in &ipa {
        if c == MARKER {
            needs_stress = true;
        }
        if let Some(&grapheme) = vowels.get(&c) {
            let start = (i_vowel + 1) as usize;
            match marked[start..].iter().position(|&h| h == grapheme) {
                Some(offset) => i_vowel = (start + offset) as i64,
                // Inconsistent transcription: give the headword back as-is.
                None => return headword.to_string(),
            }
            if needs_stress {
                marked.insert(i_vowel as usize + 1, COMBINING_ACUTE);
                i_vowel += 1;
                needs_stress = false;
            }
        }
    }

    marked.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alphabet() -> Alphabet {
        Alphabet::from_yaml_str(
            r#"
alphabet:
  а: { type: vowel, ipa: a }
  б: { type: consonant }
  и: { type: vowel, ipa: i }
  к: { type: consonant }
  л: { type: consonant }
  н: { type: consonant }
  р: { type: consonant }
  у: { type: vowel, ipa: u }
  х: { type: consonant }
  хъ: { type: consonant }
  ц: { type: consonant }
  ъ: { type: consonant }
"#,
        )
        .unwrap()
    }

    #[test]
    fn no_ipa_is_passthrough() {
        let a = alphabet();
        assert_eq!(mark_stress("бурул", None, &a), "бурул");
        assert_eq!(mark_stress("бурул", Some(""), &a), "бурул");
    }

    #[test]
    fn single_vowel_stress_is_dropped() {
        let a = alphabet();
        // One vowel in the only word part: the stress is predictable.
        assert_eq!(mark_stress("ахъ", Some("aˈxʷ"), &a), "ахъ");
        assert_eq!(mark_stress("ахъ", Some("ˈaxʷ"), &a), "ахъ");
    }

    #[test]
    fn two_vowel_word_keeps_the_mark() {
        let a = alphabet();
        assert_eq!(mark_stress("бурул", Some("buˈrul"), &a), "буру\u{301}л");
        assert_eq!(mark_stress("бурул", Some("ˈburul"), &a), "бу\u{301}рул");
    }

    #[test]
    fn exactly_one_mark_is_inserted() {
        let a = alphabet();
        let marked = mark_stress("бурул", Some("buˈrul"), &a);
        assert_eq!(
            marked.chars().filter(|&c| c == COMBINING_ACUTE).count(),
            1
        );
    }

    #[test]
    fn secondary_stress_is_normalized() {
        let a = alphabet();
        assert_eq!(mark_stress("бурул", Some("buˌrul"), &a), "буру\u{301}л");
    }

    #[test]
    fn per_part_predictability_in_compounds() {
        let a = alphabet();
        // First part has one vowel (stress dropped), second has two (kept).
        assert_eq!(
            mark_stress("бакь бурул", Some("ˈbak buˈrul"), &a),
            "бакь буру\u{301}л"
        );
    }

    #[test]
    fn hyphen_delimits_word_parts() {
        let a = alphabet();
        assert_eq!(mark_stress("ур-ур", Some("ˈur-ˈur"), &a), "ур-ур");
    }

    #[test]
    fn zero_vowel_part_drops_stray_marker() {
        let a = alphabet();
        // No vowel at all in the part still satisfies the <= 1 rule.
        assert_eq!(mark_stress("хъ", Some("ˈxʷ"), &a), "хъ");
    }

    #[test]
    fn unlocatable_vowel_fails_soft() {
        let a = alphabet();
        // Transcription claims an /i/ the headword does not contain.
        assert_eq!(mark_stress("бурул", Some("biˈrul"), &a), "бурул");
    }

    #[test]
    fn repeated_vowels_align_left_to_right() {
        let a = alphabet();
        // Three /a/ in a row: the marked one is the second occurrence.
        assert_eq!(
            mark_stress("барабан", Some("baˈraban"), &a),
            "бара\u{301}бан"
        );
    }
}
