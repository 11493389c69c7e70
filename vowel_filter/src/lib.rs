use util::{word, ws, ParseResult, Span};

const VOWELS: [char; 6] = ['A', 'O', 'Y', 'E', 'U', 'I'];

pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c.to_ascii_uppercase())
}

/// Drops every vowel and writes each remaining character as `.` followed by
/// its lower-case form.
pub fn consonant_code(word: &str) -> String {
    let code: String = word
        .chars()
        .filter(|&c| !is_vowel(c))
        .flat_map(|c| ['.', c.to_ascii_lowercase()])
        .collect();

    log::debug!("{word:?} -> {code:?}");

    code
}

pub fn parse_word(i: Span) -> ParseResult<&str> {
    let (i, w) = ws(word)(i)?;
    Ok((i, *w.fragment()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("tour", ".t.r")]
    #[case("Codeforces", ".c.d.f.r.c.s")]
    #[case("aBAcAba", ".b.c.b")]
    #[case("AOYEUIaoyeui", "")]
    #[case("", "")]
    #[case("x1!", ".x.1.!")]
    fn consonant_code_ok(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(consonant_code(input), expected);
    }

    #[rstest]
    #[case("  Codeforces\n", "Codeforces")]
    #[case("\n", "")]
    fn parse_word_ok(#[case] input: &str, #[case] expected: &str) {
        let res = util::parse_input(input, parse_word);
        assert!(res.is_ok());
        assert_eq!(res.unwrap(), expected);
    }

    proptest! {
        #[test]
        fn code_is_two_chars_per_consonant(w in "[a-zA-Z]{0,40}") {
            let consonants = w.chars().filter(|&c| !is_vowel(c)).count();
            prop_assert_eq!(consonant_code(&w).len(), 2 * consonants);
        }

        #[test]
        fn vowel_check_ignores_case(w in "[a-zA-Z]{0,40}") {
            prop_assert_eq!(consonant_code(&w), consonant_code(&w.to_ascii_uppercase()));
        }
    }
}
