use crate::models::Language;

#[derive(Copy, Clone, PartialEq)]
enum Phoneme {
    StrongVowel,
    WeakVowel,
    Consonant,
}

fn classify_spanish(c: char, is_last: bool) -> Phoneme {
    match c {
        // Accented í/ú break a diphthong, so they behave like strong vowels
        'a' | 'e' | 'o' | 'á' | 'é' | 'ó' | 'í' | 'ú' => Phoneme::StrongVowel,
        'i' | 'u' | 'ü' => Phoneme::WeakVowel,
        'y' if is_last => Phoneme::WeakVowel,
        _ => Phoneme::Consonant,
    }
}

/// Estimates the number of syllables in a Spanish word.
///
/// Every vowel group is a syllable nucleus; two adjacent strong vowels form a
/// hiatus and count separately. Always returns at least 1.
pub fn count_spanish_syllables(word: &str) -> usize {
    let chars: Vec<char> = word.to_lowercase().chars().collect();
    let mut syllables = 0;
    let mut previous = Phoneme::Consonant;

    for (index, &c) in chars.iter().enumerate() {
        let current = classify_spanish(c, index == chars.len() - 1);

        match (previous, current) {
            (_, Phoneme::Consonant) => {}
            (Phoneme::Consonant, _) => syllables += 1,
            (Phoneme::StrongVowel, Phoneme::StrongVowel) => syllables += 1,
            // Diphthong or triphthong
            _ => {}
        }

        previous = current;
    }

    syllables.max(1)
}

/// Estimates the number of syllables in an English word.
///
/// Counts vowel groups and drops a silent trailing `e`. Always returns at least 1.
pub fn count_english_syllables(word: &str) -> usize {
    let word = word.to_lowercase();
    let is_vowel = |c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');

    let mut syllables = 0;
    let mut previous_was_vowel = false;

    for c in word.chars() {
        let current_is_vowel = is_vowel(c);
        if current_is_vowel && !previous_was_vowel {
            syllables += 1;
        }
        previous_was_vowel = current_is_vowel;
    }

    if syllables > 1 && word.ends_with('e') && !word.ends_with("le") && !word.ends_with("ee") {
        syllables -= 1;
    }

    syllables.max(1)
}

/// Estimates the number of syllables in a word for the given language.
pub fn count_syllables(word: &str, language: Language) -> usize {
    match language {
        Language::Spanish => count_spanish_syllables(word),
        Language::English => count_english_syllables(word),
    }
}
