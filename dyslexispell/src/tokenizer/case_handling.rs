use smol_str::SmolStr;

#[inline(always)]
pub fn lower_case(s: &str) -> SmolStr {
    s.chars()
        .map(|c| c.to_lowercase().collect::<String>())
        .collect::<SmolStr>()
}

#[inline(always)]
pub fn upper_case(s: &str) -> SmolStr {
    s.chars()
        .map(|c| c.to_uppercase().collect::<String>())
        .collect::<SmolStr>()
}

#[inline(always)]
pub fn upper_first(s: &str) -> SmolStr {
    let mut c = s.chars();
    match c.next() {
        None => SmolStr::new(""),
        Some(f) => SmolStr::from(f.to_uppercase().collect::<String>() + c.as_str()),
    }
}

/// All cased chars are upper case, and there is at least one of them.
pub fn is_all_caps(word: &str) -> bool {
    word.chars().any(char::is_uppercase) && upper_case(word) == word
}

pub fn is_first_caps(word: &str) -> bool {
    word.chars().next().map_or(false, char::is_uppercase)
}

/// The casing pattern of a word, as applied to its corrections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseMutation {
    AllCaps,
    FirstCaps,
    None,
}

impl CaseMutation {
    pub fn of(word: &str) -> CaseMutation {
        if is_all_caps(word) {
            CaseMutation::AllCaps
        } else if is_first_caps(word) {
            CaseMutation::FirstCaps
        } else {
            CaseMutation::None
        }
    }

    pub fn apply(self, correction: &str) -> SmolStr {
        match self {
            CaseMutation::AllCaps => upper_case(correction),
            CaseMutation::FirstCaps => upper_first(&lower_case(correction)),
            CaseMutation::None => lower_case(correction),
        }
    }
}

/// Reshapes `correction` to the casing of `original`.
///
/// "THIER" gives "THEIR", "Thier" gives "Their", anything else is lowercased.
pub fn apply_case(original: &str, correction: &str) -> SmolStr {
    CaseMutation::of(original).apply(correction)
}
