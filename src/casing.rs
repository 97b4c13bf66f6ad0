/// Casing shape of a source token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseShape {
    /// "HELLO" (more than one character, no lowercase letters)
    Upper,
    /// "Hello" (uppercase first character, lowercase remainder)
    Title,
    /// "hello"
    Lower,
    /// "hELLo", "I", anything else
    Irregular,
}

impl CaseShape {
    pub fn of(token: &str) -> Self {
        let mut chars = token.chars();
        let Some(first) = chars.next() else {
            return CaseShape::Irregular;
        };
        let rest = chars.as_str();

        if token.chars().count() > 1 && token == token.to_uppercase() {
            CaseShape::Upper
        } else if first.is_uppercase() && !rest.is_empty() && rest == rest.to_lowercase() {
            CaseShape::Title
        } else if token == token.to_lowercase() {
            CaseShape::Lower
        } else {
            CaseShape::Irregular
        }
    }

    /// Re-cases `translation` to follow this shape.
    pub fn apply(self, translation: &str) -> String {
        match self {
            CaseShape::Upper => translation.to_uppercase(),
            CaseShape::Title => capitalize(translation),
            CaseShape::Lower => translation.to_lowercase(),
            CaseShape::Irregular => translation.to_string(),
        }
    }
}

/// Copies the casing pattern of `original` onto `translation`.
pub fn transfer_case(original: &str, translation: &str) -> String {
    CaseShape::of(original).apply(translation)
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}
