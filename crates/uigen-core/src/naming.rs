//! Name formatting shared by sections and generated code.

/// Title-cases a name word by word.
///
/// A cased character is title-cased when it starts the string or follows an
/// uncased character (digit, underscore, space, ...) and lower-cased
/// otherwise. Underscores are kept.
///
/// Title case differs from upper case for ligatures and digraphs: `ß`
/// becomes `Ss`, `ﬁ` becomes `Fi` and `ǆ` becomes `ǅ`.
///
/// # Examples
///
/// ```
/// use uigen_core::naming::title_case;
///
/// assert_eq!(title_case("invoice_list"), "Invoice_List");
/// assert_eq!(title_case("MESSAGE log"), "Message Log");
/// assert_eq!(title_case("2fa codes"), "2Fa Codes");
/// assert_eq!(title_case("straße"), "Straße");
/// ```
#[must_use]
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_cased = false;

    for c in name.chars() {
        let titlecase = titlecase_special(c);
        if c.is_lowercase() || c.is_uppercase() || titlecase.is_some() {
            if prev_cased {
                out.extend(c.to_lowercase());
            } else if let Some(title) = titlecase {
                out.push_str(title);
            } else {
                out.extend(c.to_uppercase());
            }
            prev_cased = true;
        } else {
            out.push(c);
            prev_cased = false;
        }
    }

    out
}

/// Characters whose title case is not their upper case.
const fn titlecase_special(c: char) -> Option<&'static str> {
    Some(match c {
        'ß' => "Ss",
        'Ǆ' | 'ǅ' | 'ǆ' => "ǅ",
        'Ǉ' | 'ǈ' | 'ǉ' => "ǈ",
        'Ǌ' | 'ǋ' | 'ǌ' => "ǋ",
        'Ǳ' | 'ǲ' | 'ǳ' => "ǲ",
        'ﬀ' => "Ff",
        'ﬁ' => "Fi",
        'ﬂ' => "Fl",
        'ﬃ' => "Ffi",
        'ﬄ' => "Ffl",
        'ﬅ' | 'ﬆ' => "St",
        _ => return None,
    })
}
