/// Replacement pairs applied in this exact order.
///
/// Order is observable: an earlier rewrite can create or destroy a later
/// match site, so this is a fixed slice rather than a map.
pub const ABBREVIATIONS: &[(&str, &str)] = &[
    (" and ", " & "),
    (" with ", " w/ "),
    (" without ", " w/o "),
    (" through ", " thru "),
    (" between ", " btwn "),
    (" approximately ", " ~"),
    (" percent ", "%"),
    (" number ", "#"),
    (" versus ", " vs "),
];

/// Substitute common long words with short forms to shave characters.
pub fn apply_abbreviations(text: &str) -> String {
    let mut text = text.to_string();
    for (pattern, replacement) in ABBREVIATIONS {
        text = text.replace(pattern, replacement);
    }
    text
}
