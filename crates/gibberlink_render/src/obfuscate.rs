//! Character scrambling for protocol mode.

const FIRST_PRINTABLE: u32 = 33;
const PRINTABLE_SPAN: u32 = 94;

/// Map one character into the printable ASCII range `!`..=`~`.
///
/// # Examples
///
/// ```
/// use gibberlink_render::obfuscate_char;
///
/// assert_eq!(obfuscate_char('A'), 'b');
/// assert_eq!(obfuscate_char(' '), 'A');
/// ```
pub fn obfuscate_char(c: char) -> char {
    let code = FIRST_PRINTABLE + (c as u32 % PRINTABLE_SPAN);
    // code is always in 33..=126
    char::from(code as u8)
}

/// Scramble text character by character. The result has as many characters
/// as the input.
pub fn obfuscate(text: &str) -> String {
    text.chars().map(obfuscate_char).collect()
}
