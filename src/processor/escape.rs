//! Resolve JavaScript string escapes into the runtime value.
//!
//! Table entries are emitted encoded and decoded at runtime, so they must
//! hold what the string *evaluates* to, not its source spelling.

use std::iter::Peekable;
use std::str::Chars;

/// Cook the body of a string literal (delimiters already stripped).
pub fn cook(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let Some(e) = chars.next() else {
            // trailing lone backslash of an unterminated literal
            out.push('\\');
            break;
        };
        match e {
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'b' => out.push('\u{8}'),
            'f' => out.push('\u{c}'),
            'v' => out.push('\u{b}'),
            '0' if !chars.peek().is_some_and(char::is_ascii_digit) => out.push('\0'),
            'x' => match read_hex(&mut chars, 2) {
                Some(code) => out.push(to_char(code)),
                None => out.push('x'),
            },
            'u' => out.push(read_unicode(&mut chars)),
            // line continuation
            '\n' | '\u{2028}' | '\u{2029}' => {}
            '\r' => {
                chars.next_if_eq(&'\n');
            }
            other => out.push(other),
        }
    }
    out
}

fn read_hex(chars: &mut Peekable<Chars<'_>>, digits: usize) -> Option<u32> {
    let mut lookahead = chars.clone();
    let mut code = 0;
    for _ in 0..digits {
        code = code * 16 + lookahead.next()?.to_digit(16)?;
    }
    *chars = lookahead;
    Some(code)
}

/// `\uHHHH`, `\u{H…}`, and surrogate pairs spelled as two `\uHHHH`.
fn read_unicode(chars: &mut Peekable<Chars<'_>>) -> char {
    if chars.next_if_eq(&'{').is_some() {
        let mut code: u32 = 0;
        while let Some(d) = chars.next_if(char::is_ascii_hexdigit) {
            code = code.saturating_mul(16).saturating_add(d.to_digit(16).unwrap_or(0));
        }
        chars.next_if_eq(&'}');
        return to_char(code);
    }

    let Some(high) = read_hex(chars, 4) else {
        return 'u';
    };
    if (0xD800..0xDC00).contains(&high) {
        let mut lookahead = chars.clone();
        if lookahead.next() == Some('\\') && lookahead.next() == Some('u') {
            if let Some(low) = read_hex(&mut lookahead, 4) {
                if (0xDC00..0xE000).contains(&low) {
                    *chars = lookahead;
                    return to_char(0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00));
                }
            }
        }
    }
    to_char(high)
}

fn to_char(code: u32) -> char {
    char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER)
}
