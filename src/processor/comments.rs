//! Comment removal ahead of tokenisation.
//!
//! `// …` is dropped up to (not including) the line break; `/* … */`
//! becomes a single space so the code on either side does not fuse.
//! String and template literals are copied untouched, so a `//` inside a
//! URL survives. So is a regex literal wherever one may start, which keeps
//! `/\/\//g` whole.

use std::iter::Peekable;
use std::str::Chars;

pub fn strip_comments(src: &str) -> String {
    let mut out = String::with_capacity(src.len());
    let mut chars = src.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' | '\'' | '`' => copy_literal(c, &mut chars, &mut out),
            '/' if chars.peek() == Some(&'/') => {
                while chars.next_if(|&n| n != '\n' && n != '\r').is_some() {}
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                skip_block(&mut chars);
                out.push(' ');
            }
            '/' if regex_allowed(&out) => copy_regex(&mut chars, &mut out),
            _ => out.push(c),
        }
    }
    out
}

fn copy_literal(quote: char, chars: &mut Peekable<Chars<'_>>, out: &mut String) {
    out.push(quote);
    while let Some(c) = chars.next() {
        out.push(c);
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                out.push(escaped);
            }
        } else if c == quote {
            return;
        }
    }
}

/// Whether a `/` after `out` starts a regex rather than a division.
fn regex_allowed(out: &str) -> bool {
    let before = out.trim_end();
    match before.chars().next_back() {
        None => true,
        Some(c) if "(,=:[!&|?{};+-*%<>~^".contains(c) => true,
        Some(_) => {
            let word = before
                .rsplit(|c: char| !c.is_ascii_alphanumeric() && c != '_' && c != '$')
                .next()
                .unwrap_or_default();
            matches!(word, "return" | "typeof" | "case" | "in" | "of")
        }
    }
}

/// Copy a regex body and its closing `/`. Stops short of a line break, which
/// a regex cannot contain.
fn copy_regex(chars: &mut Peekable<Chars<'_>>, out: &mut String) {
    out.push('/');
    let mut in_class = false;
    while let Some(c) = chars.next_if(|&n| n != '\n' && n != '\r') {
        out.push(c);
        match c {
            '\\' => {
                if let Some(escaped) = chars.next_if(|&n| n != '\n' && n != '\r') {
                    out.push(escaped);
                }
            }
            '[' => in_class = true,
            ']' => in_class = false,
            '/' if !in_class => return,
            _ => {}
        }
    }
}

/// Consume through the closing `*/`, or to end of input.
fn skip_block(chars: &mut Peekable<Chars<'_>>) {
    while let Some(c) = chars.next() {
        if c == '*' && chars.next_if_eq(&'/').is_some() {
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::strip_comments;

    #[test]
    fn test_strip() {
        let test_cases = vec![
            ("let a = 1; // note\nlet b;", "let a = 1; \nlet b;"),
            ("a/* inline */b", "a b"),
            ("/* multi\nline */x", " x"),
            ("x; /* never closed", "x;  "),
            ("f(a / b)", "f(a / b)"),
            ("// only a comment", ""),
            ("**/", "**/"),
            ("x = a / b; // note\ny", "x = a / b; \ny"),
            ("(a + b) / 2 // half", "(a + b) / 2 "),
            ("return /\\/\\// // tail", "return /\\/\\// "),
        ];

        for (src, expected) in test_cases {
            assert_eq!(strip_comments(src), expected, "source: {src:?}");
        }
    }

    #[test]
    fn test_literals_are_opaque() {
        let test_cases = vec![
            (r#"u = "http://x.org";"#, r#"u = "http://x.org";"#),
            ("s = '/* not */';", "s = '/* not */';"),
            (r#"q = "a\"//b";"#, r#"q = "a\"//b";"#),
            ("t = `//${x}`;", "t = `//${x}`;"),
            (r"s.replace(/\/\//g, '-'); // tail", r"s.replace(/\/\//g, '-'); "),
            (r"ok = /https?:\/\//.test(u); // x", r"ok = /https?:\/\//.test(u); "),
            (r"m = /[/*]+/; /* gone */", r"m = /[/*]+/;  "),
        ];

        for (src, expected) in test_cases {
            assert_eq!(strip_comments(src), expected, "source: {src:?}");
        }
    }
}
