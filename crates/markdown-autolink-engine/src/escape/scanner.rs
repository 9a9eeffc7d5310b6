//! The character scan behind [`LiteralEscaper`](super::LiteralEscaper).
//!
//! One forward pass over the text, carrying a small window of the characters
//! already emitted (the context's `before` tail, the value so far, escape
//! markers included). At each `@`, `.` or `:` the scan asks whether the
//! recognizer would start a literal here:
//!
//! ```text
//! plain ──atext──▶ in-local-part ──'@'──▶ in-domain (lookahead: label(.label)+)
//!   │
//!   ├──"www"──▶ in-domain after '.' (lookahead: one domain char)
//!   └──scheme (not after a letter)──▶ in-scheme ──':'──▶ '/' next?
//! ```
//!
//! Lookahead runs over the rest of the value and then the context's `after`
//! text. It only ever crosses one domain run, so the pass stays linear.

use std::borrow::Cow;
use std::collections::VecDeque;

use super::context::EscapeContext;
use super::options::EscapeOptions;

/// Characters of an email local part.
fn is_atext(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '+' | '-' | '_')
}

/// Characters of an email domain label.
fn is_label(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_')
}

/// Characters a `www.` domain can start with.
fn is_domain_start(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '-' | '_')
}

/// Characters after which a `www.` literal may start (besides the start of
/// the text).
fn can_precede_www(c: char) -> bool {
    c.is_whitespace() || matches!(c, '(' | '*' | '_' | '[' | ']' | '~')
}

/// Whether `chars` begin with `label(.label)+`.
fn domain_follows(chars: impl Iterator<Item = char>) -> bool {
    let mut label_len = 0;
    let mut seen_dot = false;
    for c in chars {
        if is_label(c) {
            label_len += 1;
            if seen_dot {
                return true;
            }
        } else if c == '.' && label_len > 0 {
            seen_dot = true;
            label_len = 0;
        } else {
            break;
        }
    }
    false
}

struct Scanner<'o> {
    options: &'o EscapeOptions,
    recent: VecDeque<char>,
    window: usize,
}

impl<'o> Scanner<'o> {
    fn new(options: &'o EscapeOptions) -> Self {
        // Room for "www" or the longest scheme, plus the character before it.
        let window = (options.longest_protocol() + 1).max(4);
        Self {
            options,
            recent: VecDeque::with_capacity(window),
            window,
        }
    }

    /// Load the tail of the already-emitted markdown.
    fn prime(&mut self, before: &str) {
        let mut tail: Vec<char> = before.chars().rev().take(self.window).collect();
        tail.reverse();
        for c in tail {
            self.push(c);
        }
    }

    fn push(&mut self, c: char) {
        if self.recent.len() == self.window {
            self.recent.pop_front();
        }
        self.recent.push_back(c);
    }

    fn ends_with_ignore_case(&self, word: &str) -> bool {
        let len = word.chars().count();
        len <= self.recent.len()
            && self
                .recent
                .iter()
                .rev()
                .zip(word.chars().rev())
                .all(|(a, b)| a.eq_ignore_ascii_case(&b))
    }

    /// `@` that ends a local part and starts a domain.
    fn email_at(&self, rest: impl Iterator<Item = char>) -> bool {
        self.options.email()
            && self.recent.back().is_some_and(|&c| is_atext(c))
            && domain_follows(rest)
    }

    /// `.` right after a `www` that can start a literal.
    fn www_dot(&self, next: Option<char>) -> bool {
        if !self.options.www() || !self.ends_with_ignore_case("www") {
            return false;
        }
        let boundary_ok = match self.recent.len().checked_sub(4) {
            Some(i) => can_precede_www(self.recent[i]),
            None => true,
        };
        boundary_ok && next.is_some_and(is_domain_start)
    }

    /// `:` after a known scheme and before a `/`. The scheme must not
    /// continue a longer word.
    fn scheme_colon(&self, next: Option<char>) -> bool {
        next == Some('/')
            && self.options.protocols().iter().any(|protocol| {
                self.ends_with_ignore_case(protocol)
                    && match self.recent.len().checked_sub(protocol.len() + 1) {
                        Some(i) => !self.recent[i].is_ascii_alphabetic(),
                        None => true,
                    }
            })
    }
}

pub(super) fn escape<'v>(
    value: &'v str,
    ctx: &EscapeContext<'_>,
    options: &EscapeOptions,
) -> Cow<'v, str> {
    if value.is_empty() || !ctx.slot.is_scanned() || !value.contains(['@', '.', ':']) {
        return Cow::Borrowed(value);
    }

    let mut scanner = Scanner::new(options);
    scanner.prime(ctx.before);
    let mut out: Option<String> = None;

    for (i, c) in value.char_indices() {
        let rest = &value[i + c.len_utf8()..];
        let next = rest.chars().next().or_else(|| ctx.after.chars().next());
        let escape = match c {
            '@' => scanner.email_at(rest.chars().chain(ctx.after.chars())),
            '.' => scanner.www_dot(next),
            ':' => scanner.scheme_colon(next),
            _ => false,
        };

        if escape {
            log::trace!("escaping {c:?} at byte {i} of {value:?}");
            let buf = out.get_or_insert_with(|| {
                let mut buf = String::with_capacity(value.len() + 4);
                buf.push_str(&value[..i]);
                buf
            });
            buf.push('\\');
            scanner.push('\\');
        }
        if let Some(buf) = &mut out {
            buf.push(c);
        }
        scanner.push(c);
    }

    match out {
        Some(escaped) => Cow::Owned(escaped),
        None => Cow::Borrowed(value),
    }
}
