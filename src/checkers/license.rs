//! SPDX license expression rules for the `license` field.
//!
//! Accepted values:
//! - SPDX expressions over the identifiers of the SPDX license list: `MIT`,
//!   `(Apache-2.0 OR MIT)`, `GPL-2.0+`, `GPL-2.0-or-later WITH Classpath-exception-2.0`
//! - `UNLICENSED` (also spelled `UNLICENCED`) for proprietary packages
//! - `SEE LICENSE IN <filename>` (also `SEE LICENCE IN <filename>`)
//!
//! Expressions that reference `LicenseRef-…` identifiers parse but are still
//! rejected, as are expressions that do not parse at all. Rejections are
//! reported as warnings with both acceptability flags cleared.

use regex::Regex;
use std::sync::OnceLock;

use super::LicenseChecker;
use crate::validation::CheckReport;

/// Warning attached to every rejected license value.
pub const INVALID_LICENSE_WARNING: &str = "license should be a valid SPDX license expression (without \"LicenseRef\"), \"UNLICENSED\", or \"SEE LICENSE IN <filename>\"";

/// Every identifier on the SPDX license list, deprecated ones included.
fn license_ids() -> impl Iterator<Item = &'static str> {
    spdx::identifiers::LICENSES.iter().map(|license| license.0)
}

fn is_license_id(word: &str) -> bool {
    spdx::license_id(word).is_some()
}

fn is_exception_id(word: &str) -> bool {
    spdx::exception_id(word).is_some()
}

/// Largest edit distance at which an unknown value is still offered a
/// correction.
const MAX_CORRECTION_DISTANCE: usize = 2;

fn file_reference_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^SEE LICEN[CS]E IN (.+)$").ok()).as_ref()
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token<'a> {
    Open,
    Close,
    Plus,
    And,
    Or,
    With,
    Word(&'a str),
}

fn tokenize(source: &str) -> Option<Vec<Token<'_>>> {
    let mut tokens = Vec::new();
    let mut chars = source.char_indices().peekable();

    while let Some(&(start, c)) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            }
            '(' => {
                chars.next();
                tokens.push(Token::Open);
            }
            ')' => {
                chars.next();
                tokens.push(Token::Close);
            }
            '+' => {
                chars.next();
                tokens.push(Token::Plus);
            }
            c if is_word_char(c) => {
                let mut end = start;
                while let Some(&(i, c)) = chars.peek() {
                    if !is_word_char(c) {
                        break;
                    }
                    end = i + c.len_utf8();
                    chars.next();
                }
                tokens.push(match &source[start..end] {
                    "AND" => Token::And,
                    "OR" => Token::Or,
                    "WITH" => Token::With,
                    word => Token::Word(word),
                });
            }
            _ => return None,
        }
    }

    Some(tokens)
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | ':')
}

/// Recursive-descent parser over the token stream.
///
/// ```text
/// expression := and-term ("OR" and-term)*
/// and-term   := with-term ("AND" with-term)*
/// with-term  := simple ("WITH" exception)?
/// simple     := "(" expression ")" | license-id ["+"] | license-ref
/// ```
struct Parser<'t, 'a> {
    tokens: &'t [Token<'a>],
    position: usize,
    uses_license_ref: bool,
}

impl<'t, 'a> Parser<'t, 'a> {
    fn new(tokens: &'t [Token<'a>]) -> Self {
        Self {
            tokens,
            position: 0,
            uses_license_ref: false,
        }
    }

    fn peek(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.position)
    }

    fn advance(&mut self) -> Option<&Token<'a>> {
        let token = self.tokens.get(self.position);
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    fn eat(&mut self, expected: &Token<'a>) -> bool {
        if self.peek() == Some(expected) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    fn parse(mut self) -> Option<bool> {
        self.expression()?;
        (self.position == self.tokens.len()).then_some(self.uses_license_ref)
    }

    fn expression(&mut self) -> Option<()> {
        self.and_term()?;
        while self.eat(&Token::Or) {
            self.and_term()?;
        }
        Some(())
    }

    fn and_term(&mut self) -> Option<()> {
        self.with_term()?;
        while self.eat(&Token::And) {
            self.with_term()?;
        }
        Some(())
    }

    fn with_term(&mut self) -> Option<()> {
        let was_license = self.simple()?;
        if self.eat(&Token::With) {
            // Exceptions only attach to plain license identifiers
            if !was_license {
                return None;
            }
            match self.advance() {
                Some(Token::Word(exception)) if is_exception_id(exception) => {}
                _ => return None,
            }
        }
        Some(())
    }

    /// Returns whether the term was a single license identifier.
    fn simple(&mut self) -> Option<bool> {
        match self.advance()?.clone() {
            Token::Open => {
                self.expression()?;
                self.eat(&Token::Close).then_some(false)
            }
            Token::Word(word) if is_license_ref(word) => {
                self.uses_license_ref = true;
                Some(false)
            }
            Token::Word(word) if is_license_id(word) => {
                self.eat(&Token::Plus);
                Some(true)
            }
            _ => None,
        }
    }
}

fn is_license_ref(word: &str) -> bool {
    let reference = match word.split_once(':') {
        Some((document, license)) => {
            if !document.starts_with("DocumentRef-") || document.len() == "DocumentRef-".len() {
                return false;
            }
            license
        }
        None => word,
    };
    reference.len() > "LicenseRef-".len() && reference.starts_with("LicenseRef-")
}

/// Parse an SPDX expression. `Some(uses_license_ref)` on success.
fn parse_expression(source: &str) -> Option<bool> {
    let tokens = tokenize(source)?;
    if tokens.is_empty() {
        return None;
    }
    Parser::new(&tokens).parse()
}

/// Suggest a known identifier close to `value`, if there is one.
fn correct(value: &str) -> Option<&'static str> {
    let trimmed = value.trim();
    let candidates = [trimmed.to_string(), trimmed.replace(' ', "-")];

    for candidate in &candidates {
        if let Some(id) = license_ids().find(|id| id.eq_ignore_ascii_case(candidate)) {
            return Some(id);
        }
    }

    candidates
        .iter()
        .flat_map(|candidate| {
            let candidate = candidate.to_lowercase();
            license_ids().map(move |id| {
                (strsim::levenshtein(&candidate, &id.to_lowercase()), id)
            })
        })
        .filter(|(distance, id)| *distance <= MAX_CORRECTION_DISTANCE && *distance * 3 < id.len())
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, id)| id)
}

/// The npm registry's license rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpdxLicenseChecker;

impl LicenseChecker for SpdxLicenseChecker {
    fn check_license(&self, license: &str) -> CheckReport {
        match parse_expression(license) {
            Some(false) => return CheckReport::valid(),
            Some(true) => {
                return CheckReport::rejected_with_warnings(vec![
                    INVALID_LICENSE_WARNING.to_string(),
                ]);
            }
            None => {}
        }

        if license == "UNLICENSED" || license == "UNLICENCED" {
            return CheckReport::valid();
        }
        if file_reference_pattern().is_some_and(|pattern| pattern.is_match(license)) {
            return CheckReport::valid();
        }

        let mut warnings = vec![INVALID_LICENSE_WARNING.to_string()];
        if !license.trim().is_empty()
            && let Some(corrected) = correct(license)
        {
            warnings.push(format!("license is similar to the valid expression \"{corrected}\""));
        }
        CheckReport::rejected_with_warnings(warnings)
    }
}
