//! Minimal CSS tokenizer producing `(prelude, declarations)` records.
//!
//! Only the structure needed to find colour declarations is recovered: no
//! selector parsing, no value parsing, no cascade.

/// At-rules whose block holds ordinary rules that should be scanned.
const NESTED_AT_RULES: [&str; 5] = ["media", "supports", "document", "layer", "container"];

/// What: Single `property: value` pair from a rule body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Lowercased property name.
    pub property: String,
    /// Raw value text with comments removed and whitespace trimmed.
    pub value: String,
}

/// What: Qualified rule recovered from a stylesheet.
///
/// Inputs: Produced by [`parse_stylesheet`].
///
/// Output: Selector prelude plus declarations in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRule {
    /// Selector text before `{`, trimmed.
    pub prelude: String,
    /// Declarations in the order they appear.
    pub declarations: Vec<Declaration>,
}

/// What: Tokenize stylesheet text into rules.
///
/// Inputs:
/// - `css`: Contents of a `<style>` block or stylesheet file.
///
/// Output:
/// - Rules in source order, including those nested in `@media`/`@supports` blocks.
///
/// Details:
/// - `/* ... */` comments are dropped everywhere, so commented-out colours never surface.
/// - Unterminated rules run to end of input; unknown at-rule blocks are skipped whole.
#[must_use]
pub fn parse_stylesheet(css: &str) -> Vec<StyleRule> {
    let mut t = Tokenizer { src: css, pos: 0 };
    let mut rules = Vec::new();
    t.parse_rule_list(false, &mut rules);
    rules
}

/// Cursor over stylesheet text.
struct Tokenizer<'a> {
    /// Full source text.
    src: &'a str,
    /// Byte offset of the next unread character.
    pos: usize,
}

impl Tokenizer<'_> {
    /// Next character without consuming it.
    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    /// Consume and return the next character.
    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consume a `/* ... */` comment if one starts here.
    fn skip_comment(&mut self) -> bool {
        if !self.src[self.pos..].starts_with("/*") {
            return false;
        }
        match self.src[self.pos + 2..].find("*/") {
            Some(end) => self.pos += 2 + end + 2,
            None => self.pos = self.src.len(),
        }
        true
    }

    /// Skip whitespace and comments.
    fn skip_trivia(&mut self) {
        loop {
            if self.skip_comment() {
                continue;
            }
            match self.peek() {
                Some(c) if c.is_whitespace() => {
                    self.bump();
                }
                _ => return,
            }
        }
    }

    /// What: Read text up to (not including) any character in `stops`.
    ///
    /// Details:
    /// - Comments are removed from the result; quoted strings are copied verbatim so a
    ///   quoted `;` or `}` does not end the token.
    fn read_until(&mut self, stops: &[char]) -> String {
        let mut out = String::new();
        while let Some(c) = self.peek() {
            if self.skip_comment() {
                continue;
            }
            if stops.contains(&c) {
                break;
            }
            self.bump();
            out.push(c);
            if c == '"' || c == '\'' {
                while let Some(inner) = self.bump() {
                    out.push(inner);
                    if inner == c {
                        break;
                    }
                }
            }
        }
        out
    }

    /// Skip a `{ ... }` block including any nested blocks. Expects to sit on `{`.
    fn skip_block(&mut self) {
        let mut depth = 0usize;
        while self.peek().is_some() {
            if self.skip_comment() {
                continue;
            }
            match self.bump() {
                Some('{') => depth += 1,
                Some('}') => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        return;
                    }
                }
                _ => {}
            }
        }
    }

    /// What: Parse rules until end of input or, when `nested`, the closing `}`.
    fn parse_rule_list(&mut self, nested: bool, rules: &mut Vec<StyleRule>) {
        loop {
            self.skip_trivia();
            match self.peek() {
                None => return,
                Some('}') => {
                    self.bump();
                    if nested {
                        return;
                    }
                }
                Some('@') => self.parse_at_rule(rules),
                Some(_) => self.parse_qualified_rule(rules),
            }
        }
    }

    /// What: Handle `@name prelude;` or `@name prelude { ... }`.
    fn parse_at_rule(&mut self, rules: &mut Vec<StyleRule>) {
        self.bump();
        let header = self.read_until(&['{', ';', '}']);
        let name = header
            .split(|c: char| c.is_whitespace() || c == '(')
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match self.peek() {
            Some('{') if NESTED_AT_RULES.contains(&name.as_str()) => {
                self.bump();
                self.parse_rule_list(true, rules);
            }
            Some('{') => self.skip_block(),
            Some(';') => {
                self.bump();
            }
            _ => {}
        }
    }

    /// What: Parse `prelude { declarations }`.
    fn parse_qualified_rule(&mut self, rules: &mut Vec<StyleRule>) {
        let prelude = self.read_until(&['{', '}', ';']);
        match self.peek() {
            Some('{') => {
                self.bump();
            }
            Some(';') => {
                self.bump();
                return;
            }
            _ => return,
        }
        let declarations = self.parse_declarations();
        rules.push(StyleRule {
            prelude: prelude.trim().to_string(),
            declarations,
        });
    }

    /// What: Parse declarations up to and including the closing `}`.
    fn parse_declarations(&mut self) -> Vec<Declaration> {
        let mut out = Vec::new();
        loop {
            self.skip_trivia();
            match self.peek() {
                None => return out,
                Some('}') => {
                    self.bump();
                    return out;
                }
                Some(';') => {
                    self.bump();
                    continue;
                }
                Some('{') => {
                    self.skip_block();
                    continue;
                }
                Some(_) => {}
            }
            let name = self.read_until(&[':', ';', '{', '}']);
            if self.peek() != Some(':') {
                continue;
            }
            self.bump();
            let value = self.read_until(&[';', '{', '}']);
            out.push(Declaration {
                property: name.trim().to_ascii_lowercase(),
                value: value.trim().to_string(),
            });
        }
    }
}
