use lazy_static::lazy_static;
use regex::Regex;

use crate::{errors::errors::{Error, ErrorImpl}, Position, Span, MK_TOKEN};

use super::tokens::{ErrorUnit, ScanItem, Token, TokenKind, RESERVED_LOOKUP, SYMBOLS};

pub type RegexHandler = fn(&mut Lexer<'_>, &str);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

impl RegexPattern {
    fn new(pattern: &str, handler: RegexHandler) -> RegexPattern {
        RegexPattern {
            regex: Regex::new(&format!("^(?:{})", pattern)).unwrap(),
            handler,
        }
    }
}

lazy_static! {
    static ref PATTERNS: Vec<RegexPattern> = {
        let mut patterns = vec![
            RegexPattern::new("[ \t]+", skip_handler),
            RegexPattern::new("[a-zA-Z][a-zA-Z0-9]*", word_handler),
            RegexPattern::new("[0-9]+", number_handler),
        ];

        for symbol in SYMBOLS {
            patterns.push(RegexPattern::new(&regex::escape(symbol), symbol_handler));
        }

        patterns
    };
}

/// Scanning state for a single line. Nothing survives past the line it was
/// created for.
pub struct Lexer<'a> {
    items: Vec<ScanItem>,
    source: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            items: vec![],
            source,
            pos: 0,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, item: ScanItem) {
        log::trace!("scanned {} at {}..{}", item, item.span().start, item.span().end);
        self.items.push(item);
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn span_of(&self, len: usize) -> Span {
        Span {
            start: self.pos,
            end: self.pos + len,
        }
    }

    /// Consumes whatever starts at the cursor: one token, one whitespace run
    /// or one rejected character.
    fn step(&mut self) {
        let remaining = self.remainder();

        for pattern in PATTERNS.iter() {
            if let Some(found) = pattern.regex.find(remaining) {
                (pattern.handler)(self, found.as_str());
                return;
            }
        }

        error_handler(self);
    }

    pub fn into_items(self) -> Vec<ScanItem> {
        self.items
    }
}

fn skip_handler(lexer: &mut Lexer<'_>, matched: &str) {
    lexer.advance_n(matched.len());
}

fn word_handler(lexer: &mut Lexer<'_>, matched: &str) {
    let kind = if RESERVED_LOOKUP.contains(matched) {
        TokenKind::Keyword
    } else {
        TokenKind::Identifier
    };

    push_token(lexer, kind, matched);
}

fn number_handler(lexer: &mut Lexer<'_>, matched: &str) {
    push_token(lexer, TokenKind::Number, matched);
}

fn symbol_handler(lexer: &mut Lexer<'_>, matched: &str) {
    push_token(lexer, TokenKind::Symbol, matched);
}

fn push_token(lexer: &mut Lexer<'_>, kind: TokenKind, matched: &str) {
    let span = lexer.span_of(matched.len());
    lexer.push(ScanItem::Token(MK_TOKEN!(kind, String::from(matched), span)));
    lexer.advance_n(matched.len());
}

fn error_handler(lexer: &mut Lexer<'_>) {
    let Some(character) = lexer.at() else {
        return;
    };

    let span = lexer.span_of(character.len_utf8());
    log::debug!("unrecognised character {:?} at {}", character, span.start);

    lexer.push(ScanItem::Error(ErrorUnit { character, span }));
    lexer.advance_n(character.len_utf8());
}

/// Scans one line (without its terminator). Rejected characters are reported
/// in place and scanning continues right after them.
pub fn scan_line(line: &str) -> Vec<ScanItem> {
    let mut lex = Lexer::new(line);

    while !lex.at_eof() {
        lex.step();
    }

    lex.into_items()
}

/// Like [`scan_line`], but gives up at the first rejected character. The
/// returned error keeps the tokens scanned before it.
pub fn tokenize_line(line: &str) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(line);

    while !lex.at_eof() {
        lex.step();

        if let Some(ScanItem::Error(unit)) = lex.items.last() {
            let error = Error::new(
                ErrorImpl::UnrecognisedCharacter { character: unit.character },
                Position(unit.span.start),
            );
            lex.items.pop();

            return Err(error.with_scanned(only_tokens(lex.into_items())));
        }
    }

    Ok(only_tokens(lex.into_items()))
}

fn only_tokens(items: Vec<ScanItem>) -> Vec<Token> {
    items
        .into_iter()
        .filter_map(|item| match item {
            ScanItem::Token(token) => Some(token),
            ScanItem::Error(_) => None,
        })
        .collect()
}
