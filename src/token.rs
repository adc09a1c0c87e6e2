use std::{iter::Peekable, str::Chars, fmt};

pub struct Lexer<'a> {
    src: &'a str,
    start: usize,
    input: Peekable<Chars<'a>>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Token<'src> {
    pub content: &'src str,
    pub offset: usize,
    pub kind: Tok,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Tok {
    /// Run of alphanumerics and underscores. Covers names as well as
    /// numeric literals; see [`is_identifier`].
    Word,

    /// Any other single character: operators, parentheses, stray
    /// punctuation.
    Symbol(char),
}

fn is_word_char(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric()
}

/// True when `s` can name a variable: a letter or underscore followed
/// by letters, digits and underscores.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();

    let Some(first) = chars.next() else {
        return false;
    };

    (first == '_' || first.is_ascii_alphabetic()) && chars.all(is_word_char)
}

/// Split one source line into tokens, dropping whitespace.
pub fn tokenize(line: &str) -> Vec<Token<'_>> {
    Lexer::new(line).collect()
}

impl<'src> Lexer<'src> {
    pub fn new(src: &'src str) -> Self {
        Self {
            src,
            start: 0,
            input: src.chars().peekable(),
        }
    }

    fn text_at(&self, start: usize) -> &'src str {
        &self.src[.. self.start][start ..]
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.input.next()?;
        self.start += ch.len_utf8();
        Some(ch)
    }

    fn bump_while(&mut self, f: impl Fn(char) -> bool) {
        while let Some(&c) = self.input.peek() {
            if !f(c) {
                break;
            }

            self.bump();
        }
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        self.bump_while(char::is_whitespace);

        let offset = self.start;
        let ch = self.bump()?;

        let kind = if is_word_char(ch) {
            self.bump_while(is_word_char);
            Tok::Word
        } else {
            Tok::Symbol(ch)
        };

        let content = self.text_at(offset);

        Some(Token { kind, offset, content })
    }
}

impl<'src> Token<'src> {
    pub fn is_identifier(&self) -> bool {
        self.kind == Tok::Word && is_identifier(self.content)
    }
}

impl<'src> AsRef<str> for Token<'src> {
    fn as_ref(&self) -> &str {
        self.content
    }
}

impl<'src> fmt::Display for Token<'src> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.content)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn texts(line: &str) -> Vec<&str> {
        tokenize(line).into_iter().map(|t| t.content).collect()
    }

    #[test]
    fn test_tokens() {
        let tokens: Vec<_> = Lexer::new("result = (x+10)*y_2")
        .map(|t| t.kind)
        .collect();

        assert_eq!(tokens.as_slice(), &[
            Tok::Word,
            Tok::Symbol('='),
            Tok::Symbol('('),
            Tok::Word,
            Tok::Symbol('+'),
            Tok::Word,
            Tok::Symbol(')'),
            Tok::Symbol('*'),
            Tok::Word,
        ]);

        assert_eq!(texts("result = (x+10)*y_2"), [
            "result", "=", "(", "x", "+", "10", ")", "*", "y_2",
        ]);
    }

    #[test]
    fn offsets_point_into_line() {
        let line = "  print  abc";
        let tokens = tokenize(line);

        assert_eq!(tokens[0].offset, 2);
        assert_eq!(tokens[1].offset, 9);
        assert_eq!(&line[tokens[1].offset ..], "abc");
    }

    #[test]
    fn operators_are_single_characters() {
        assert_eq!(texts("a<=b==c"), ["a", "<", "=", "b", "=", "=", "c"]);
        assert_eq!(texts("x = -5"), ["x", "=", "-", "5"]);
    }

    #[test]
    fn word_runs_mix_digits_and_letters() {
        assert_eq!(texts("5x _tmp 007"), ["5x", "_tmp", "007"]);
    }

    #[test]
    fn non_ascii_is_one_symbol() {
        let tokens = tokenize("é+1");
        assert_eq!(tokens[0].kind, Tok::Symbol('é'));
        assert_eq!(tokens[0].content, "é");
        assert_eq!(tokens[1].offset, 'é'.len_utf8());
    }

    #[test]
    fn blank_lines_have_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \t  ").is_empty());
    }

    #[test]
    fn long_lines_are_not_truncated() {
        let line = vec!["a"; 500].join(" + ");
        assert_eq!(tokenize(&line).len(), 999);
    }

    #[test]
    fn identifier_predicate() {
        assert!(is_identifier("x"));
        assert!(is_identifier("_"));
        assert!(is_identifier("result_2"));
        assert!(!is_identifier("5"));
        assert!(!is_identifier("5x"));
        assert!(!is_identifier("="));
        assert!(!is_identifier(""));
        assert!(!is_identifier("a-b"));

        let tokens = tokenize("y 10 +");
        assert!(tokens[0].is_identifier());
        assert!(!tokens[1].is_identifier());
        assert!(!tokens[2].is_identifier());
    }
}
