//! Symbols and tokens of the CPRL language.
//!
//! A [`Symbol`] names a lexical category. A [`Token`] is one occurrence of a
//! symbol in the source: the symbol, where it starts, and for identifiers and
//! literals the scanned text.

use std::fmt;
use std::sync::LazyLock;

use cprlc_util::{FxHashMap, Position};

/// Lexical category of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Symbol {
    // Reserved words
    /// `and`
    And,
    /// `array`
    Array,
    /// `begin`
    Begin,
    /// `Boolean`
    Boolean,
    /// `Char`
    Char,
    /// `class`
    Class,
    /// `const`
    Const,
    /// `declare`
    Declare,
    /// `else`
    Else,
    /// `elsif`
    Elsif,
    /// `end`
    End,
    /// `exit`
    Exit,
    /// `false`
    False,
    /// `for`
    For,
    /// `function`
    Function,
    /// `if`
    If,
    /// `in`
    In,
    /// `is`
    Is,
    /// `Integer`
    Integer,
    /// `loop`
    Loop,
    /// `mod`
    Mod,
    /// `not`
    Not,
    /// `of`
    Of,
    /// `or`
    Or,
    /// `private`
    Private,
    /// `procedure`
    Procedure,
    /// `program`
    Program,
    /// `protected`
    Protected,
    /// `public`
    Public,
    /// `read`
    Read,
    /// `readln`
    Readln,
    /// `return`
    Return,
    /// `String`
    String,
    /// `then`
    Then,
    /// `true`
    True,
    /// `type`
    Type,
    /// `var`
    Var,
    /// `when`
    When,
    /// `while`
    While,
    /// `write`
    Write,
    /// `writeln`
    Writeln,

    // Arithmetic operators
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Times,
    /// `/`
    Divide,

    // Relational operators
    /// `=`
    Equals,
    /// `!=`
    NotEqual,
    /// `<`
    LessThan,
    /// `<=`
    LessOrEqual,
    /// `>`
    GreaterThan,
    /// `>=`
    GreaterOrEqual,

    // Assignment and punctuation
    /// `:=`
    Assign,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// `;`
    Semicolon,
    /// `.`
    Dot,

    // Literals and identifiers
    /// Unsigned decimal integer, e.g. `42`.
    IntLiteral,
    /// Single character in quotes, e.g. `'a'` or `'\n'`.
    CharLiteral,
    /// Characters in double quotes, e.g. `"hello"`.
    StringLiteral,
    /// Name that is not a reserved word.
    Identifier,

    // Special
    /// End of input.
    Eof,
    /// Placeholder for a token that could not be scanned.
    Unknown,
}

impl Symbol {
    /// Every symbol, in declaration order.
    pub const ALL: [Symbol; 66] = [
        Symbol::And,
        Symbol::Array,
        Symbol::Begin,
        Symbol::Boolean,
        Symbol::Char,
        Symbol::Class,
        Symbol::Const,
        Symbol::Declare,
        Symbol::Else,
        Symbol::Elsif,
        Symbol::End,
        Symbol::Exit,
        Symbol::False,
        Symbol::For,
        Symbol::Function,
        Symbol::If,
        Symbol::In,
        Symbol::Is,
        Symbol::Integer,
        Symbol::Loop,
        Symbol::Mod,
        Symbol::Not,
        Symbol::Of,
        Symbol::Or,
        Symbol::Private,
        Symbol::Procedure,
        Symbol::Program,
        Symbol::Protected,
        Symbol::Public,
        Symbol::Read,
        Symbol::Readln,
        Symbol::Return,
        Symbol::String,
        Symbol::Then,
        Symbol::True,
        Symbol::Type,
        Symbol::Var,
        Symbol::When,
        Symbol::While,
        Symbol::Write,
        Symbol::Writeln,
        Symbol::Plus,
        Symbol::Minus,
        Symbol::Times,
        Symbol::Divide,
        Symbol::Equals,
        Symbol::NotEqual,
        Symbol::LessThan,
        Symbol::LessOrEqual,
        Symbol::GreaterThan,
        Symbol::GreaterOrEqual,
        Symbol::Assign,
        Symbol::LeftParen,
        Symbol::RightParen,
        Symbol::LeftBracket,
        Symbol::RightBracket,
        Symbol::Comma,
        Symbol::Colon,
        Symbol::Semicolon,
        Symbol::Dot,
        Symbol::IntLiteral,
        Symbol::CharLiteral,
        Symbol::StringLiteral,
        Symbol::Identifier,
        Symbol::Eof,
        Symbol::Unknown,
    ];

    /// The fixed source spelling of this symbol.
    ///
    /// Returns `None` for symbols whose text varies (literals, identifiers)
    /// and for the special symbols.
    pub fn spelling(self) -> Option<&'static str> {
        let s = match self {
            Symbol::And => "and",
            Symbol::Array => "array",
            Symbol::Begin => "begin",
            Symbol::Boolean => "Boolean",
            Symbol::Char => "Char",
            Symbol::Class => "class",
            Symbol::Const => "const",
            Symbol::Declare => "declare",
            Symbol::Else => "else",
            Symbol::Elsif => "elsif",
            Symbol::End => "end",
            Symbol::Exit => "exit",
            Symbol::False => "false",
            Symbol::For => "for",
            Symbol::Function => "function",
            Symbol::If => "if",
            Symbol::In => "in",
            Symbol::Is => "is",
            Symbol::Integer => "Integer",
            Symbol::Loop => "loop",
            Symbol::Mod => "mod",
            Symbol::Not => "not",
            Symbol::Of => "of",
            Symbol::Or => "or",
            Symbol::Private => "private",
            Symbol::Procedure => "procedure",
            Symbol::Program => "program",
            Symbol::Protected => "protected",
            Symbol::Public => "public",
            Symbol::Read => "read",
            Symbol::Readln => "readln",
            Symbol::Return => "return",
            Symbol::String => "String",
            Symbol::Then => "then",
            Symbol::True => "true",
            Symbol::Type => "type",
            Symbol::Var => "var",
            Symbol::When => "when",
            Symbol::While => "while",
            Symbol::Write => "write",
            Symbol::Writeln => "writeln",
            Symbol::Plus => "+",
            Symbol::Minus => "-",
            Symbol::Times => "*",
            Symbol::Divide => "/",
            Symbol::Equals => "=",
            Symbol::NotEqual => "!=",
            Symbol::LessThan => "<",
            Symbol::LessOrEqual => "<=",
            Symbol::GreaterThan => ">",
            Symbol::GreaterOrEqual => ">=",
            Symbol::Assign => ":=",
            Symbol::LeftParen => "(",
            Symbol::RightParen => ")",
            Symbol::LeftBracket => "[",
            Symbol::RightBracket => "]",
            Symbol::Comma => ",",
            Symbol::Colon => ":",
            Symbol::Semicolon => ";",
            Symbol::Dot => ".",
            Symbol::IntLiteral
            | Symbol::CharLiteral
            | Symbol::StringLiteral
            | Symbol::Identifier
            | Symbol::Eof
            | Symbol::Unknown => return None,
        };
        Some(s)
    }

    /// Human-readable name of this symbol, as used in messages.
    ///
    /// # Example
    ///
    /// ```
    /// use cprlc_lex::Symbol;
    ///
    /// assert_eq!(Symbol::Assign.label(), ":=");
    /// assert_eq!(Symbol::IntLiteral.label(), "Integer Literal");
    /// assert_eq!(Symbol::Eof.label(), "End-of-File");
    /// ```
    pub fn label(self) -> &'static str {
        match self {
            Symbol::IntLiteral => "Integer Literal",
            Symbol::CharLiteral => "Char Literal",
            Symbol::StringLiteral => "String Literal",
            Symbol::Identifier => "Identifier",
            Symbol::Eof => "End-of-File",
            Symbol::Unknown => "Unknown",
            other => other.spelling().unwrap_or("Unknown"),
        }
    }

    /// Returns true if tokens of this symbol carry their scanned text.
    pub fn carries_text(self) -> bool {
        matches!(
            self,
            Symbol::IntLiteral | Symbol::CharLiteral | Symbol::StringLiteral | Symbol::Identifier
        )
    }

    /// Returns true if this symbol is a reserved word.
    pub fn is_reserved_word(self) -> bool {
        (self as usize) <= (Symbol::Writeln as usize)
    }

    /// Returns true if this symbol can start an initial declaration.
    pub fn is_initial_decl_starter(self) -> bool {
        matches!(self, Symbol::Const | Symbol::Var | Symbol::Type)
    }

    /// Returns true if this symbol can start a subprogram declaration.
    pub fn is_subprogram_decl_starter(self) -> bool {
        matches!(self, Symbol::Procedure | Symbol::Function)
    }

    /// Returns true if this symbol can start a statement.
    pub fn is_stmt_starter(self) -> bool {
        matches!(
            self,
            Symbol::Exit
                | Symbol::Identifier
                | Symbol::If
                | Symbol::Loop
                | Symbol::While
                | Symbol::Read
                | Symbol::Write
                | Symbol::Writeln
                | Symbol::Return
        )
    }

    /// Returns true if this symbol is `and` or `or`.
    pub fn is_logical_operator(self) -> bool {
        matches!(self, Symbol::And | Symbol::Or)
    }

    /// Returns true if this symbol compares two values.
    pub fn is_relational_operator(self) -> bool {
        matches!(
            self,
            Symbol::Equals
                | Symbol::NotEqual
                | Symbol::LessThan
                | Symbol::LessOrEqual
                | Symbol::GreaterThan
                | Symbol::GreaterOrEqual
        )
    }

    /// Returns true if this symbol can be a unary sign.
    pub fn is_sign_operator(self) -> bool {
        matches!(self, Symbol::Plus | Symbol::Minus)
    }

    /// Returns true if this symbol is a binary adding operator.
    pub fn is_adding_operator(self) -> bool {
        matches!(self, Symbol::Plus | Symbol::Minus)
    }

    /// Returns true if this symbol is a binary multiplying operator.
    pub fn is_multiplying_operator(self) -> bool {
        matches!(self, Symbol::Times | Symbol::Divide | Symbol::Mod)
    }

    /// Returns true if this symbol denotes a constant value.
    ///
    /// `true` and `false` count as literals.
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            Symbol::IntLiteral
                | Symbol::CharLiteral
                | Symbol::StringLiteral
                | Symbol::True
                | Symbol::False
        )
    }

    /// Returns true if this symbol can start an expression.
    pub fn is_expr_starter(self) -> bool {
        self.is_literal()
            || self.is_sign_operator()
            || matches!(self, Symbol::Identifier | Symbol::LeftParen | Symbol::Not)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Catalogue of every fixed spelling.
static SPELLINGS: LazyLock<FxHashMap<&'static str, Symbol>> = LazyLock::new(|| {
    Symbol::ALL
        .iter()
        .filter_map(|&symbol| symbol.spelling().map(|s| (s, symbol)))
        .collect()
});

/// Looks up the symbol spelled exactly as `text`.
///
/// Matching is case-sensitive. Literal kinds, identifiers and the special
/// symbols are never returned.
///
/// # Example
///
/// ```
/// use cprlc_lex::{lookup_spelling, Symbol};
///
/// assert_eq!(lookup_spelling("while"), Some(Symbol::While));
/// assert_eq!(lookup_spelling("Integer"), Some(Symbol::Integer));
/// assert_eq!(lookup_spelling("integer"), None);
/// assert_eq!(lookup_spelling(":="), Some(Symbol::Assign));
/// ```
pub fn lookup_spelling(text: &str) -> Option<Symbol> {
    SPELLINGS.get(text).copied()
}

/// One token of source text.
///
/// Tokens are owned snapshots; later lexer activity never changes them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    symbol: Symbol,
    position: Position,
    text: Option<String>,
}

impl Token {
    /// Creates a token.
    ///
    /// `text` must be present exactly when `symbol` carries text.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `text` is present for a symbol that
    /// carries none, or missing for one that does.
    pub fn new(symbol: Symbol, position: Position, text: Option<String>) -> Self {
        debug_assert_eq!(
            symbol.carries_text(),
            text.is_some(),
            "text presence does not match {:?}",
            symbol
        );
        Self {
            symbol,
            position,
            text,
        }
    }

    /// The token's symbol.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// Position of the token's first character.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Scanned text of an identifier or literal.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.text {
            Some(text) => f.write_str(text),
            None => write!(f, "{}", self.symbol),
        }
    }
}
