//! Edge case tests for cprlc-lex

#[cfg(test)]
mod tests {
    use crate::{Cursor, Lexer, Symbol, Token};
    use cprlc_util::{Handler, Position};

    fn lex_all(source: &str) -> (Vec<Token>, Vec<String>) {
        let handler = Handler::new();
        let lexer = Lexer::new(Cursor::new(source), &handler).unwrap();
        let tokens = lexer.map(|token| token.unwrap()).collect();
        (tokens, handler.error_messages())
    }

    fn symbols(source: &str) -> Vec<Symbol> {
        lex_all(source).0.iter().map(Token::symbol).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        let (tokens, errors) = lex_all("");
        assert!(tokens.is_empty());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_edge_whitespace_only() {
        assert!(lex_all(" \t\r\n\u{2003}\n").0.is_empty());
    }

    #[test]
    fn test_edge_integer_literal() {
        let (tokens, _) = lex_all("123");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].symbol(), Symbol::IntLiteral);
        assert_eq!(tokens[0].text(), Some("123"));
        assert_eq!(tokens[0].position(), Position::new(1, 1));
    }

    #[test]
    fn test_edge_reserved_word_vs_identifier() {
        let (tokens, _) = lex_all("if iffy");
        assert_eq!(tokens[0].symbol(), Symbol::If);
        assert_eq!(tokens[0].text(), None);
        assert_eq!(tokens[1].symbol(), Symbol::Identifier);
        assert_eq!(tokens[1].text(), Some("iffy"));
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let (tokens, _) = lex_all(&format!("var {} : Integer;", name));
        assert_eq!(tokens[1].text(), Some(name.as_str()));
    }

    #[test]
    fn test_edge_comment_elided() {
        assert_eq!(
            symbols("x // comment\ny"),
            vec![Symbol::Identifier, Symbol::Identifier]
        );
    }

    #[test]
    fn test_edge_consecutive_comments() {
        let source = "// one\n// two\n\n   // three\nx";
        let (tokens, _) = lex_all(source);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].position(), Position::new(5, 1));
    }

    #[test]
    fn test_edge_many_comment_lines() {
        let source = "// filler\n".repeat(100_000) + "end";
        assert_eq!(symbols(&source), vec![Symbol::End]);
    }

    #[test]
    fn test_edge_comment_at_end_without_newline() {
        let (tokens, errors) = lex_all("x // trailing");
        assert_eq!(tokens.len(), 1);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_edge_divide_is_not_comment() {
        assert_eq!(
            symbols("a / b"),
            vec![Symbol::Identifier, Symbol::Divide, Symbol::Identifier]
        );
    }

    #[test]
    fn test_edge_two_char_operators() {
        assert_eq!(
            symbols("> >= < <= : :="),
            vec![
                Symbol::GreaterThan,
                Symbol::GreaterOrEqual,
                Symbol::LessThan,
                Symbol::LessOrEqual,
                Symbol::Colon,
                Symbol::Assign,
            ]
        );
    }

    #[test]
    fn test_edge_operators_without_spaces() {
        assert_eq!(
            symbols("x:=y<=z>=w!=v"),
            vec![
                Symbol::Identifier,
                Symbol::Assign,
                Symbol::Identifier,
                Symbol::LessOrEqual,
                Symbol::Identifier,
                Symbol::GreaterOrEqual,
                Symbol::Identifier,
                Symbol::NotEqual,
                Symbol::Identifier,
            ]
        );
    }

    #[test]
    fn test_edge_single_char_symbols() {
        assert_eq!(
            symbols("+-*=()[],;."),
            vec![
                Symbol::Plus,
                Symbol::Minus,
                Symbol::Times,
                Symbol::Equals,
                Symbol::LeftParen,
                Symbol::RightParen,
                Symbol::LeftBracket,
                Symbol::RightBracket,
                Symbol::Comma,
                Symbol::Semicolon,
                Symbol::Dot,
            ]
        );
    }

    #[test]
    fn test_edge_lone_bang() {
        let (tokens, errors) = lex_all("! x");
        assert_eq!(tokens[0].symbol(), Symbol::Unknown);
        assert_eq!(tokens[1].symbol(), Symbol::Identifier);
        assert_eq!(errors, vec!["Invalid character '!'"]);
    }

    #[test]
    fn test_edge_invalid_characters() {
        let (tokens, errors) = lex_all("a # b");
        assert_eq!(tokens[1].symbol(), Symbol::Unknown);
        assert_eq!(tokens[1].text(), None);
        assert_eq!(tokens[2].symbol(), Symbol::Identifier);
        assert_eq!(errors, vec!["Invalid character '#'"]);
    }

    #[test]
    fn test_edge_no_break_space_separates_tokens() {
        let (tokens, errors) = lex_all("a\u{A0}b");
        assert_eq!(
            tokens.iter().map(Token::symbol).collect::<Vec<_>>(),
            vec![Symbol::Identifier, Symbol::Identifier]
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn test_edge_information_separator_is_invalid() {
        let (tokens, errors) = lex_all("a\u{1C}b");
        assert_eq!(
            tokens.iter().map(Token::symbol).collect::<Vec<_>>(),
            vec![Symbol::Identifier, Symbol::Unknown, Symbol::Identifier]
        );
        assert_eq!(errors, vec!["Invalid character '\u{1C}'"]);
    }

    #[test]
    fn test_edge_invalid_character_at_end_is_eof() {
        let handler = Handler::new();
        let lexer = Lexer::new(Cursor::new("@"), &handler).unwrap();
        assert_eq!(lexer.symbol(), Symbol::Eof);
        assert_eq!(lexer.position(), Position::new(1, 1));
        assert_eq!(handler.error_count(), 1);
    }

    #[test]
    fn test_edge_underscore_is_invalid() {
        let (tokens, errors) = lex_all("a_b");
        assert_eq!(
            tokens.iter().map(Token::symbol).collect::<Vec<_>>(),
            vec![Symbol::Identifier, Symbol::Unknown, Symbol::Identifier]
        );
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_edge_escape_preserved() {
        let (tokens, errors) = lex_all(r#""a\tb""#);
        assert_eq!(tokens[0].symbol(), Symbol::StringLiteral);
        assert_eq!(tokens[0].text(), Some(r#""a\tb""#));
        assert_eq!(tokens[0].text().map(|t| t.chars().count()), Some(6));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_edge_unterminated_string() {
        let (tokens, errors) = lex_all("\"abc");
        assert!(tokens.is_empty());
        assert_eq!(
            errors,
            vec!["End of file reached before closing quote for Char or String literal."]
        );
    }

    #[test]
    fn test_edge_string_past_end_of_line_resumes() {
        let (tokens, errors) = lex_all("\"abc\nx");
        assert_eq!(tokens[0].symbol(), Symbol::Unknown);
        assert_eq!(tokens[1].symbol(), Symbol::Identifier);
        assert_eq!(tokens[1].position(), Position::new(2, 1));
        assert_eq!(
            errors,
            vec!["Char and String literals can not extend past end of line."]
        );
    }

    #[test]
    fn test_edge_malformed_char_literal() {
        let handler = Handler::new();
        let lexer = Lexer::new(Cursor::new("'ab'"), &handler).unwrap();
        assert_eq!(lexer.symbol(), Symbol::Unknown);
        assert_eq!(handler.error_messages(), vec!["Invalid Char literal."]);
    }

    #[test]
    fn test_edge_char_literals() {
        let (tokens, errors) = lex_all(r"'a' '\n' ' '");
        let texts: Vec<_> = tokens.iter().map(|t| t.text().unwrap()).collect();
        assert_eq!(texts, vec!["'a'", r"'\n'", "' '"]);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_edge_illegal_escape_keeps_token() {
        let (tokens, errors) = lex_all(r#"x := "a\zb";"#);
        assert_eq!(tokens[2].symbol(), Symbol::StringLiteral);
        assert_eq!(tokens[2].text(), Some(r#""a\zb""#));
        assert_eq!(tokens[3].symbol(), Symbol::Semicolon);
        assert_eq!(errors, vec!["Illegal escape character."]);
    }

    #[test]
    fn test_edge_control_char_in_literal() {
        let (_, errors) = lex_all("'\u{1}'");
        assert_eq!(
            errors[0],
            "Control characters not allowed in Char or String literal."
        );
    }

    #[test]
    fn test_edge_non_bmp_in_literal() {
        let (_, errors) = lex_all("\"😀\"");
        assert_eq!(
            errors[0],
            "Character not in Unicode Basic Multilingual Plane (BMP)."
        );
    }

    #[test]
    fn test_edge_non_bmp_outside_literal() {
        let (tokens, errors) = lex_all("😀");
        assert!(tokens.is_empty());
        assert_eq!(errors, vec!["Invalid character '😀'"]);
    }

    #[test]
    fn test_edge_resync_to_semicolon() {
        let handler = Handler::new();
        let mut lexer = Lexer::new(Cursor::new("a + ; b"), &handler).unwrap();
        lexer.advance_to(Symbol::Semicolon).unwrap();
        assert_eq!(lexer.symbol(), Symbol::Semicolon);
        assert_eq!(lexer.position(), Position::new(1, 5));
        lexer.advance().unwrap();
        assert_eq!(lexer.text(), Some("b"));
    }

    #[test]
    fn test_edge_resync_already_matching() {
        let handler = Handler::new();
        let mut lexer = Lexer::new(Cursor::new("; x"), &handler).unwrap();
        lexer.advance_to(Symbol::Semicolon).unwrap();
        assert_eq!(lexer.position(), Position::new(1, 1));
    }

    #[test]
    fn test_edge_resync_stops_at_eof() {
        let handler = Handler::new();
        let mut lexer = Lexer::new(Cursor::new("a b c"), &handler).unwrap();
        lexer.advance_to_any(&[Symbol::End, Symbol::Semicolon]).unwrap();
        assert_eq!(lexer.symbol(), Symbol::Eof);
    }

    #[test]
    fn test_edge_resync_to_any() {
        let handler = Handler::new();
        let mut lexer = Lexer::new(Cursor::new("x y end z ;"), &handler).unwrap();
        lexer.advance_to_any(&[Symbol::Semicolon, Symbol::End]).unwrap();
        assert_eq!(lexer.symbol(), Symbol::End);
    }

    #[test]
    fn test_edge_sticky_eof() {
        let handler = Handler::new();
        let mut lexer = Lexer::new(Cursor::new("x\n"), &handler).unwrap();
        lexer.advance().unwrap();
        assert_eq!(lexer.symbol(), Symbol::Eof);
        let position = lexer.position();
        for _ in 0..3 {
            lexer.advance().unwrap();
            assert_eq!(lexer.symbol(), Symbol::Eof);
            assert_eq!(lexer.position(), position);
        }
        assert_eq!(position, Position::new(2, 1));
    }

    #[test]
    fn test_edge_positions_across_lines() {
        let (tokens, _) = lex_all("begin\n  x := 10;\nend");
        let positions: Vec<_> = tokens.iter().map(Token::position).collect();
        assert_eq!(
            positions,
            vec![
                Position::new(1, 1),
                Position::new(2, 3),
                Position::new(2, 5),
                Position::new(2, 8),
                Position::new(2, 10),
                Position::new(3, 1),
            ]
        );
    }

    #[test]
    fn test_edge_token_is_snapshot() {
        let handler = Handler::new();
        let mut lexer = Lexer::new(Cursor::new("alpha beta"), &handler).unwrap();
        let first = lexer.token();
        lexer.advance().unwrap();
        assert_eq!(first.text(), Some("alpha"));
        assert_eq!(lexer.text(), Some("beta"));
    }

    #[test]
    fn test_edge_handler_accessor() {
        let handler = Handler::new();
        let lexer = Lexer::new(Cursor::new("#"), &handler).unwrap();
        assert!(lexer.handler().has_errors());
    }

    #[test]
    fn test_edge_diagnostic_codes() {
        let handler = Handler::new();
        let _ = Lexer::new(Cursor::new("'ab'"), &handler).unwrap();
        let diagnostics = handler.diagnostics();
        assert_eq!(diagnostics[0].code.map(|c| c.number()), Some(1003));
        assert_eq!(diagnostics[0].position, Position::new(1, 1));
    }

    #[test]
    fn test_edge_unicode_identifier() {
        let (tokens, errors) = lex_all("größe := 1;");
        assert_eq!(tokens[0].text(), Some("größe"));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_edge_non_ascii_digits_not_integers() {
        let (tokens, errors) = lex_all("٣");
        assert!(tokens.is_empty());
        assert_eq!(errors.len(), 1);
    }
}
