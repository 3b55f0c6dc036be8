use crate::ast::{Expression, Statement};
use crate::{parse, tokenise, ParseError, TokenKind};
use indoc::indoc;

fn parsed_to_string(source: &str) -> String {
  parse(source).unwrap().to_string()
}

#[test]
fn tokenises_symbols_and_keywords() {
  let source = indoc! {r#"
    let five = 5;
    let add = fn(x, y) { x + y; };
    !-/*5;
    5 < 10 > 5;
    if (5 != 10) { return true } else { return false };
    "foo bar"
    [1, 2];
    {"key": 5 == 5}
  "#};

  let kinds: Vec<TokenKind> = tokenise(source).map(|token| token.kind).collect();
  let expected = [
    // let five = 5;
    TokenKind::Let,
    TokenKind::Identifier,
    TokenKind::Assign,
    TokenKind::Integer,
    TokenKind::Semicolon,
    // let add = fn(x, y) { x + y; };
    TokenKind::Let,
    TokenKind::Identifier,
    TokenKind::Assign,
    TokenKind::Function,
    TokenKind::LeftParen,
    TokenKind::Identifier,
    TokenKind::Comma,
    TokenKind::Identifier,
    TokenKind::RightParen,
    TokenKind::LeftCurly,
    TokenKind::Identifier,
    TokenKind::Plus,
    TokenKind::Identifier,
    TokenKind::Semicolon,
    TokenKind::RightCurly,
    TokenKind::Semicolon,
    // !-/*5;
    TokenKind::Bang,
    TokenKind::Minus,
    TokenKind::Slash,
    TokenKind::Star,
    TokenKind::Integer,
    TokenKind::Semicolon,
    // 5 < 10 > 5;
    TokenKind::Integer,
    TokenKind::Less,
    TokenKind::Integer,
    TokenKind::Greater,
    TokenKind::Integer,
    TokenKind::Semicolon,
    // if (5 != 10) { return true } else { return false };
    TokenKind::If,
    TokenKind::LeftParen,
    TokenKind::Integer,
    TokenKind::NotEqual,
    TokenKind::Integer,
    TokenKind::RightParen,
    TokenKind::LeftCurly,
    TokenKind::Return,
    TokenKind::True,
    TokenKind::RightCurly,
    TokenKind::Else,
    TokenKind::LeftCurly,
    TokenKind::Return,
    TokenKind::False,
    TokenKind::RightCurly,
    TokenKind::Semicolon,
    // "foo bar"
    TokenKind::String,
    // [1, 2];
    TokenKind::LeftSquare,
    TokenKind::Integer,
    TokenKind::Comma,
    TokenKind::Integer,
    TokenKind::RightSquare,
    TokenKind::Semicolon,
    // {"key": 5 == 5}
    TokenKind::LeftCurly,
    TokenKind::String,
    TokenKind::Colon,
    TokenKind::Integer,
    TokenKind::Equal,
    TokenKind::Integer,
    TokenKind::RightCurly,
  ];

  assert_eq!(kinds, expected);
}

#[test]
fn tokenises_string_contents_without_quotes() {
  let tokens: Vec<_> = tokenise(r#""foo bar""#).collect();

  assert_eq!(tokens.len(), 1);
  assert_eq!(tokens[0].kind, TokenKind::String);
  assert_eq!(tokens[0].literal, "foo bar");
}

#[test]
fn tokenises_unknown_characters_as_illegal() {
  let kinds: Vec<TokenKind> = tokenise("5 @ 5").map(|token| token.kind).collect();

  assert_eq!(
    kinds,
    [TokenKind::Integer, TokenKind::Illegal, TokenKind::Integer]
  );
}

#[test]
fn parses_operator_precedence() {
  let cases = [
    ("-a * b", "((-a) * b)"),
    ("!-a", "(!(-a))"),
    ("a + b + c", "((a + b) + c)"),
    ("a + b - c", "((a + b) - c)"),
    ("a * b * c", "((a * b) * c)"),
    ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
    ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
    ("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))"),
    ("true != false", "(true != false)"),
    ("(5 + 5) * 2", "((5 + 5) * 2)"),
    ("-(5 + 5)", "(-(5 + 5))"),
    ("!(true == true)", "(!(true == true))"),
    ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
    ("add(a + b + c * d / f + g)", "add((((a + b) + ((c * d) / f)) + g))"),
    ("a * [1, 2, 3, 4][b * c] * d", "((a * ([1, 2, 3, 4][(b * c)])) * d)"),
    ("add(a * b[2], b[1], 2 * [1, 2][1])", "add((a * (b[2])), (b[1]), (2 * ([1, 2][1])))"),
  ];

  for (source, expected) in cases {
    assert_eq!(parsed_to_string(source), expected, "parsing {source}");
  }
}

#[test]
fn parses_let_statements() {
  assert_eq!(parsed_to_string("let x = 5;"), "let x = 5;");
  assert_eq!(parsed_to_string("let y = true"), "let y = true;");
  assert_eq!(parsed_to_string("let z = y;"), "let z = y;");
}

#[test]
fn parses_return_statements() {
  assert_eq!(parsed_to_string("return 5;"), "return 5;");
  assert_eq!(parsed_to_string("return x + y"), "return (x + y);");
}

#[test]
fn parses_if_expressions() {
  assert_eq!(parsed_to_string("if (x < y) { x }"), "if(x < y) x");
  assert_eq!(
    parsed_to_string("if (x < y) { x } else { y }"),
    "if(x < y) xelse y"
  );
}

#[test]
fn parses_function_literals() {
  assert_eq!(parsed_to_string("fn() {}"), "fn() ");
  assert_eq!(parsed_to_string("fn(x) { x }"), "fn(x) x");
  assert_eq!(parsed_to_string("fn(x, y) { x + y }"), "fn(x, y) (x + y)");
}

#[test]
fn parses_hash_literals() {
  assert_eq!(parsed_to_string("{}"), "{}");
  assert_eq!(
    parsed_to_string(r#"{"one": 1, "two": 2}"#),
    "{one: 1, two: 2}"
  );
  assert_eq!(
    parsed_to_string(r#"{"sum": 1 + 2}"#),
    "{sum: (1 + 2)}"
  );
}

#[test]
fn let_bound_functions_know_their_name() {
  let ast = parse("let myFunction = fn() { };").unwrap();

  let Statement::Let(let_statement) = &ast.statements[0] else {
    panic!("expected let statement");
  };
  let Expression::Function(function) = &let_statement.value else {
    panic!("expected function literal");
  };

  assert_eq!(function.name.as_deref(), Some("myFunction"));
}

#[test]
fn anonymous_functions_have_no_name() {
  let ast = parse("fn() { };").unwrap();

  let Statement::Expression(statement) = &ast.statements[0] else {
    panic!("expected expression statement");
  };
  let Expression::Function(function) = &statement.expression else {
    panic!("expected function literal");
  };

  assert_eq!(function.name, None);
}

#[test]
fn reports_unexpected_tokens() {
  let error = parse("let = 5;").unwrap_err();
  assert_eq!(
    error,
    ParseError::UnexpectedToken {
      expected: TokenKind::Identifier,
      got: TokenKind::Assign,
    }
  );
  assert_eq!(
    error.message(),
    "expected next token to be Identifier, got = instead"
  );

  let error = parse("let x 5;").unwrap_err();
  assert_eq!(
    error,
    ParseError::UnexpectedToken {
      expected: TokenKind::Assign,
      got: TokenKind::Integer,
    }
  );
}

#[test]
fn reports_missing_expressions() {
  let error = parse("5 +").unwrap_err();
  assert_eq!(error, ParseError::NoPrefixRule(TokenKind::EndOfFile));

  let error = parse("} 5").unwrap_err();
  assert_eq!(error, ParseError::NoPrefixRule(TokenKind::RightCurly));
}

#[test]
fn reports_integers_which_overflow() {
  let error = parse("92233720368547758089").unwrap_err();
  assert_eq!(
    error,
    ParseError::InvalidInteger("92233720368547758089".into())
  );
}

#[test]
fn reports_unterminated_blocks() {
  let error = parse("if (true) { 5").unwrap_err();
  assert_eq!(
    error,
    ParseError::UnexpectedToken {
      expected: TokenKind::RightCurly,
      got: TokenKind::EndOfFile,
    }
  );
}
