//! Token kinds produced by the scanner.

/// Every token the scanner can produce.
///
/// Keywords that the parser rejects (`class`, `import`, ...) still get their own
/// kind so the parser can report them as unsupported rather than as stray
/// identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    Unknown,
    EndOfFileToken,

    // Literals
    NumericLiteral,
    BigIntLiteral,
    StringLiteral,
    NoSubstitutionTemplateLiteral,
    TemplateHead,
    TemplateMiddle,
    TemplateTail,

    Identifier,

    // Punctuation
    OpenBraceToken,
    CloseBraceToken,
    OpenParenToken,
    CloseParenToken,
    OpenBracketToken,
    CloseBracketToken,
    DotToken,
    DotDotDotToken,
    SemicolonToken,
    CommaToken,
    QuestionDotToken,
    LessThanToken,
    GreaterThanToken,
    LessThanEqualsToken,
    GreaterThanEqualsToken,
    EqualsEqualsToken,
    ExclamationEqualsToken,
    EqualsEqualsEqualsToken,
    ExclamationEqualsEqualsToken,
    EqualsGreaterThanToken,
    PlusToken,
    MinusToken,
    AsteriskToken,
    AsteriskAsteriskToken,
    SlashToken,
    PercentToken,
    PlusPlusToken,
    MinusMinusToken,
    LessThanLessThanToken,
    GreaterThanGreaterThanToken,
    GreaterThanGreaterThanGreaterThanToken,
    AmpersandToken,
    BarToken,
    CaretToken,
    ExclamationToken,
    TildeToken,
    AmpersandAmpersandToken,
    BarBarToken,
    QuestionToken,
    QuestionQuestionToken,
    ColonToken,
    AtToken,
    HashToken,

    // Assignments
    EqualsToken,
    PlusEqualsToken,
    MinusEqualsToken,
    AsteriskEqualsToken,
    AsteriskAsteriskEqualsToken,
    SlashEqualsToken,
    PercentEqualsToken,
    LessThanLessThanEqualsToken,
    GreaterThanGreaterThanEqualsToken,
    GreaterThanGreaterThanGreaterThanEqualsToken,
    AmpersandEqualsToken,
    BarEqualsToken,
    CaretEqualsToken,
    AmpersandAmpersandEqualsToken,
    BarBarEqualsToken,
    QuestionQuestionEqualsToken,

    // Reserved words
    BreakKeyword,
    CaseKeyword,
    CatchKeyword,
    ClassKeyword,
    ConstKeyword,
    ContinueKeyword,
    DebuggerKeyword,
    DefaultKeyword,
    DeleteKeyword,
    DoKeyword,
    ElseKeyword,
    EnumKeyword,
    ExportKeyword,
    ExtendsKeyword,
    FalseKeyword,
    FinallyKeyword,
    ForKeyword,
    FunctionKeyword,
    IfKeyword,
    ImportKeyword,
    InKeyword,
    InstanceOfKeyword,
    LetKeyword,
    NewKeyword,
    NullKeyword,
    ReturnKeyword,
    SuperKeyword,
    SwitchKeyword,
    ThisKeyword,
    ThrowKeyword,
    TrueKeyword,
    TryKeyword,
    TypeOfKeyword,
    VarKeyword,
    VoidKeyword,
    WhileKeyword,
    WithKeyword,
    YieldKeyword,
}

impl SyntaxKind {
    pub const fn is_keyword(self) -> bool {
        (self as u16) >= (Self::BreakKeyword as u16)
    }

    pub const fn is_assignment_operator(self) -> bool {
        (self as u16) >= (Self::EqualsToken as u16)
            && (self as u16) <= (Self::QuestionQuestionEqualsToken as u16)
    }

    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            Self::NumericLiteral
                | Self::BigIntLiteral
                | Self::StringLiteral
                | Self::NoSubstitutionTemplateLiteral
        )
    }

    /// Source text of punctuation and keyword tokens, used in "'x' expected" messages.
    pub const fn text(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::EndOfFileToken => "end of file",
            Self::NumericLiteral | Self::BigIntLiteral => "number",
            Self::StringLiteral => "string",
            Self::NoSubstitutionTemplateLiteral
            | Self::TemplateHead
            | Self::TemplateMiddle
            | Self::TemplateTail => "template literal",
            Self::Identifier => "identifier",
            Self::OpenBraceToken => "{",
            Self::CloseBraceToken => "}",
            Self::OpenParenToken => "(",
            Self::CloseParenToken => ")",
            Self::OpenBracketToken => "[",
            Self::CloseBracketToken => "]",
            Self::DotToken => ".",
            Self::DotDotDotToken => "...",
            Self::SemicolonToken => ";",
            Self::CommaToken => ",",
            Self::QuestionDotToken => "?.",
            Self::LessThanToken => "<",
            Self::GreaterThanToken => ">",
            Self::LessThanEqualsToken => "<=",
            Self::GreaterThanEqualsToken => ">=",
            Self::EqualsEqualsToken => "==",
            Self::ExclamationEqualsToken => "!=",
            Self::EqualsEqualsEqualsToken => "===",
            Self::ExclamationEqualsEqualsToken => "!==",
            Self::EqualsGreaterThanToken => "=>",
            Self::PlusToken => "+",
            Self::MinusToken => "-",
            Self::AsteriskToken => "*",
            Self::AsteriskAsteriskToken => "**",
            Self::SlashToken => "/",
            Self::PercentToken => "%",
            Self::PlusPlusToken => "++",
            Self::MinusMinusToken => "--",
            Self::LessThanLessThanToken => "<<",
            Self::GreaterThanGreaterThanToken => ">>",
            Self::GreaterThanGreaterThanGreaterThanToken => ">>>",
            Self::AmpersandToken => "&",
            Self::BarToken => "|",
            Self::CaretToken => "^",
            Self::ExclamationToken => "!",
            Self::TildeToken => "~",
            Self::AmpersandAmpersandToken => "&&",
            Self::BarBarToken => "||",
            Self::QuestionToken => "?",
            Self::QuestionQuestionToken => "??",
            Self::ColonToken => ":",
            Self::AtToken => "@",
            Self::HashToken => "#",
            Self::EqualsToken => "=",
            Self::PlusEqualsToken => "+=",
            Self::MinusEqualsToken => "-=",
            Self::AsteriskEqualsToken => "*=",
            Self::AsteriskAsteriskEqualsToken => "**=",
            Self::SlashEqualsToken => "/=",
            Self::PercentEqualsToken => "%=",
            Self::LessThanLessThanEqualsToken => "<<=",
            Self::GreaterThanGreaterThanEqualsToken => ">>=",
            Self::GreaterThanGreaterThanGreaterThanEqualsToken => ">>>=",
            Self::AmpersandEqualsToken => "&=",
            Self::BarEqualsToken => "|=",
            Self::CaretEqualsToken => "^=",
            Self::AmpersandAmpersandEqualsToken => "&&=",
            Self::BarBarEqualsToken => "||=",
            Self::QuestionQuestionEqualsToken => "??=",
            Self::BreakKeyword => "break",
            Self::CaseKeyword => "case",
            Self::CatchKeyword => "catch",
            Self::ClassKeyword => "class",
            Self::ConstKeyword => "const",
            Self::ContinueKeyword => "continue",
            Self::DebuggerKeyword => "debugger",
            Self::DefaultKeyword => "default",
            Self::DeleteKeyword => "delete",
            Self::DoKeyword => "do",
            Self::ElseKeyword => "else",
            Self::EnumKeyword => "enum",
            Self::ExportKeyword => "export",
            Self::ExtendsKeyword => "extends",
            Self::FalseKeyword => "false",
            Self::FinallyKeyword => "finally",
            Self::ForKeyword => "for",
            Self::FunctionKeyword => "function",
            Self::IfKeyword => "if",
            Self::ImportKeyword => "import",
            Self::InKeyword => "in",
            Self::InstanceOfKeyword => "instanceof",
            Self::LetKeyword => "let",
            Self::NewKeyword => "new",
            Self::NullKeyword => "null",
            Self::ReturnKeyword => "return",
            Self::SuperKeyword => "super",
            Self::SwitchKeyword => "switch",
            Self::ThisKeyword => "this",
            Self::ThrowKeyword => "throw",
            Self::TrueKeyword => "true",
            Self::TryKeyword => "try",
            Self::TypeOfKeyword => "typeof",
            Self::VarKeyword => "var",
            Self::VoidKeyword => "void",
            Self::WhileKeyword => "while",
            Self::WithKeyword => "with",
            Self::YieldKeyword => "yield",
        }
    }
}

/// Map identifier text to its keyword kind, if it is a reserved word.
///
/// Contextual words (`of`, `async`, `await`, `get`, `set`, `static`) stay
/// identifiers; the parser checks their text where it matters.
pub fn text_to_keyword(text: &str) -> Option<SyntaxKind> {
    let kind = match text {
        "break" => SyntaxKind::BreakKeyword,
        "case" => SyntaxKind::CaseKeyword,
        "catch" => SyntaxKind::CatchKeyword,
        "class" => SyntaxKind::ClassKeyword,
        "const" => SyntaxKind::ConstKeyword,
        "continue" => SyntaxKind::ContinueKeyword,
        "debugger" => SyntaxKind::DebuggerKeyword,
        "default" => SyntaxKind::DefaultKeyword,
        "delete" => SyntaxKind::DeleteKeyword,
        "do" => SyntaxKind::DoKeyword,
        "else" => SyntaxKind::ElseKeyword,
        "enum" => SyntaxKind::EnumKeyword,
        "export" => SyntaxKind::ExportKeyword,
        "extends" => SyntaxKind::ExtendsKeyword,
        "false" => SyntaxKind::FalseKeyword,
        "finally" => SyntaxKind::FinallyKeyword,
        "for" => SyntaxKind::ForKeyword,
        "function" => SyntaxKind::FunctionKeyword,
        "if" => SyntaxKind::IfKeyword,
        "import" => SyntaxKind::ImportKeyword,
        "in" => SyntaxKind::InKeyword,
        "instanceof" => SyntaxKind::InstanceOfKeyword,
        "let" => SyntaxKind::LetKeyword,
        "new" => SyntaxKind::NewKeyword,
        "null" => SyntaxKind::NullKeyword,
        "return" => SyntaxKind::ReturnKeyword,
        "super" => SyntaxKind::SuperKeyword,
        "switch" => SyntaxKind::SwitchKeyword,
        "this" => SyntaxKind::ThisKeyword,
        "throw" => SyntaxKind::ThrowKeyword,
        "true" => SyntaxKind::TrueKeyword,
        "try" => SyntaxKind::TryKeyword,
        "typeof" => SyntaxKind::TypeOfKeyword,
        "var" => SyntaxKind::VarKeyword,
        "void" => SyntaxKind::VoidKeyword,
        "while" => SyntaxKind::WhileKeyword,
        "with" => SyntaxKind::WithKeyword,
        "yield" => SyntaxKind::YieldKeyword,
        _ => return None,
    };
    Some(kind)
}
