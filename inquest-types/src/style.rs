use crossterm::style::Color;

/// The semantic role of a rendered text segment.
///
/// Roles decouple what a segment *is* from how it looks; a [`Theme`]
/// resolves each role to a concrete style at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// The `[?] ` marker prepended to the question.
    QuestionMark,
    /// The question text itself.
    Question,
    /// Key hint snippets like `(Use arrow keys)`.
    Instruction,
    /// The `❯ ` cursor in list-like forms.
    Pointer,
    /// The `○ `/`● ` selection marker in checkbox forms.
    Selector,
    /// Plain choice or input text.
    Text,
    /// The echoed answer once committed.
    Answer,
    /// A validation error message.
    Error,
}

/// One styled run of text within a rendered line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub role: Role,
    pub text: String,
}

impl Segment {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }
}

/// One rendered line, as a list of styled segments.
pub type Line = Vec<Segment>;

/// The concrete style a theme assigns to a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: bool,
}

impl TextStyle {
    pub const fn plain() -> Self {
        Self {
            fg: None,
            bg: None,
            bold: false,
        }
    }

    pub const fn fg(color: Color) -> Self {
        Self {
            fg: Some(color),
            bg: None,
            bold: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn on(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }
}

/// Visual theme for a form: one style per segment role.
///
/// The engine treats themes as opaque; only display backends interpret
/// them. The default palette follows the classic inquirer look.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub question_mark: TextStyle,
    pub question: TextStyle,
    pub instruction: TextStyle,
    pub pointer: TextStyle,
    pub selector: TextStyle,
    pub text: TextStyle,
    pub answer: TextStyle,
    pub error: TextStyle,
}

const ORANGE: Color = Color::Rgb {
    r: 0xFF,
    g: 0x9D,
    b: 0x00,
};

const GREEN: Color = Color::Rgb {
    r: 0xA4,
    g: 0xF7,
    b: 0x43,
};

impl Default for Theme {
    fn default() -> Self {
        Self {
            question_mark: TextStyle::fg(GREEN).bold(),
            question: TextStyle::plain().bold(),
            instruction: TextStyle::plain(),
            pointer: TextStyle::fg(ORANGE).bold(),
            selector: TextStyle::fg(ORANGE),
            text: TextStyle::plain(),
            answer: TextStyle::fg(ORANGE).bold(),
            error: TextStyle::fg(Color::Rgb {
                r: 0xE6,
                g: 0xE5,
                b: 0xE6,
            })
            .on(Color::Rgb {
                r: 0x5F,
                g: 0x00,
                b: 0x00,
            }),
        }
    }
}

impl Theme {
    /// Resolve the style for a given role.
    pub fn style(&self, role: Role) -> TextStyle {
        match role {
            Role::QuestionMark => self.question_mark,
            Role::Question => self.question,
            Role::Instruction => self.instruction,
            Role::Pointer => self.pointer,
            Role::Selector => self.selector,
            Role::Text => self.text,
            Role::Answer => self.answer,
            Role::Error => self.error,
        }
    }
}
