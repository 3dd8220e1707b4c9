//! Input kinds understood by the form renderer

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,
    TextArea,
    /// Decimal amount with a currency prefix.
    Money,
    Integer,
    /// Foreign key picked from a list of options supplied by the page.
    Reference,
    /// Active / inactive flag.
    Status,
    /// File picker with preview; the value is the stored image reference.
    Image,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::TextArea => "textarea",
            Self::Money => "money",
            Self::Integer => "integer",
            Self::Reference => "reference",
            Self::Status => "status",
            Self::Image => "image",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Money | Self::Integer)
    }

    /// `type` attribute of the rendered `<input>`.
    pub fn input_type(&self) -> &'static str {
        if self.is_numeric() {
            "number"
        } else {
            "text"
        }
    }
}
