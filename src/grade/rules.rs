#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Borrowed view over a submission that answers the catalog's containment
/// questions.
///
/// Fragments are written with single quotes; the double-quoted spelling is
/// derived by swapping each `'` for `"`, so both styles match. Matching is
/// otherwise case- and whitespace-sensitive, with no normalization of
/// indentation or comments.
#[derive(Debug, Clone, Copy)]
pub struct Submission<'a> {
    /// The submitted text.
    code: &'a str,
}

impl<'a> Submission<'a> {
    /// Wraps a submission for matching.
    pub fn new(code: &'a str) -> Self {
        Self { code }
    }

    /// Returns the submitted text.
    pub fn code(&self) -> &'a str {
        self.code
    }

    /// True if `fragment` appears literally, in either quote style.
    pub fn contains(&self, fragment: &str) -> bool {
        self.code.contains(fragment) || self.code.contains(&fragment.replace('\'', "\""))
    }

    /// True if the code assigns the string `value` to `var`.
    pub fn assigns(&self, var: &str, value: &str) -> bool {
        self.contains(&format!("{var} = '{value}'"))
    }

    /// True if the code tests `var` for equality with the string `value`.
    pub fn tests(&self, var: &str, value: &str) -> bool {
        self.contains(&format!("if {var} == '{value}'"))
    }

    /// True if the code prints the exact literal `text`.
    pub fn prints(&self, text: &str) -> bool {
        self.contains(&format!("print('{text}')"))
    }

    /// True if an `else:` block is present.
    pub fn has_else(&self) -> bool {
        self.code.contains("else:")
    }

    /// True if `text` appears verbatim, with no quote tolerance.
    pub fn mentions(&self, text: &str) -> bool {
        self.code.contains(text)
    }
}
