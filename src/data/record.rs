use super::error::FieldError;

/// Field delimiter used by both demo inputs.
pub const TAB: char = '\t';

// ---------------------------------------------------------------------------
// Fields – one line split on the delimiter
// ---------------------------------------------------------------------------

/// The ordered fields of one line, borrowed from it.
///
/// No field count is enforced here; asking for an index past the end gives a
/// [`FieldError::MissingField`] instead of a panic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fields<'a>(Vec<&'a str>);

impl<'a> Fields<'a> {
    pub fn get(&self, index: usize) -> Result<&'a str, FieldError> {
        self.0
            .get(index)
            .copied()
            .ok_or(FieldError::MissingField { index })
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[&'a str] {
        &self.0
    }
}

/// Split `line` into fields on `delimiter`. Empty fields are kept.
pub fn split_fields(line: &str, delimiter: char) -> Fields<'_> {
    Fields(line.split(delimiter).collect())
}
