//! Form fields for the submission view

use super::AliasRequest;
use strum::{Display, EnumIter, IntoEnumIterator};

/// Input fields, in tab order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum FormField {
    #[default]
    #[strum(to_string = "Email")]
    Email,
    #[strum(to_string = "Name")]
    Name,
}

impl FormField {
    /// Example value shown while the field is empty
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Email => "santa@northpole.com",
            Self::Name => "Kris Kringle",
        }
    }

    /// Next field in tab order, wrapping around
    pub fn next(self) -> Self {
        let fields: Vec<Self> = Self::iter().collect();
        let pos = fields.iter().position(|f| *f == self).unwrap_or(0);
        fields[(pos + 1) % fields.len()]
    }

    /// Previous field in tab order, wrapping around
    pub fn previous(self) -> Self {
        let fields: Vec<Self> = Self::iter().collect();
        let pos = fields.iter().position(|f| *f == self).unwrap_or(0);
        fields[(pos + fields.len() - 1) % fields.len()]
    }
}

/// Values typed into the form and which field has focus
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub email: String,
    pub name: String,
    pub focus: FormField,
}

impl FormFields {
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            focus: FormField::default(),
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Email => &self.email,
            FormField::Name => &self.name,
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Email => &mut self.email,
            FormField::Name => &mut self.name,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.focused_mut().push(c);
    }

    pub fn backspace(&mut self) {
        self.focused_mut().pop();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Build the request body, or name the first missing field.
    ///
    /// Only presence is checked; values are trimmed before sending.
    pub fn to_request(&self) -> Result<AliasRequest, String> {
        for field in FormField::iter() {
            if self.value(field).trim().is_empty() {
                return Err(format!("{} is required", field));
            }
        }

        Ok(AliasRequest {
            email: self.email.trim().to_string(),
            name: self.name.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycles() {
        assert_eq!(FormField::Email.next(), FormField::Name);
        assert_eq!(FormField::Name.next(), FormField::Email);
        assert_eq!(FormField::Email.previous(), FormField::Name);
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut fields = FormFields::default();
        fields.insert_char('a');
        fields.focus_next();
        fields.insert_char('b');
        fields.insert_char('c');
        fields.backspace();
        assert_eq!(fields.email, "a");
        assert_eq!(fields.name, "b");
    }

    #[test]
    fn test_missing_fields_named_in_order() {
        let fields = FormFields::default();
        assert_eq!(fields.to_request().unwrap_err(), "Email is required");

        let fields = FormFields::new("santa@northpole.com", "   ");
        assert_eq!(fields.to_request().unwrap_err(), "Name is required");
    }

    #[test]
    fn test_request_is_trimmed() {
        let fields = FormFields::new(" santa@northpole.com ", "Kris Kringle\t");
        let request = fields.to_request().unwrap();
        assert_eq!(request.email, "santa@northpole.com");
        assert_eq!(request.name, "Kris Kringle");
    }
}
