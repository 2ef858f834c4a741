//! Launch form state.
//!
//! Name, symbol and image are collected and required, but nothing in the
//! create/mint workflow attaches them to the mint. Only the initial supply is
//! consumed, when minting.

use crate::error::ValidationError;

/// The four text fields of the launch form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenForm {
    /// Token name
    pub name: String,
    /// Ticker symbol
    pub symbol: String,
    /// Image URL
    pub image: String,
    /// Initial supply in whole tokens, as typed
    pub initial_supply: String,
}

/// Identifies a single form field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Symbol,
    Image,
    InitialSupply,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Symbol,
        FormField::Image,
        FormField::InitialSupply,
    ];

    /// Input placeholder.
    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::Name => "Token Name",
            FormField::Symbol => "Token Symbol",
            FormField::Image => "Token Image URL",
            FormField::InitialSupply => "Initial Supply",
        }
    }
}

impl TokenForm {
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        image: impl Into<String>,
        initial_supply: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            image: image.into(),
            initial_supply: initial_supply.into(),
        }
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Symbol => &self.symbol,
            FormField::Image => &self.image,
            FormField::InitialSupply => &self.initial_supply,
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Symbol => &mut self.symbol,
            FormField::Image => &mut self.image,
            FormField::InitialSupply => &mut self.initial_supply,
        }
    }

    /// Fields that are blank after trimming.
    pub fn missing_fields(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|field| self.field(*field).trim().is_empty())
            .collect()
    }

    /// Every field must be non-empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.missing_fields().is_empty() {
            Ok(())
        } else {
            Err(ValidationError::MissingFields)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_form_is_valid() {
        let form = TokenForm::new("Test", "TST", "http://x/y.png", "100");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_each_blank_field_is_reported() {
        for field in FormField::ALL {
            let mut form = TokenForm::new("Test", "TST", "http://x/y.png", "100");
            *form.field_mut(field) = "   ".to_string();
            assert_eq!(form.missing_fields(), vec![field]);
            assert_eq!(form.validate(), Err(ValidationError::MissingFields));
        }
    }

    #[test]
    fn test_default_form_is_empty() {
        let form = TokenForm::default();
        assert_eq!(form.missing_fields().len(), 4);
    }
}
