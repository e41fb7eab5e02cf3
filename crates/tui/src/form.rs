use api_types::savings::{SavingMethod, SavingsNew};
use engine::Money;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormField {
    #[default]
    Amount,
    Description,
    Method,
}

/// The add-saving form.
#[derive(Debug, Default)]
pub struct FormState {
    pub amount: String,
    pub description: String,
    pub method: SavingMethod,
    pub focus: FormField,
    /// Inline feedback shown under the form.
    pub hint: Option<String>,
}

impl FormState {
    pub fn next_field(&mut self) {
        self.focus = match self.focus {
            FormField::Amount => FormField::Description,
            FormField::Description => FormField::Method,
            FormField::Method => FormField::Amount,
        };
    }

    pub fn prev_field(&mut self) {
        self.focus = match self.focus {
            FormField::Amount => FormField::Method,
            FormField::Description => FormField::Amount,
            FormField::Method => FormField::Description,
        };
    }

    pub fn push(&mut self, ch: char) {
        match self.focus {
            FormField::Amount => self.amount.push(ch),
            FormField::Description => self.description.push(ch),
            FormField::Method => {}
        }
    }

    pub fn pop(&mut self) {
        match self.focus {
            FormField::Amount => {
                self.amount.pop();
            }
            FormField::Description => {
                self.description.pop();
            }
            FormField::Method => {}
        }
    }

    /// Clears the text inputs; the selected method stays.
    pub fn clear_inputs(&mut self) {
        self.amount.clear();
        self.description.clear();
    }

    /// Builds the request body, or the message to show when the amount is not
    /// a positive number.
    ///
    /// An empty description is replaced by the method label.
    pub fn to_request(&self) -> Result<SavingsNew, String> {
        let amount = parse_amount(&self.amount)?;
        let description = match self.description.trim() {
            "" => self.method.label().to_string(),
            text => text.to_string(),
        };

        Ok(SavingsNew {
            amount: Some(serde_json::json!(amount.to_major())),
            method: Some(self.method.label().to_string()),
            description: Some(description),
        })
    }
}

pub fn parse_amount(input: &str) -> Result<Money, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Enter an amount.".to_string());
    }

    let amount = trimmed
        .parse::<Money>()
        .map_err(|_| "Amount must be a number with at most 2 decimals.".to_string())?;
    if !amount.is_positive() {
        return Err("Amount must be greater than 0.".to_string());
    }

    Ok(amount)
}
