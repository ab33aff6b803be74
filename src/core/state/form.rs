//! Create-form state
//!
//! Panels with an "add" action open a modal form. Field layouts are
//! fixed per panel; validation turns the buffers into a typed
//! `CreateRequest` or an error message rendered inside the form.

use serde::{Deserialize, Serialize};

use crate::{core::state::PanelKind, domain::requests::CreateRequest};

/// How a field's buffer is validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    Text,
    /// Whole number, parsed as u32.
    Number,
    /// Decimal number, parsed as f64.
    Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub label: &'static str,
    pub value: String,
    pub kind: FieldKind,
    pub required: bool,
}

impl FormField {
    fn new(label: &'static str, kind: FieldKind, required: bool) -> Self {
        Self {
            label,
            value: String::new(),
            kind,
            required,
        }
    }

    fn parse_number(&self) -> Result<u32, String> {
        self.value
            .trim()
            .parse()
            .map_err(|_| format!("{} must be a whole number", self.label))
    }

    fn parse_decimal(&self) -> Result<f64, String> {
        self.value
            .trim()
            .parse()
            .map_err(|_| format!("{} must be a number", self.label))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub panel: PanelKind,
    pub fields: Vec<FormField>,
    pub focused: usize,
    /// Validation or submit error shown inside the form.
    pub error: Option<String>,
}

impl FormState {
    /// Field layout for the panel's create form, or `None` when the
    /// panel has no form.
    pub fn for_panel(panel: PanelKind) -> Option<Self> {
        let fields = match panel {
            PanelKind::Items => vec![
                FormField::new("Name", FieldKind::Text, true),
                FormField::new("Description", FieldKind::Text, false),
                FormField::new("Price", FieldKind::Decimal, true),
                FormField::new("Category", FieldKind::Text, true),
            ],
            PanelKind::Stock => vec![
                FormField::new("Name", FieldKind::Text, true),
                FormField::new("Quantity", FieldKind::Number, true),
                FormField::new("Unit", FieldKind::Text, true),
                FormField::new("Reorder point", FieldKind::Number, true),
            ],
            PanelKind::Waiters => vec![FormField::new("Name", FieldKind::Text, true)],
            PanelKind::Taxes => vec![
                FormField::new("Name", FieldKind::Text, true),
                FormField::new("Rate", FieldKind::Decimal, true),
            ],
            PanelKind::Inventory => vec![
                FormField::new("Name", FieldKind::Text, true),
                FormField::new("SKU", FieldKind::Text, true),
                FormField::new("Price", FieldKind::Decimal, true),
                FormField::new("Stock quantity", FieldKind::Number, true),
                FormField::new("Reorder level", FieldKind::Number, true),
            ],
            _ => return None,
        };

        Some(Self {
            panel,
            fields,
            focused: 0,
            error: None,
        })
    }

    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % self.fields.len();
    }

    pub fn focus_prev(&mut self) {
        self.focused = (self.focused + self.fields.len() - 1) % self.fields.len();
    }

    pub fn push_char(&mut self, c: char) {
        self.error = None;
        if let Some(field) = self.fields.get_mut(self.focused) {
            field.value.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.error = None;
        if let Some(field) = self.fields.get_mut(self.focused) {
            field.value.pop();
        }
    }

    fn text(&self, index: usize) -> Result<String, String> {
        let field = &self.fields[index];
        let value = field.value.trim().to_string();
        if field.required && value.is_empty() {
            return Err(format!("{} is required", field.label));
        }
        Ok(value)
    }

    /// Validate every field and build the create request.
    pub fn validate(&self) -> Result<CreateRequest, String> {
        for field in &self.fields {
            let value = field.value.trim();
            if value.is_empty() {
                if field.required {
                    return Err(format!("{} is required", field.label));
                }
                continue;
            }
            match field.kind {
                FieldKind::Text => {}
                FieldKind::Number => {
                    field.parse_number()?;
                }
                FieldKind::Decimal => {
                    field.parse_decimal()?;
                }
            }
        }

        match self.panel {
            PanelKind::Items => Ok(CreateRequest::Item {
                name: self.text(0)?,
                description: self.text(1)?,
                price: self.fields[2].parse_decimal()?,
                category: self.text(3)?,
            }),
            PanelKind::Stock => Ok(CreateRequest::StockItem {
                name: self.text(0)?,
                quantity: self.fields[1].parse_number()?,
                unit: self.text(2)?,
                reorder_point: self.fields[3].parse_number()?,
            }),
            PanelKind::Waiters => Ok(CreateRequest::Waiter {
                name: self.text(0)?,
            }),
            PanelKind::Taxes => Ok(CreateRequest::TaxRate {
                name: self.text(0)?,
                rate: self.fields[1].parse_decimal()?,
            }),
            PanelKind::Inventory => Ok(CreateRequest::Product {
                name: self.text(0)?,
                sku: self.text(1)?,
                price: self.fields[2].parse_decimal()?,
                stock_quantity: self.fields[3].parse_number()?,
                reorder_level: self.fields[4].parse_number()?,
            }),
            panel => Err(format!("{panel} panel has no create form")),
        }
    }
}
