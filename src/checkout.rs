//! Checkout

/// Details collected by the checkout form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShippingDetails {
    /// Recipient name
    pub name: String,

    /// Recipient email
    pub email: String,

    /// Postal address the order ships to
    pub address: String,
}

impl ShippingDetails {
    /// Collect shipping details.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            address: address.into(),
        }
    }

    /// Whether every field has non-whitespace content.
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.address]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_when_all_fields_filled() {
        let details = ShippingDetails::new("Ada", "ada@example.com", "1 Main Street");

        assert!(details.is_complete());
    }

    #[test]
    fn blank_fields_are_incomplete() {
        let missing_email = ShippingDetails::new("Ada", "  ", "1 Main Street");
        let missing_address = ShippingDetails::new("Ada", "ada@example.com", "");

        assert!(!missing_email.is_complete());
        assert!(!missing_address.is_complete());
        assert!(!ShippingDetails::default().is_complete());
    }
}
