//! The checkout form and the draft kept between visits.

use crate::checkout::{Address, CustomerInfo};
use crate::validation::ValidationErrors;
use serde::{Deserialize, Serialize};

/// Everything the customer submits at checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckoutForm {
    pub customer: CustomerInfo,
    pub shipping_address: Address,
    /// Bill to the shipping address.
    pub same_as_shipping: bool,
    /// Required when `same_as_shipping` is off.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,
    pub accept_terms: bool,
}

impl Default for CheckoutForm {
    fn default() -> Self {
        Self {
            customer: CustomerInfo::default(),
            shipping_address: Address::default(),
            same_as_shipping: true,
            billing_address: None,
            accept_terms: false,
        }
    }
}

impl CheckoutForm {
    /// Validate every section. Address fields are prefixed with
    /// `shipping_` or `billing_`.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = self.customer.validate();
        errors.merge_prefixed("shipping_", self.shipping_address.validate());

        if !self.same_as_shipping {
            match &self.billing_address {
                Some(billing) => errors.merge_prefixed("billing_", billing.validate()),
                None => errors.add("billing_address", "Billing address is required"),
            }
        }

        if !self.accept_terms {
            errors.add("accept_terms", "You must accept the terms and conditions");
        }

        errors.into_result()
    }

    /// The address the order is billed to.
    pub fn effective_billing(&self) -> &Address {
        match (&self.billing_address, self.same_as_shipping) {
            (Some(billing), false) => billing,
            _ => &self.shipping_address,
        }
    }

    /// Pre-fill a form from a saved draft.
    pub fn from_draft(draft: &CheckoutDraft) -> Self {
        let mut form = Self::default();
        if let Some(customer) = &draft.customer_info {
            form.customer = customer.clone();
        }
        if let Some(shipping) = &draft.shipping_address {
            form.shipping_address = shipping.clone();
        }
        if let Some(billing) = &draft.billing_address {
            form.same_as_shipping = Some(billing) == draft.shipping_address.as_ref();
            if !form.same_as_shipping {
                form.billing_address = Some(billing.clone());
            }
        }
        form
    }
}

/// Customer details remembered from the last checkout.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckoutDraft {
    #[serde(default)]
    pub customer_info: Option<CustomerInfo>,
    #[serde(default)]
    pub shipping_address: Option<Address>,
    #[serde(default)]
    pub billing_address: Option<Address>,
}

impl CheckoutDraft {
    /// Record what was submitted. Billing is stored resolved.
    pub fn from_form(form: &CheckoutForm) -> Self {
        Self {
            customer_info: Some(form.customer.clone()),
            shipping_address: Some(form.shipping_address.clone()),
            billing_address: Some(form.effective_billing().clone()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.customer_info.is_none() && self.shipping_address.is_none() && self.billing_address.is_none()
    }
}
