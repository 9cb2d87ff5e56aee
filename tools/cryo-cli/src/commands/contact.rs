//! Contact form command.

use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use cryo_commerce::contact::{submit_contact, ContactCategory, ContactRequest};
use cryo_commerce::CommerceError;

use super::ContactArgs;
use crate::context::Context;

/// Run the contact command.
pub async fn run(args: ContactArgs, ctx: &Context) -> Result<()> {
    let request = request_from_args(args);

    // Validate before the simulated send.
    request.validate().map_err(CommerceError::from)?;

    let spinner = ctx.output.spinner("Sending message...");
    tokio::time::sleep(Duration::from_millis(ctx.config.simulation.contact_delay_ms)).await;
    let sent = submit_contact(&request, Utc::now());
    spinner.finish_and_clear();

    let receipt = sent?;

    if ctx.output.is_json() {
        ctx.output.json(&receipt);
        return Ok(());
    }

    ctx.output.success("Message sent! We'll get back to you within 24 hours.");
    ctx.output.kv("reference", receipt.reference.as_str());
    ctx.output.kv("category", receipt.category.display_name());
    ctx.output.kv("subject", &receipt.subject);
    Ok(())
}

pub fn request_from_args(args: ContactArgs) -> ContactRequest {
    ContactRequest {
        name: args.name.unwrap_or_default(),
        email: args.email.unwrap_or_default(),
        company: args.company.filter(|c| !c.trim().is_empty()),
        phone: args.phone.unwrap_or_default(),
        subject: args.subject.unwrap_or_default(),
        category: args.category.unwrap_or_default(),
        message: args.message.unwrap_or_default(),
    }
}

/// Category tags with their labels, for help output.
pub fn category_help() -> String {
    ContactCategory::ALL
        .iter()
        .map(|c| format!("{} ({})", c.as_str(), c.display_name()))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_all_reported() {
        let request = request_from_args(ContactArgs {
            name: Some("Jo".to_string()),
            ..Default::default()
        });
        let errors = request.validate().unwrap_err();
        assert!(errors.get("name").is_none());
        for field in ["email", "phone", "subject", "category", "message"] {
            assert!(errors.get(field).is_some(), "{field} should fail");
        }
    }

    #[test]
    fn test_blank_company_dropped() {
        let request = request_from_args(ContactArgs {
            company: Some("  ".to_string()),
            ..Default::default()
        });
        assert_eq!(request.company, None);
    }

    #[test]
    fn test_category_help_lists_every_tag() {
        let help = category_help();
        for category in ContactCategory::ALL {
            assert!(help.contains(category.as_str()));
        }
    }
}
