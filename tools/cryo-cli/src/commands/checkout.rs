//! Checkout command.

use std::time::Duration;

use anyhow::{bail, Result};
use chrono::Utc;
use cryo_commerce::checkout::{Address, CheckoutForm, Order};
use cryo_commerce::CommerceError;
use dialoguer::{Confirm, Input};

use super::cart::print_breakdown;
use super::CheckoutArgs;
use crate::context::Context;
use crate::output::status_badge;

/// Run the checkout command.
pub async fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let mut carts = ctx.cart_store()?;
    let mut checkout = ctx.checkout_store()?;
    let policy = ctx.pricing()?;

    if carts.cart().is_empty() {
        bail!("Your cart is empty. Add products with `cryo cart add <id>` first.");
    }

    let interactive = args.interactive && !ctx.output.is_json();
    let mut form = CheckoutForm::from_draft(checkout.draft());
    apply_args(&mut form, args);

    if interactive {
        prompt_missing(&mut form)?;
    }

    if let Err(errors) = form.validate() {
        // Keep what was typed so the next attempt starts from it.
        checkout.set_customer_info(form.customer.clone())?;
        checkout.set_shipping_address(form.shipping_address.clone())?;
        if let Some(ref billing) = form.billing_address {
            checkout.set_billing_address(billing.clone())?;
        }
        return Err(CommerceError::Validation(errors).into());
    }

    print_breakdown(&carts.pricing(&policy)?, carts.total_items(), ctx);

    let delay = ctx.config.simulation.checkout_delay_ms;
    let spinner = ctx.output.spinner("Processing order...");
    tokio::time::sleep(Duration::from_millis(delay)).await;
    let placed = cryo_store::submit_checkout(&mut carts, &mut checkout, &form, &policy, Utc::now());
    spinner.finish_and_clear();

    let order = placed?;
    print_order(&order, ctx);
    Ok(())
}

/// Overlay command-line values on the pre-filled form.
pub fn apply_args(form: &mut CheckoutForm, args: CheckoutArgs) {
    set(&mut form.customer.first_name, args.first_name);
    set(&mut form.customer.last_name, args.last_name);
    set(&mut form.customer.email, args.email);
    set(&mut form.customer.phone, args.phone);
    if let Some(company) = args.company {
        form.customer.company = Some(company).filter(|c| !c.trim().is_empty());
    }

    let shipping = &mut form.shipping_address;
    set(&mut shipping.street, args.street);
    set(&mut shipping.city, args.city);
    set(&mut shipping.state, args.province);
    set(&mut shipping.zip_code, args.zip);
    set(&mut shipping.country, args.country);

    let billing_given = [
        &args.billing_street,
        &args.billing_city,
        &args.billing_state,
        &args.billing_zip,
        &args.billing_country,
    ]
    .iter()
    .any(|v| v.is_some());

    if args.separate_billing || billing_given {
        form.same_as_shipping = false;
        let billing = form.billing_address.get_or_insert_with(Address::default);
        set(&mut billing.street, args.billing_street);
        set(&mut billing.city, args.billing_city);
        set(&mut billing.state, args.billing_state);
        set(&mut billing.zip_code, args.billing_zip);
        set(&mut billing.country, args.billing_country);
    }

    form.accept_terms = args.accept_terms;
}

fn set(field: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *field = value;
    }
}

fn prompt_missing(form: &mut CheckoutForm) -> Result<()> {
    let customer = &mut form.customer;
    prompt("First name", &mut customer.first_name)?;
    prompt("Last name", &mut customer.last_name)?;
    prompt("Email", &mut customer.email)?;
    prompt("Phone", &mut customer.phone)?;

    prompt_address("Shipping", &mut form.shipping_address)?;
    if let Some(ref mut billing) = form.billing_address {
        prompt_address("Billing", billing)?;
    }

    if !form.accept_terms {
        form.accept_terms = Confirm::new()
            .with_prompt("Accept the terms and conditions?")
            .default(false)
            .interact()?;
    }
    Ok(())
}

fn prompt_address(kind: &str, address: &mut Address) -> Result<()> {
    prompt(&format!("{kind} street"), &mut address.street)?;
    prompt(&format!("{kind} city"), &mut address.city)?;
    prompt(&format!("{kind} state"), &mut address.state)?;
    prompt(&format!("{kind} ZIP code"), &mut address.zip_code)?;
    prompt(&format!("{kind} country"), &mut address.country)
}

fn prompt(label: &str, field: &mut String) -> Result<()> {
    if !field.trim().is_empty() {
        return Ok(());
    }
    *field = Input::<String>::new()
        .with_prompt(label)
        .allow_empty(true)
        .interact_text()?;
    Ok(())
}

fn print_order(order: &Order, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(order);
        return;
    }

    ctx.output.success(&format!("Order {} placed", order.order_number));
    ctx.output.kv("status", &status_badge(order.status));
    ctx.output.kv("customer", &order.customer.full_name());
    ctx.output.kv("email", &order.customer.email);
    ctx.output.kv("ship to", &order.shipping_address.one_line());
    if order.billing_address != order.shipping_address {
        ctx.output.kv("bill to", &order.billing_address.one_line());
    }
    ctx.output.kv("items", &order.item_count().to_string());
    ctx.output.kv("total", &order.total().display());
    ctx.output.info("A confirmation email is on its way. Your cart has been cleared.");
}
