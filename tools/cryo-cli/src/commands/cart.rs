//! Shopping cart commands.

use anyhow::Result;
use cryo_commerce::cart::PriceBreakdown;
use cryo_commerce::ids::ProductId;
use cryo_store::{CartStore, FileStore};

use super::{CartArgs, CartCommand};
use crate::context::Context;
use crate::output::truncate;

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let mut carts = ctx.cart_store()?;

    match args.command.unwrap_or(CartCommand::Show) {
        CartCommand::Show => show_cart(&carts, ctx),
        CartCommand::Add { id, qty } => {
            let product = ctx.catalog.require(&ProductId::new(id))?;
            let quantity = carts.add_item(product, qty)?;
            ctx.output.success(&format!(
                "Added {} × {} (now {} in cart)",
                qty, product.name, quantity
            ));
            show_cart(&carts, ctx)
        }
        CartCommand::Remove { id } => {
            let id = ProductId::new(id);
            if carts.remove_item(&id)? {
                ctx.output.success(&format!("Removed product {} from cart", id));
            } else {
                ctx.output.warn(&format!("Product {} is not in the cart", id));
            }
            show_cart(&carts, ctx)
        }
        CartCommand::Update { id, qty } => {
            let id = ProductId::new(id);
            if !carts.update_quantity(&id, qty)? {
                ctx.output.warn(&format!("Product {} is not in the cart", id));
            } else if qty <= 0 {
                ctx.output.success(&format!("Removed product {} from cart", id));
            } else {
                ctx.output.success(&format!("Set product {} quantity to {}", id, qty));
            }
            show_cart(&carts, ctx)
        }
        CartCommand::Clear => {
            carts.clear()?;
            ctx.output.success("Cart cleared");
            show_cart(&carts, ctx)
        }
    }
}

fn show_cart(carts: &CartStore<FileStore>, ctx: &Context) -> Result<()> {
    let cart = carts.cart();
    let pricing = carts.pricing(&ctx.pricing()?)?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "items": cart.lines(),
            "total_items": cart.total_items(),
            "pricing": pricing,
        }));
        return Ok(());
    }

    ctx.output.header("Shopping cart");

    if cart.is_empty() {
        ctx.output.info("Your cart is empty. Browse products with `cryo products list`.");
        return Ok(());
    }

    let widths = [4, 42, 12, 5, 14];
    ctx.output.table_row(&["ID", "PRODUCT", "PRICE", "QTY", "TOTAL"], &widths);
    for line in cart.lines() {
        let line_total = line.total()?;
        ctx.output.table_row(
            &[
                line.product.id.as_str(),
                &truncate(&line.product.name, 40),
                &line.product.price.display(),
                &line.quantity.to_string(),
                &line_total.display(),
            ],
            &widths,
        );
    }

    print_breakdown(&pricing, cart.total_items(), ctx);
    Ok(())
}

/// Order summary block shared with checkout.
pub fn print_breakdown(pricing: &PriceBreakdown, items: u64, ctx: &Context) {
    ctx.output.header("Order summary");
    ctx.output.kv(
        &format!("Subtotal ({} item{})", items, if items == 1 { "" } else { "s" }),
        &pricing.subtotal.display(),
    );
    let shipping = if pricing.has_free_shipping() {
        "FREE".to_string()
    } else {
        pricing.shipping.display()
    };
    ctx.output.kv("Shipping", &shipping);
    ctx.output.kv("Tax", &pricing.tax.display());
    ctx.output.kv("Total", &pricing.total.display());

    if !pricing.free_shipping_remaining.is_zero() {
        ctx.output.info(&format!(
            "Add {} more for free shipping",
            pricing.free_shipping_remaining.display()
        ));
    }
}
