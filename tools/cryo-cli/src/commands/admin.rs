//! Admin area commands.

use anyhow::{bail, Context as _, Result};
use chrono::Utc;
use console::style;
use cryo_commerce::admin::{request_delete, submit_draft, Dashboard, ProductDraft};
use cryo_commerce::ids::ProductId;
use cryo_commerce::{CommerceError, Currency, Money};
use dialoguer::{Confirm, Input, Password};

use super::{AdminArgs, AdminCommand, ProductFormArgs};
use crate::context::Context;
use crate::output::{status_badge, stock_badge, truncate};

/// Run the admin command.
pub async fn run(args: AdminArgs, ctx: &Context) -> Result<()> {
    match args.command {
        AdminCommand::Login { username, password } => login(username, password, ctx).await,
        AdminCommand::Logout => logout(ctx).await,
        AdminCommand::Dashboard => dashboard(ctx).await,
        AdminCommand::Products => products(ctx).await,
        AdminCommand::ValidateProduct(form) => validate_product(form, ctx).await,
        AdminCommand::Delete { id, yes } => delete_product(&id, yes, ctx).await,
    }
}

async fn login(username: Option<String>, password: Option<String>, ctx: &Context) -> Result<()> {
    let mut admin = ctx.admin_store()?;

    if admin.is_authenticated() {
        let who = admin.session().username.clone().unwrap_or_default();
        ctx.output.info(&format!("Already logged in as {}", who));
        return Ok(());
    }

    let username = match username {
        Some(u) => u,
        None if !ctx.output.is_json() => Input::<String>::new()
            .with_prompt("Username")
            .allow_empty(true)
            .interact_text()?,
        None => String::new(),
    };
    let password = match password {
        Some(p) => p,
        None if !ctx.output.is_json() => Password::new()
            .with_prompt("Password")
            .allow_empty_password(true)
            .interact()?,
        None => String::new(),
    };

    admin.login(&ctx.config.admin_credentials(), &username, &password, Utc::now())?;

    if ctx.output.is_json() {
        ctx.output.json(admin.session());
    } else {
        ctx.output.success(&format!("Logged in as {}", username.trim()));
    }
    Ok(())
}

async fn logout(ctx: &Context) -> Result<()> {
    let mut admin = ctx.admin_store()?;
    let was_logged_in = admin.is_authenticated();
    admin.logout()?;

    if ctx.output.is_json() {
        ctx.output.json(admin.session());
    } else if was_logged_in {
        ctx.output.success("Logged out");
    } else {
        ctx.output.info("Not logged in");
    }
    Ok(())
}

/// Stop unless an admin session is active.
fn require_login(ctx: &Context) -> Result<()> {
    if !ctx.admin_store()?.is_authenticated() {
        bail!("Admin login required. Run `cryo admin login` first.");
    }
    Ok(())
}

async fn dashboard(ctx: &Context) -> Result<()> {
    require_login(ctx)?;
    let dashboard = Dashboard::from_catalog(&ctx.catalog)?;

    if ctx.output.is_json() {
        ctx.output.json(&dashboard);
        return Ok(());
    }

    ctx.output.header("Admin dashboard");
    ctx.output.kv("Total products", &dashboard.total_products.to_string());
    ctx.output.kv("Featured", &dashboard.featured_products.to_string());
    ctx.output.kv("In stock", &dashboard.in_stock_products.to_string());
    ctx.output.kv("Stock units", &dashboard.total_stock_units.to_string());
    ctx.output.kv("Inventory value", &dashboard.inventory_value.display());
    ctx.output.kv("Orders today", &dashboard.metrics.orders_today.to_string());
    ctx.output.kv("Active customers", &dashboard.metrics.active_customers.to_string());
    ctx.output.kv("Revenue (MTD)", &dashboard.metrics.revenue_month_to_date.display());

    ctx.output.header("Products by category");
    for summary in &dashboard.categories {
        ctx.output.list_item(&format!("{}: {}", summary.label, summary.count));
    }

    ctx.output.header("Recent orders");
    let widths = [10, 22, 14, 12, 10];
    ctx.output.table_row(&["ORDER", "CUSTOMER", "TOTAL", "STATUS", "DATE"], &widths);
    for order in &dashboard.recent_orders {
        ctx.output.table_row(
            &[
                order.order_number.as_str(),
                &order.customer,
                &order.total.display(),
                &status_badge(order.status),
                &order.date.to_string(),
            ],
            &widths,
        );
    }
    Ok(())
}

async fn products(ctx: &Context) -> Result<()> {
    require_login(ctx)?;
    let products = ctx.catalog.products();

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output.header(&format!("Products ({})", products.len()));
    let widths = [4, 36, 20, 14, 14, 8];
    ctx.output.table_row(&["ID", "NAME", "CATEGORY", "PRICE", "STOCK", "FEATURED"], &widths);
    for p in products {
        let featured = if p.featured {
            style("yes").yellow().to_string()
        } else {
            style("no").dim().to_string()
        };
        ctx.output.table_row(
            &[
                p.id.as_str(),
                &truncate(&p.name, 34),
                p.category.display_name(),
                &p.price.display(),
                &stock_badge(p.in_stock, p.stock_quantity),
                &featured,
            ],
            &widths,
        );
    }
    Ok(())
}

/// Build a draft from the form flags, starting from `--edit`'s product.
pub fn draft_from_args(form: ProductFormArgs, ctx: &Context) -> Result<(ProductDraft, Option<ProductId>)> {
    let editing = form.edit.map(ProductId::new);
    let mut draft = match editing {
        Some(ref id) => ProductDraft::from_product(ctx.catalog.require(id)?),
        None => ProductDraft::default(),
    };

    if let Some(name) = form.name {
        draft.name = name;
    }
    if let Some(description) = form.description {
        draft.description = description;
    }
    if let Some(category) = form.category {
        draft.category = category;
    }
    if let Some(ref price) = form.price {
        draft.price = Money::parse_decimal(price, Currency::USD).context("Invalid --price")?;
    }
    if let Some(stock) = form.stock {
        draft.stock_quantity = stock;
    }
    if let Some(featured) = form.featured {
        draft.featured = featured;
    }

    Ok((draft, editing))
}

async fn validate_product(form: ProductFormArgs, ctx: &Context) -> Result<()> {
    require_login(ctx)?;
    let (draft, editing) = draft_from_args(form, ctx)?;

    submit_draft(&draft, editing.as_ref()).map_err(CommerceError::from)?;

    if ctx.output.is_json() {
        ctx.output.json(&draft);
        return Ok(());
    }

    let action = if editing.is_some() { "update" } else { "new product" };
    ctx.output.success(&format!("{} \"{}\" is valid", action, draft.name));
    ctx.output.info("The catalog is read-only; nothing was changed.");
    Ok(())
}

async fn delete_product(id: &str, yes: bool, ctx: &Context) -> Result<()> {
    require_login(ctx)?;
    let product = ctx.catalog.require(&ProductId::new(id))?;

    if !yes && !ctx.output.is_json() {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete \"{}\"?", product.name))
            .default(false)
            .interact()?;

        if !confirmed {
            ctx.output.info("Delete cancelled");
            return Ok(());
        }
    }

    request_delete(&product.id);
    ctx.output.success(&format!(
        "Delete of \"{}\" recorded. The catalog is read-only; nothing was changed.",
        product.name
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use crate::output::Output;
    use cryo_commerce::catalog::Catalog;

    fn ctx() -> Context {
        let dir = std::env::temp_dir();
        Context {
            config: CliConfig::default(),
            output: Output::new(false, true),
            cwd: dir,
            config_path: None,
            catalog: Catalog::builtin(),
            state_override: None,
        }
    }

    #[test]
    fn test_edit_starts_from_product() {
        let (draft, editing) = draft_from_args(
            ProductFormArgs {
                edit: Some("4".to_string()),
                price: Some("950".to_string()),
                ..Default::default()
            },
            &ctx(),
        )
        .unwrap();
        assert_eq!(editing, Some(ProductId::new("4")));
        assert_eq!(draft.name, "Cryogenic Ball Valve DN50");
        assert_eq!(draft.category, "valves-fittings");
        assert_eq!(draft.price, Money::usd(95_000));
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_new_draft_reports_all_fields() {
        let (draft, editing) = draft_from_args(
            ProductFormArgs {
                price: Some("-5".to_string()),
                stock: Some(-1),
                ..Default::default()
            },
            &ctx(),
        )
        .unwrap();
        assert!(editing.is_none());
        let errors = draft.validate().unwrap_err();
        for field in ["name", "description", "category", "price", "stock_quantity"] {
            assert!(errors.get(field).is_some(), "{field} should fail");
        }
    }

    #[test]
    fn test_unknown_edit_target() {
        let result = draft_from_args(
            ProductFormArgs {
                edit: Some("99".to_string()),
                ..Default::default()
            },
            &ctx(),
        );
        assert!(result.is_err());
    }
}
