//! Catalog browsing commands.

use anyhow::{bail, Context as _, Result};
use console::style;
use cryo_commerce::catalog::{Product, ProductCategory};
use cryo_commerce::ids::ProductId;
use cryo_commerce::search::{PriceRange, SearchResults, SortOption};
use cryo_commerce::{Currency, Money};
use cryo_store::CatalogQueryState;

use super::{ListArgs, ProductsArgs, ProductsCommand};
use crate::context::Context;
use crate::output::{stock_badge, truncate};

/// Run the products command.
pub async fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ProductsCommand::List(list) => list_products(list, ctx).await,
        ProductsCommand::Show { id } => show_product(&id, ctx).await,
        ProductsCommand::Featured => featured_products(ctx).await,
        ProductsCommand::Categories => list_categories(ctx).await,
    }
}

/// Turn the list flags into a listing query.
pub fn query_from_args(args: &ListArgs) -> Result<CatalogQueryState> {
    let mut state = CatalogQueryState::new();

    if let Some(ref term) = args.search {
        state.set_search_term(term.as_str());
    }

    for tag in &args.category {
        let category: ProductCategory = tag.parse()?;
        state.set_category(category, true);
    }

    let mut filter = state.query().filter.clone();
    let default_range = PriceRange::default();
    let min = match args.min {
        Some(ref raw) => Money::parse_decimal(raw, Currency::USD).context("Invalid --min")?,
        None => default_range.min,
    };
    let max = match args.max {
        Some(ref raw) => Money::parse_decimal(raw, Currency::USD).context("Invalid --max")?,
        None => default_range.max,
    };
    filter.price_range = PriceRange::new(min, max);
    filter.in_stock_only = args.in_stock;
    state.set_filter(filter);

    let sort: SortOption = args.sort.parse()?;
    state.set_sort(sort);

    Ok(state)
}

async fn list_products(args: ListArgs, ctx: &Context) -> Result<()> {
    let state = query_from_args(&args)?;
    let per_page = args.per_page.unwrap_or(ctx.config.catalog.page_size);
    let results = state.page(&ctx.catalog, args.page, per_page);

    if ctx.output.is_json() {
        ctx.output.json(&results);
        return Ok(());
    }

    let query = state.query();
    ctx.output.header(&format!("Products ({})", query.sort.display_name()));
    if !query.search_term.is_empty() {
        ctx.output.kv("search", &query.search_term);
    }
    if !query.filter.categories.is_empty() {
        let labels: Vec<&str> = query
            .filter
            .categories
            .iter()
            .map(|c| c.display_name())
            .collect();
        ctx.output.kv("categories", &labels.join(", "));
    }

    print_results(&results, ctx);
    Ok(())
}

fn print_results(results: &SearchResults<&Product>, ctx: &Context) {
    let p = &results.pagination;

    if results.is_empty() {
        if p.total == 0 {
            ctx.output.info("No products found. Try adjusting your search or filters.");
        } else {
            ctx.output.info(&format!(
                "Page {} is past the end ({} page{}).",
                p.page,
                p.total_pages,
                if p.total_pages == 1 { "" } else { "s" }
            ));
        }
        return;
    }

    println!();
    let widths = [4, 42, 20, 14, 14];
    ctx.output.table_row(&["ID", "NAME", "CATEGORY", "PRICE", "STOCK"], &widths);
    ctx.output.table_row(&["──", "────", "────────", "─────", "─────"], &widths);
    for product in &results.items {
        let mut name = truncate(&product.name, 40);
        if product.featured {
            name = format!("{} {}", name, style("★").yellow());
        }
        ctx.output.table_row(
            &[
                product.id.as_str(),
                &name,
                product.category.display_name(),
                &product.price.display(),
                &stock_badge(product.in_stock, product.stock_quantity),
            ],
            &widths,
        );
    }

    println!();
    ctx.output.info(&format!(
        "Showing {}-{} of {} product{} (page {} of {})",
        p.start_item(),
        p.end_item(),
        p.total,
        if p.total == 1 { "" } else { "s" },
        p.page,
        p.total_pages
    ));
    if p.has_next {
        ctx.output.debug(&format!("Next page: --page {}", p.page + 1));
    }
}

async fn show_product(id: &str, ctx: &Context) -> Result<()> {
    let product = ctx.catalog.require(&ProductId::new(id))?;
    let related = ctx.catalog.related(product);

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "product": product,
            "related": related,
        }));
        return Ok(());
    }

    ctx.output.header(&product.name);
    ctx.output.kv("id", product.id.as_str());
    ctx.output.kv("category", product.category.display_name());
    ctx.output.kv("price", &product.price.display());
    ctx.output.kv("stock", &stock_badge(product.in_stock, product.stock_quantity));
    if product.featured {
        ctx.output.kv("featured", "yes");
    }
    if let Some(image) = product.primary_image() {
        ctx.output.kv("image", image);
    }

    println!();
    println!("  {}", product.description);

    if !product.specifications.is_empty() {
        ctx.output.header("Specifications");
        for spec in &product.specifications {
            ctx.output.kv(&spec.label, &spec.display_value());
        }
    }

    if !related.is_empty() {
        ctx.output.header("Related products");
        for p in related {
            ctx.output
                .list_item(&format!("[{}] {} - {}", p.id, p.name, p.price.display()));
        }
    }

    Ok(())
}

async fn featured_products(ctx: &Context) -> Result<()> {
    let featured = ctx.catalog.featured();

    if ctx.output.is_json() {
        ctx.output.json(&featured);
        return Ok(());
    }

    if featured.is_empty() {
        bail!("No featured products");
    }

    ctx.output.header("Featured products");
    for p in featured {
        ctx.output.list_item(&format!(
            "[{}] {} - {} ({})",
            p.id,
            style(&p.name).bold(),
            p.price.display(),
            p.category.display_name()
        ));
    }

    Ok(())
}

async fn list_categories(ctx: &Context) -> Result<()> {
    let categories = ctx.catalog.categories();

    if ctx.output.is_json() {
        ctx.output.json(&categories);
        return Ok(());
    }

    ctx.output.header("Categories");
    let widths = [20, 22, 8];
    ctx.output.table_row(&["TAG", "LABEL", "PRODUCTS"], &widths);
    for summary in &categories {
        ctx.output.table_row(
            &[
                summary.category.as_str(),
                summary.label,
                &summary.count.to_string(),
            ],
            &widths,
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cryo_commerce::catalog::Catalog;

    fn args() -> ListArgs {
        ListArgs {
            sort: "name-asc".to_string(),
            page: 1,
            ..Default::default()
        }
    }

    fn ids(state: &CatalogQueryState) -> Vec<String> {
        let catalog = Catalog::builtin();
        state
            .page(&catalog, 1, 12)
            .items
            .iter()
            .map(|p| p.id.to_string())
            .collect()
    }

    #[test]
    fn test_defaults_list_everything() {
        let state = query_from_args(&args()).unwrap();
        assert!(state.query().filter.is_default());
        assert_eq!(ids(&state).len(), 8);
    }

    #[test]
    fn test_flags_combine() {
        let list = ListArgs {
            search: Some("dewar".to_string()),
            max: Some("1000".to_string()),
            ..args()
        };
        assert_eq!(ids(&query_from_args(&list).unwrap()), vec!["8"]);

        let list = ListArgs {
            category: vec!["dewars".to_string(), "valves-fittings".to_string()],
            sort: "price-desc".to_string(),
            ..args()
        };
        assert_eq!(ids(&query_from_args(&list).unwrap()), vec!["1", "4", "8"]);
    }

    #[test]
    fn test_bad_flags_rejected() {
        let bad_sort = ListArgs {
            sort: "newest".to_string(),
            ..args()
        };
        assert!(query_from_args(&bad_sort).is_err());

        let bad_category = ListArgs {
            category: vec!["pumps".to_string()],
            ..args()
        };
        assert!(query_from_args(&bad_category).is_err());

        let bad_price = ListArgs {
            min: Some("12.345".to_string()),
            ..args()
        };
        assert!(query_from_args(&bad_price).is_err());
    }
}
