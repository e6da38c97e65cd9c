use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use marketdesk_lib::display::{format_price, format_timestamp};
use marketdesk_lib::marketdesk_api::ImageFile;
use marketdesk_lib::types::Product;
use marketdesk_lib::{
    bulk_upload, BulkUploader, Client, DetailState, DetailView, ListState, ListView, ProductForm,
    ProductQuery, Query,
};

use crate::output::{build_product_rows, print_json, print_page_footer, print_rows, OutputFormat};

#[derive(Args)]
pub struct ProductsArgs {
    #[command(subcommand)]
    pub command: ProductsCommand,
}

#[derive(Subcommand)]
pub enum ProductsCommand {
    /// List the product catalogue
    List(ProductsListArgs),
    /// Show one product
    Show(ProductShowArgs),
    /// Create a product on behalf of a seller
    Add(ProductAddArgs),
    /// Edit an existing product
    Update(ProductUpdateArgs),
    /// Delete a product
    Delete(ProductDeleteArgs),
    /// Create many products from a JSON file, one request at a time
    BulkUpload(BulkUploadArgs),
}

#[derive(Args)]
pub struct ProductsListArgs {
    /// Free-text search over titles
    #[arg(long)]
    pub search: Option<String>,

    #[arg(long)]
    pub category_id: Option<i64>,

    #[arg(long, default_value_t = 1)]
    pub page: i64,

    #[arg(long, default_value_t = 10)]
    pub limit: i64,
}

#[derive(Args)]
pub struct ProductShowArgs {
    /// Product id
    pub id: i64,
}

/// Form fields shared by add and update. Flags mirror the product form:
/// brand is a single pick with a custom escape hatch, colors and materials
/// are capped multi-picks, and a custom value replaces the list picks.
#[derive(Args)]
pub struct ProductFieldArgs {
    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub price: Option<f64>,

    #[arg(long)]
    pub category_id: Option<i64>,

    #[arg(long)]
    pub sub_category_id: Option<i64>,

    /// Third category level; overrides --sub-category-id on the wire
    #[arg(long)]
    pub sub_sub_category_id: Option<i64>,

    #[arg(long)]
    pub brand_id: Option<i64>,

    /// Custom brand name; replaces --brand-id
    #[arg(long)]
    pub custom_brand: Option<String>,

    #[arg(long)]
    pub size_id: Option<i64>,

    #[arg(long)]
    pub condition_id: Option<i64>,

    /// Color id, repeatable up to the cap of 2
    #[arg(long = "color-id")]
    pub color_ids: Vec<i64>,

    /// Custom color name; replaces any --color-id picks
    #[arg(long)]
    pub custom_color: Option<String>,

    /// Material id, repeatable up to the cap of 3
    #[arg(long = "material-id")]
    pub material_ids: Vec<i64>,

    /// Custom material name; replaces any --material-id picks
    #[arg(long)]
    pub custom_material: Option<String>,

    #[arg(long)]
    pub negotiable: Option<bool>,

    /// Image file to attach, repeatable
    #[arg(long = "image")]
    pub images: Vec<PathBuf>,
}

#[derive(Args)]
pub struct ProductAddArgs {
    /// Seller account the listing is created under
    #[arg(long)]
    pub user_id: i64,

    #[command(flatten)]
    pub fields: ProductFieldArgs,
}

#[derive(Args)]
pub struct ProductUpdateArgs {
    /// Product id
    pub id: i64,

    #[command(flatten)]
    pub fields: ProductFieldArgs,
}

#[derive(Args)]
pub struct ProductDeleteArgs {
    /// Product id
    pub id: i64,
}

#[derive(Args)]
pub struct BulkUploadArgs {
    /// JSON file containing an array of products
    #[arg(long)]
    pub file: PathBuf,

    /// Directory holding the image files the products reference
    #[arg(long)]
    pub images_dir: Option<PathBuf>,

    /// Seller account all listings are created under
    #[arg(long)]
    pub user_id: i64,
}

pub async fn run(args: &ProductsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    match &args.command {
        ProductsCommand::List(list) => run_list(list, client, format).await,
        ProductsCommand::Show(show) => run_show(show, client, format).await,
        ProductsCommand::Add(add) => run_add(add, client, format).await,
        ProductsCommand::Update(update) => run_update(update, client, format).await,
        ProductsCommand::Delete(delete) => run_delete(delete, client, format).await,
        ProductsCommand::BulkUpload(bulk) => run_bulk_upload(bulk, client).await,
    }
}

async fn run_list(args: &ProductsListArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut view: ListView<Product, Option<i64>> = ListView::new(args.category_id);
    let mut params = view.start();
    if let Some(search) = args.search.as_deref() {
        params = view.submit_search(search);
    }
    if args.page > 1 {
        params = view.set_page(args.page);
    }

    let mut query = ProductQuery::default()
        .with_page(params.page)
        .with_limit(args.limit);
    if !params.search.is_empty() {
        query = query.with_search(&params.search);
    }
    if let Some(category_id) = params.filter {
        query = query.with_category_id(category_id);
    }

    let outcome = client.get_products(&query).await;
    view.resolve(
        outcome
            .map(|resp| (resp.data, resp.pagination))
            .map_err(|e| e.display_message()),
    );

    match view.state() {
        ListState::Populated(_) => {
            print_rows(build_product_rows(view.rows()), format)?;
            print_page_footer(view.pagination(), format);
            Ok(())
        }
        ListState::Empty => {
            println!("No products found");
            Ok(())
        }
        ListState::Errored(message) => anyhow::bail!(message.clone()),
        ListState::Idle | ListState::Loading => unreachable!("fetch already resolved"),
    }
}

async fn run_show(args: &ProductShowArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut view: DetailView<Product> = DetailView::new();
    let outcome = client.get_product(args.id).await;
    view.resolve(
        outcome
            .map(|envelope| envelope.data)
            .map_err(|e| e.display_message()),
    );

    match view.state() {
        DetailState::Loaded(product) => {
            match format {
                OutputFormat::Table => print_detail(product),
                _ => print_json(product)?,
            }
            Ok(())
        }
        DetailState::NotFound => {
            println!("Product {} not found", args.id);
            Ok(())
        }
        DetailState::Failed(message) => anyhow::bail!(message.clone()),
        DetailState::Loading => unreachable!("fetch already resolved"),
    }
}

fn print_detail(product: &Product) {
    println!(
        "Product #{}: {}",
        product.id,
        product.title.as_deref().unwrap_or("-")
    );
    println!(
        "  Price:      {}",
        product
            .price
            .map(format_price)
            .unwrap_or_else(|| "-".to_string())
    );
    println!(
        "  Status:     {}",
        product
            .status
            .map(|s| s.to_string())
            .unwrap_or_else(|| "-".to_string())
    );
    println!(
        "  Negotiable: {}",
        match product.is_negotiable {
            Some(true) => "yes",
            Some(false) => "no",
            None => "-",
        }
    );
    println!("  Images:     {}", product.images.len());
    println!(
        "  Listed:     {}",
        format_timestamp(product.created_at.as_ref())
    );
    if let Some(description) = product.description.as_deref() {
        if !description.is_empty() {
            println!("  Description: {}", description);
        }
    }
}

/// Applies the CLI flags to the form in form order: list picks first, then
/// custom values, so a custom value replaces list picks the way the form's
/// "Other" option does.
fn apply_fields(form: &mut ProductForm, args: &ProductFieldArgs) -> Result<()> {
    if let Some(title) = &args.title {
        form.title = title.clone();
    }
    if let Some(description) = &args.description {
        form.description = description.clone();
    }
    if let Some(price) = args.price {
        form.price = Some(price);
    }
    if let Some(category_id) = args.category_id {
        form.category_id = Some(category_id);
    }
    if let Some(sub_category_id) = args.sub_category_id {
        form.sub_category_id = Some(sub_category_id);
    }
    if let Some(sub_sub_category_id) = args.sub_sub_category_id {
        form.sub_sub_category_id = Some(sub_sub_category_id);
    }
    if let Some(size_id) = args.size_id {
        form.size_id = Some(size_id);
    }
    if let Some(condition_id) = args.condition_id {
        form.condition_id = Some(condition_id);
    }
    if let Some(negotiable) = args.negotiable {
        form.is_negotiable = negotiable;
    }

    if let Some(brand_id) = args.brand_id {
        form.brand.pick(brand_id);
    }
    if let Some(custom) = &args.custom_brand {
        form.brand.select_other();
        form.brand.set_custom(custom);
    }

    for id in &args.color_ids {
        form.colors.toggle(*id).map_err(anyhow::Error::msg)?;
    }
    if let Some(custom) = &args.custom_color {
        form.colors.select_other();
        form.colors.set_custom(custom);
    }

    for id in &args.material_ids {
        form.materials.toggle(*id).map_err(anyhow::Error::msg)?;
    }
    if let Some(custom) = &args.custom_material {
        form.materials.select_other();
        form.materials.set_custom(custom);
    }

    for path in &args.images {
        form.add_image(read_image(path)?).map_err(anyhow::Error::msg)?;
    }
    Ok(())
}

fn read_image(path: &Path) -> Result<ImageFile> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read image {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| "image".to_string());
    Ok(ImageFile { file_name, bytes })
}

async fn run_add(args: &ProductAddArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut form = ProductForm::new();
    apply_fields(&mut form, &args.fields)?;
    let payload = form
        .build_payload(Some(args.user_id))
        .map_err(anyhow::Error::msg)?;

    let envelope = client
        .create_product(payload)
        .await
        .map_err(|e| anyhow::anyhow!(e.display_message()))?;

    match format {
        OutputFormat::Table => {
            println!(
                "{}",
                envelope.message.as_deref().unwrap_or("Product created")
            );
            if let Some(product) = &envelope.data {
                println!("Created product #{}", product.id);
            }
        }
        _ => print_json(&envelope.data)?,
    }
    Ok(())
}

async fn run_update(args: &ProductUpdateArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let envelope = client
        .get_product(args.id)
        .await
        .map_err(|e| anyhow::anyhow!(e.display_message()))?;
    let product = match envelope.data {
        Some(product) => product,
        None => anyhow::bail!("Product {} not found", args.id),
    };

    let mut form = prefill(&product);
    apply_fields(&mut form, &args.fields)?;
    let payload = form.build_payload(None).map_err(anyhow::Error::msg)?;

    let envelope = client
        .update_product(args.id, payload)
        .await
        .map_err(|e| anyhow::anyhow!(e.display_message()))?;

    match format {
        OutputFormat::Table => println!(
            "{}",
            envelope.message.as_deref().unwrap_or("Product updated")
        ),
        _ => print_json(&envelope.data)?,
    }
    Ok(())
}

/// Seeds the form with the product's current values, as the edit screen
/// does before the user touches anything.
fn prefill(product: &Product) -> ProductForm {
    let mut form = ProductForm::new();
    form.title = product.title.clone().unwrap_or_default();
    form.description = product.description.clone().unwrap_or_default();
    form.price = product.price;
    form.category_id = product.category_id;
    form.sub_category_id = product.sub_category_id;
    form.size_id = product.size_id;
    form.condition_id = product.condition_id;
    form.is_negotiable = product.is_negotiable.unwrap_or(false);
    form.existing_images = product.images.clone();

    match (product.brand_id, product.custom_brand.as_deref()) {
        (Some(brand_id), _) => form.brand.pick(brand_id),
        (None, Some(custom)) if !custom.is_empty() => {
            form.brand.select_other();
            form.brand.set_custom(custom);
        }
        _ => {}
    }

    if let Some(custom) = product.custom_color.as_deref().filter(|c| !c.is_empty()) {
        form.colors.select_other();
        form.colors.set_custom(custom);
    } else if let Some(ids) = &product.color_ids {
        for id in ids {
            // The backend enforced the cap when the product was saved.
            let _ = form.colors.toggle(*id);
        }
    }

    if let Some(custom) = product.custom_material.as_deref().filter(|c| !c.is_empty()) {
        form.materials.select_other();
        form.materials.set_custom(custom);
    } else if let Some(ids) = &product.material_ids {
        for id in ids {
            let _ = form.materials.toggle(*id);
        }
    }

    form
}

async fn run_delete(args: &ProductDeleteArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let envelope = client
        .delete_product(args.id)
        .await
        .map_err(|e| anyhow::anyhow!(e.display_message()))?;

    match format {
        OutputFormat::Table => println!(
            "{}",
            envelope.message.as_deref().unwrap_or("Product deleted")
        ),
        _ => print_json(&envelope.data)?,
    }
    Ok(())
}

async fn run_bulk_upload(args: &BulkUploadArgs, client: &Client) -> Result<()> {
    let raw = fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    let descriptors = bulk_upload::parse_descriptors(&raw)?;
    if descriptors.is_empty() {
        println!("No products in {}", args.file.display());
        return Ok(());
    }

    let images = match &args.images_dir {
        Some(dir) => load_images(dir)?,
        None => HashMap::new(),
    };

    let bar = ProgressBar::new(descriptors.len() as u64);
    bar.set_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let uploader = BulkUploader::new(client, args.user_id);
    let summary = uploader
        .run(descriptors, &images, |current, _total, title| {
            bar.set_position(current as u64 - 1);
            bar.set_message(title.to_string());
        })
        .await;
    bar.finish_and_clear();

    println!(
        "Uploaded {} of {} products ({} failed)",
        summary.succeeded(),
        summary.outcomes.len(),
        summary.failed()
    );
    for item in summary.failed_items() {
        println!(
            "  #{} {}: {}",
            item.index,
            item.title,
            item.error.as_deref().unwrap_or("unknown error")
        );
    }
    Ok(())
}

/// Reads every file in the images directory into memory, keyed by file
/// name the way the products file references them.
fn load_images(dir: &Path) -> Result<HashMap<String, Vec<u8>>> {
    let mut images = HashMap::new();
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to read {}", dir.display()))?;
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        let bytes = fs::read(entry.path())
            .with_context(|| format!("Failed to read image {}", entry.path().display()))?;
        images.insert(name, bytes);
    }
    Ok(images)
}
