use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span, warn};

use cafe_cli::item_spec::ItemSpec;
use cafe_cli::logging::redact_value;
use cafe_client::{
    ClientConfig, ClientError, HttpTransport, build_request, load_menu, submit_session,
};
use cafe_core::{CategoryKind, OrderSession, layout_menu};
use cafe_ingest::{normalize_batch, read_records_file};
use cafe_model::{CustomerInfo, Menu, OrderReceipt};

use crate::cli::{MenuArgs, OrderArgs};
use crate::summary::{apply_table_style, print_cart, print_menu, print_receipt};

/// Connection settings resolved from flags, environment and config file.
pub struct Connection<'a> {
    pub api_url: Option<&'a str>,
    pub config_path: Option<&'a Path>,
}

impl Connection<'_> {
    fn transport(&self) -> Result<HttpTransport> {
        let config = ClientConfig::load(self.config_path)
            .context("load client config")?
            .with_base_url(self.api_url.map(str::to_string));
        info!(base_url = %config.base_url, timeout_secs = config.timeout_secs, "using order service");
        HttpTransport::new(config).context("build http client")
    }
}

/// Outcome of `cafe order`.
pub enum OrderOutcome {
    Submitted(OrderReceipt),
    DryRun,
}

pub fn run_menu(args: &MenuArgs, connection: &Connection<'_>) -> Result<()> {
    let menu = fetch_menu(args.records.as_deref(), connection)?;
    print_menu(&layout_menu(&menu));
    Ok(())
}

pub fn run_categories() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Category", "Group order"]);
    apply_table_style(&mut table);
    for kind in CategoryKind::KNOWN {
        table.add_row(vec![
            kind.to_string(),
            kind.preferred_groups().join(" > "),
        ]);
    }
    println!("{table}");
    println!("Other categories list their groups alphabetically.");
    Ok(())
}

pub fn run_order(args: &OrderArgs, connection: &Connection<'_>) -> Result<OrderOutcome> {
    let span = info_span!("order", items = args.items.len(), dry_run = args.dry_run);
    let _guard = span.enter();

    let menu = fetch_menu(args.records.as_deref(), connection)?;
    let mut session = OrderSession::with_menu(menu);
    for item in &args.items {
        build_item(&mut session, item)?;
    }
    session.set_customer(CustomerInfo::new(&args.name, &args.phone));
    log_cart_assembled(&session);
    print_cart(session.cart());

    if args.dry_run {
        println!("{}", dry_run_payload(&session)?);
        return Ok(OrderOutcome::DryRun);
    }

    let transport = connection.transport()?;
    let receipt = submit_session(&mut session, &transport)
        .inspect_err(|err| warn!(retryable = err.is_retryable(), "order not placed"))
        .context("submit order")?;
    print_receipt(&receipt);
    Ok(OrderOutcome::Submitted(receipt))
}

fn log_cart_assembled(session: &OrderSession) {
    let customer = session.customer();
    info!(
        customer = redact_value(customer.name.trim()),
        phone = redact_value(customer.phone.trim()),
        items = session.cart().len(),
        "cart assembled"
    );
}

/// The order payload that would be posted, validated like a real submission.
fn dry_run_payload(session: &OrderSession) -> Result<String> {
    let request =
        build_request(session.cart(), session.customer()).map_err(ClientError::from)?;
    serde_json::to_string_pretty(&request).context("serialize order")
}

/// Toggle every option of `item` and add the result to the cart.
fn build_item(session: &mut OrderSession, item: &ItemSpec) -> Result<()> {
    session.reset_selection(&item.category);
    for (group, option) in item.toggles() {
        session
            .toggle_option(&item.category, group, option)
            .with_context(|| format!("item '{item}'"))?;
    }
    session
        .add_to_cart(&item.category)
        .with_context(|| format!("item '{item}'"))?;
    Ok(())
}

fn fetch_menu(records: Option<&Path>, connection: &Connection<'_>) -> Result<Menu> {
    match records {
        Some(path) => {
            let batch = read_records_file(path)
                .with_context(|| format!("read menu records from {}", path.display()))?;
            let (menu, report) = normalize_batch(&batch);
            if report.skipped_count() > 0 {
                warn!(skipped = report.skipped_count(), "menu records skipped");
            }
            info!(categories = menu.len(), path = %path.display(), "menu loaded from file");
            Ok(menu)
        }
        None => {
            let transport = connection.transport()?;
            let (menu, _) = load_menu(&transport).context("load menu")?;
            Ok(menu)
        }
    }
}
