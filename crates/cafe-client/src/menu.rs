use tracing::{info, warn};

use cafe_ingest::{NormalizeReport, normalize_batch, records_from_values};
use cafe_model::Menu;

use crate::error::Result;
use crate::transport::OrderTransport;

/// Fetch the menu records and normalize them into a [`Menu`].
pub fn load_menu<T: OrderTransport + ?Sized>(transport: &T) -> Result<(Menu, NormalizeReport)> {
    let values = transport.fetch_records()?;
    let batch = records_from_values(values);
    let (menu, report) = normalize_batch(&batch);

    if report.skipped_count() > 0 {
        warn!(
            skipped = report.skipped_count(),
            undecodable = report.undecodable,
            "menu records skipped during normalization"
        );
    }
    info!(
        categories = menu.len(),
        records = report.accepted,
        "menu loaded"
    );
    Ok((menu, report))
}
