use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use cafe_core::{CategoryLayout, GroupOptions};
use cafe_model::{Cardinality, Cart, MenuOption, OptionId, OrderReceipt, Selection};

pub fn print_menu(layouts: &[CategoryLayout]) {
    if layouts.is_empty() {
        println!("The menu is empty.");
        return;
    }
    for layout in layouts {
        println!();
        println!("{} ({}) from {}", layout.label, layout.key, price(layout.base_price));
        println!("{}", category_table(layout));
    }
}

fn category_table(layout: &CategoryLayout) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Group"),
        header_cell("Pick"),
        header_cell("Section"),
        header_cell("Option"),
        header_cell("Id"),
        header_cell("Price"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 5, CellAlignment::Right);

    for group in &layout.groups {
        let pick = match group.cardinality {
            Cardinality::Single => "one",
            Cardinality::Multi => "any",
        };
        match &group.options {
            GroupOptions::Flat { options } => {
                for option in options {
                    table.add_row(option_row(&group.name, pick, None, option));
                }
            }
            GroupOptions::Bucketed(bucketed) => {
                for bucket in &bucketed.buckets {
                    for option in &bucket.options {
                        table.add_row(option_row(&group.name, pick, Some(bucket.name), option));
                    }
                }
            }
        }
    }
    table
}

fn option_row(group: &str, pick: &str, section: Option<&str>, option: &MenuOption) -> Vec<Cell> {
    vec![
        Cell::new(group).add_attribute(Attribute::Bold),
        dim_cell(pick),
        section.map_or_else(|| dim_cell("-"), Cell::new),
        Cell::new(&option.label),
        dim_cell(option.id.as_str()),
        price_delta_cell(option.price_delta),
    ]
}

pub fn print_cart(cart: &Cart) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Item"),
        header_cell("Base"),
        header_cell("Selections"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for (index, item) in cart.items().iter().enumerate() {
        let selections: Vec<String> = item
            .selections
            .iter()
            .map(|(group, selection)| format!("{group}: {}", selection_text(selection)))
            .collect();
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(&item.category).add_attribute(Attribute::Bold),
            Cell::new(price(item.base_price)),
            if selections.is_empty() {
                dim_cell("(none)")
            } else {
                Cell::new(selections.join("\n"))
            },
        ]);
    }
    println!("{table}");
}

pub fn print_receipt(receipt: &OrderReceipt) {
    let id = if receipt.placeholder {
        Cell::new(receipt.display_id()).fg(Color::Yellow)
    } else {
        Cell::new(receipt.display_id())
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    };
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.add_row(vec![header_cell("Order"), id]);
    table.add_row(vec![header_cell("Items"), Cell::new(receipt.item_count)]);
    table.add_row(vec![
        header_cell("Received"),
        Cell::new(receipt.received_at.format("%Y-%m-%d %H:%M:%S UTC")),
    ]);
    println!("{table}");
}

fn selection_text(selection: &Selection) -> String {
    let ids: Vec<&str> = selection.option_ids().into_iter().map(OptionId::as_str).collect();
    ids.join(", ")
}

fn price(value: f64) -> String {
    format!("${value:.2}")
}

fn price_delta_cell(delta: f64) -> Cell {
    if delta == 0.0 {
        dim_cell("-")
    } else {
        Cell::new(format!("+{}", price(delta)))
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
