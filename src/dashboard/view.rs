//! Text rendering of the product table and pagination footer.

use tabled::{
    builder::Builder,
    settings::{object::Columns, Alignment, Style},
};

use crate::catalog::{format_usd, Product};
use crate::dashboard::state::{ModalState, Notice, PageState};

const DESCRIPTION_WIDTH: usize = 40;

/// Render the product table: title, price, category, description, actions.
pub fn render_table(products: &[Product]) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Product Title", "Price", "Category", "Description", "Actions"]);

    for product in products {
        builder.push_record([
            product.product_title.clone(),
            format_usd(product.product_price),
            product.product_category.clone().unwrap_or_default(),
            ellipsize(product.product_description.as_deref().unwrap_or_default()),
            format!("edit/delete {}", product.product_id),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.modify(Columns::new(1..2), Alignment::right());
    table.to_string()
}

/// `Page 2 of 3 (23 products)`
pub fn render_pagination(state: &PageState) -> String {
    let noun = if state.total == 1 { "product" } else { "products" };
    format!(
        "Page {} of {} ({} {})",
        state.page,
        state.total_pages.max(1),
        state.total,
        noun
    )
}

/// Heading line for an open modal.
pub fn render_modal(modal: &ModalState) -> Option<String> {
    modal
        .title()
        .map(|title| format!("{title} [{}]", modal.submit_label()))
}

pub fn render_notice(notice: &Notice) -> String {
    match notice {
        Notice::Success(message) => format!("✔ {message}"),
        Notice::Error(message) => format!("✖ {message}"),
    }
}

fn ellipsize(text: &str) -> String {
    if text.chars().count() <= DESCRIPTION_WIDTH {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(DESCRIPTION_WIDTH - 1).collect();
    cut.push('…');
    cut
}
