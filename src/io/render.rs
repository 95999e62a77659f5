//! Text renderings of a plan and its parts list

use crate::mosaic::{Inventory, Plan};

/// Grid of brick ids, three digits per cell and `---` where no brick was placed
pub fn render_text(plan: &Plan) -> String {
    let mut out = String::new();
    for row in 0..plan.num_rows() {
        for col in 0..plan.num_cols() {
            match plan.piece(row, col) {
                Some(brick) => out.push_str(&format!("{:03} ", brick.id)),
                None => out.push_str("--- "),
            }
        }
        out.push('\n');
    }
    out
}

/// Format a cost in cents as dollars
pub fn format_cost(cents: u32) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

/// Parts list grouped by color, most used color first
pub fn format_inventory(inventory: &Inventory) -> String {
    let mut lines = Vec::new();
    for (color, usage) in inventory.descending_usage() {
        lines.push(format!(
            "{} (color {}): {} pieces, {} cells, {}",
            color.name,
            color.id,
            usage.num_pieces,
            usage.area,
            format_cost(usage.approximate_cost)
        ));
        for (part, count) in inventory.parts_for_color(&color) {
            lines.push(format!("  {count:>4} x {part}"));
        }
    }
    lines.push(format!(
        "Total: {} pieces, approximately {}",
        inventory.total_pieces(),
        format_cost(inventory.approximate_cost())
    ));
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
