pub mod json;
pub mod print;
pub mod shopping_csv;

pub use json::{PlanExport, plan_from_json, plan_to_json, read_plan_json, write_plan_json};
pub use print::{escape_html, render_print_document, write_print_document};
pub use shopping_csv::{shopping_list_csv_string, write_shopping_list_csv};
