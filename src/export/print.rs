use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::{DailyMealPlan, MacroTargets, MealComponent, ShoppingListItem, all_meals};

const PRINT_STYLE: &str = "\
body { font-family: Arial, sans-serif; margin: 20px; }
h1, h2, h3 { color: #333; }
.meal { margin-bottom: 30px; border-bottom: 1px solid #eee; padding-bottom: 20px; }
.item { margin-bottom: 10px; }
.macros { display: grid; grid-template-columns: repeat(4, 1fr); margin-top: 15px; }
.shopping-list { display: grid; grid-template-columns: repeat(2, 1fr); }
.recipe { background: #f9f9f9; padding: 10px; margin-top: 10px; border-left: 3px solid #ddd; }";

/// Escape text for HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn component_line(component: &MealComponent) -> String {
    format!(
        "{} {} ({}g)",
        escape_html(&component.method),
        escape_html(&component.name),
        component.serving.round()
    )
}

fn recipe_block(component: &MealComponent) -> String {
    if component.recipe_steps.is_empty() {
        return String::new();
    }
    let steps: String = component
        .recipe_steps
        .iter()
        .map(|step| format!("<li>{}</li>", escape_html(step)))
        .collect();
    format!("<div class=\"recipe\"><strong>Recipe:</strong><ol>{steps}</ol></div>")
}

/// Render a printable HTML document of the plan and shopping list.
pub fn render_print_document(
    plan: &[DailyMealPlan],
    shopping_list: &[ShoppingListItem],
    targets: &MacroTargets,
) -> String {
    let mut html = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(html, "<!DOCTYPE html>");
    let _ = writeln!(html, "<html>\n<head>\n<meta charset=\"utf-8\">");
    let _ = writeln!(html, "<title>Meal Plan</title>\n<style>\n{PRINT_STYLE}\n</style>");
    let _ = writeln!(html, "</head>\n<body>");
    let _ = writeln!(html, "<h1>Your Custom Meal Plan</h1>");
    let _ = writeln!(
        html,
        "<p>Macro Targets: {}g protein, {}g carbs, {}g fats ({} kcal)</p>",
        targets.daily_protein,
        targets.daily_carbs,
        targets.daily_fats,
        targets.daily_calories()
    );

    let _ = writeln!(html, "<h2>Meals</h2>");
    for meal in all_meals(plan) {
        let _ = writeln!(html, "<div class=\"meal\">");
        let _ = writeln!(html, "<h3>{}</h3>", escape_html(&meal.label));
        let _ = writeln!(
            html,
            "<div class=\"item\"><strong>Protein:</strong> {}{}</div>",
            component_line(&meal.protein),
            recipe_block(&meal.protein)
        );
        let _ = writeln!(
            html,
            "<div class=\"item\"><strong>Carbs:</strong> {}{}</div>",
            component_line(&meal.carb),
            recipe_block(&meal.carb)
        );
        let _ = writeln!(html, "<div class=\"item\"><strong>Vegetables:</strong><ul>");
        for veg in &meal.vegetables {
            let _ = writeln!(html, "<li>{}{}</li>", component_line(veg), recipe_block(veg));
        }
        let _ = writeln!(html, "</ul></div>");
        let macros = meal.macros();
        let _ = writeln!(
            html,
            "<div class=\"macros\"><div><strong>Calories:</strong> {} kcal</div>\
             <div><strong>Protein:</strong> {}g</div>\
             <div><strong>Carbs:</strong> {}g</div>\
             <div><strong>Fats:</strong> {}g</div></div>",
            macros.calories.round(),
            macros.protein.round(),
            macros.carbs.round(),
            macros.fats.round()
        );
        let _ = writeln!(
            html,
            "<div><strong>Total Cooking Time:</strong> {} minutes</div>",
            meal.total_cooking_time
        );
        let _ = writeln!(html, "</div>");
    }

    let _ = writeln!(html, "<h2>Shopping List</h2>\n<div class=\"shopping-list\">");
    for item in shopping_list {
        let _ = writeln!(
            html,
            "<div><strong>{}:</strong> {}{}</div>",
            escape_html(&item.name),
            item.total.round(),
            escape_html(&item.unit)
        );
    }
    let _ = writeln!(html, "</div>\n</body>\n</html>");

    html
}

/// Write the printable document to a file.
pub fn write_print_document<P: AsRef<Path>>(
    path: P,
    plan: &[DailyMealPlan],
    shopping_list: &[ShoppingListItem],
    targets: &MacroTargets,
) -> Result<()> {
    fs::write(path, render_print_document(plan, shopping_list, targets))?;
    Ok(())
}
