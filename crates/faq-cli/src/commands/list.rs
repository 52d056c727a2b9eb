use faq_core::enums::ListState;
use faq_core::responses::{FaqCard, FaqListResponse};

use crate::cli::root_commands::ListArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::parse::parse_sort;
use crate::context::AppContext;
use crate::output::{output, table, table_options};

/// Handle `faqdesk list`.
pub async fn handle(args: &ListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut list = ctx.list_controller();
    list.set_sort(parse_sort(args.sort.as_deref(), args.asc)?)?;
    list.set_selected_category(args.category.clone())?;
    if let Some(term) = &args.search {
        list.set_search_term(term.clone());
    }

    let loaded = list.load().await;
    if loaded.is_ok() {
        list.settle().await?;
    }
    if let Some(id) = &args.open {
        list.toggle_faq(id);
    }

    let view = list.view();
    if flags.format == OutputFormat::Table {
        println!("{}", render_list_table(&view, table_options()));
    } else {
        output(&view, flags.format)?;
    }

    loaded?;
    Ok(())
}

/// Summary line, categories, then one row per entry with the open entry's
/// answer underneath.
fn render_list_table(view: &FaqListResponse, options: table::TableOptions) -> String {
    match view.state {
        ListState::Loading => return String::from("Loading FAQs..."),
        ListState::Error => {
            return format!(
                "Error Loading FAQs\n{}",
                view.error.as_deref().unwrap_or("Failed to fetch FAQs")
            );
        }
        ListState::Empty | ListState::Populated => {}
    }

    let mut sections = Vec::new();
    if let Some(summary) = &view.summary {
        sections.push(summary.clone());
    }
    if !view.categories.is_empty() {
        let categories = view
            .categories
            .iter()
            .map(|entry| format!("{} ({})", entry.tag, entry.count))
            .collect::<Vec<_>>()
            .join(", ");
        sections.push(format!("Categories: {categories}"));
    }

    let cards: Vec<&FaqCard> = view.left_column.iter().chain(&view.right_column).collect();
    if cards.is_empty() {
        sections.push(String::from(
            "No matching FAQs found. Please try adjusting your search or filter criteria.",
        ));
        return sections.join("\n");
    }

    let rows = cards
        .iter()
        .map(|card| {
            vec![
                if card.is_open { "▾" } else { "▸" }.to_string(),
                card.faq.id.clone(),
                card.faq.question.clone(),
                card.faq.tags.join(", "),
                card.faq.likes.to_string(),
                card.faq.dislikes.to_string(),
            ]
        })
        .collect::<Vec<_>>();
    sections.push(table::render_table(
        &["", "id", "question", "tags", "likes", "dislikes"],
        &rows,
        options,
    ));

    if let Some(open) = cards.iter().find(|card| card.is_open) {
        sections.push(format!("\n{}\n{}", open.faq.question, open.faq.answer));
    }

    sections.join("\n")
}
