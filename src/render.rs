//! Turning pages into terminal output.

use crate::browse::{Page, ResultsTable, SearchForm, SearchPage, ShowPage};
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table, presets};

/// Renders pages produced by the browse controller.
pub trait Renderer {
    fn render(&self, page: &Page) -> String;
}

/// Plain-text renderer for terminals.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn render(&self, page: &Page) -> String {
        match page {
            Page::Search(search) => render_search(search),
            Page::Show(show) => render_show(show),
        }
    }
}

fn list_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            headers
                .iter()
                .map(|h| Cell::new(h).set_alignment(CellAlignment::Left)),
        );
    table
}

fn render_form(form: &SearchForm) -> String {
    format!(
        "{}: [{}]  ({})",
        SearchForm::FIELD_LABEL,
        form.default_keywords.as_deref().unwrap_or_default(),
        SearchForm::SUBMIT_LABEL
    )
}

fn render_results(results: &ResultsTable) -> String {
    if results.is_empty() {
        return results.empty.to_string();
    }

    let mut table = list_table(&results.header);
    for row in &results.rows {
        table.add_row(vec![
            Cell::new(row.thumbnail.as_deref().unwrap_or("-")),
            Cell::new(row.id).set_alignment(CellAlignment::Right),
            Cell::new(format!("{} <{}>", row.title, row.link)),
        ]);
    }
    table.to_string()
}

fn render_search(page: &SearchPage) -> String {
    let mut out = render_form(&page.form);

    if let Some(results) = &page.results {
        out.push_str("\n\n");
        out.push_str(&render_results(results));
    }

    out
}

fn render_show(page: &ShowPage) -> String {
    let show = &page.show;
    let mut out = String::new();

    out.push_str(&show.name);
    out.push('\n');
    out.push_str(&"=".repeat(show.name.chars().count()));
    out.push('\n');

    let mut field = |label: &str, value: Option<&str>| {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            out.push_str(&format!("{}: {}\n", label, value));
        }
    };
    field("ID", Some(show.id.to_string().as_str()));
    field("Language", show.language.as_deref());
    field("Genres", Some(show.genres.join(", ").as_str()));
    field("Status", show.status.as_deref());
    field("Premiered", show.premiered.as_deref());
    field("Image", show.image.as_ref().map(|i| i.original.as_str()));

    let summary = page.summary.as_str();
    if !summary.is_empty() {
        out.push('\n');
        out.push_str(summary);
        out.push('\n');
    }

    out.push_str("\nCast\n");
    if show.cast.is_empty() {
        out.push_str("No cast information.");
    } else {
        let mut table = list_table(&["Person", "Character"]);
        for member in &show.cast {
            let mut character = member.character.name.clone();
            if member.voice {
                character.push_str(" (voice)");
            }
            table.add_row(vec![member.person.name.as_str(), character.as_str()]);
        }
        out.push_str(&table.to_string());
    }

    out
}
