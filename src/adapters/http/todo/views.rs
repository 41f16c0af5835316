//! HTML views for the to-do pages.
//!
//! The markup is generated directly; item text is escaped at render
//! time. Each entry carries its current position in the "Done" form
//! action, so positions on the page always match the snapshot they were
//! rendered from.

use crate::domain::todo::TodoItem;

/// Render the index page: the item list plus the add form.
pub fn render_index(items: &[TodoItem]) -> String {
    let mut page = String::with_capacity(512);
    page.push_str(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>Ticklist</title>\n\
         </head>\n\
         <body>\n\
         <h1>To-do</h1>\n",
    );

    if items.is_empty() {
        page.push_str("<p>Nothing to do.</p>\n");
    } else {
        page.push_str("<ul>\n");
        for (index, item) in items.iter().enumerate() {
            page.push_str(&format!(
                "<li>{}\n\
                 <form method=\"post\" action=\"/done/{}\">\n\
                 <button type=\"submit\">Done</button>\n\
                 </form>\n\
                 </li>\n",
                escape(item.text()),
                index,
            ));
        }
        page.push_str("</ul>\n");
    }

    page.push_str(
        "<form method=\"post\" action=\"/add\">\n\
         <input type=\"text\" name=\"item\" autofocus>\n\
         <button type=\"submit\">Add</button>\n\
         </form>\n\
         </body>\n\
         </html>\n",
    );
    page
}

/// Minimal HTML escaping for text nodes and attribute values.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
