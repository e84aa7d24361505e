use chrono::Local;
use quotes_core::{AppViewModel, Display, Filter, NotificationKind, NotificationView, Quote};

use super::constants::*;

/// Turns successive view models into terminal lines, printing only what changed.
#[derive(Debug, Default)]
pub struct Renderer {
    last: Option<AppViewModel>,
    timestamps: bool,
}

impl Renderer {
    pub fn new(timestamps: bool) -> Self {
        Self {
            last: None,
            timestamps,
        }
    }

    /// Forces the display area to print on the next render even if unchanged.
    pub fn invalidate_display(&mut self) {
        if let Some(last) = &mut self.last {
            last.display = Display::Blank;
        }
    }

    pub fn render(&mut self, view: &AppViewModel) -> Vec<String> {
        let mut lines = Vec::new();
        let previous = self.last.take();

        let filter_changed = previous.as_ref().map(|p| &p.filter) != Some(&view.filter);
        if filter_changed {
            lines.push(format!("Filter: {}", filter_label(&view.filter)));
        }

        let display_changed = previous.as_ref().map(|p| &p.display) != Some(&view.display);
        if display_changed {
            match &view.display {
                Display::Blank => {}
                Display::Quote(quote) => lines.extend(quote_lines(quote)),
                Display::Empty => lines.push(NO_QUOTES_TEXT.to_string()),
            }
        }

        let previous_note = previous.as_ref().and_then(|p| p.notification.as_ref());
        if let Some(note) = &view.notification {
            if previous_note != Some(note) {
                lines.push(self.notification_line(note));
            }
        }

        self.last = Some(view.clone());
        lines
    }

    fn notification_line(&self, note: &NotificationView) -> String {
        let tag = match note.kind {
            NotificationKind::Info => "info",
            NotificationKind::Error => "error",
        };
        if self.timestamps {
            format!(
                "[{}] [{tag}] {}",
                Local::now().format("%H:%M:%S"),
                note.message
            )
        } else {
            format!("[{tag}] {}", note.message)
        }
    }
}

pub fn quote_lines(quote: &Quote) -> Vec<String> {
    vec![
        format!("\"{}\"", quote.text),
        format!("  - {}", quote.category),
    ]
}

pub fn filter_label(filter: &Filter) -> &str {
    match filter {
        Filter::All => ALL_CATEGORIES_LABEL,
        Filter::Category(category) => category,
    }
}

/// Filter choices: the "all" entry followed by categories in first-seen order.
pub fn category_lines(view: &AppViewModel) -> Vec<String> {
    let mut lines = Vec::with_capacity(view.categories.len() + 1);
    let marker = |selected: bool| if selected { "*" } else { " " };
    lines.push(format!(
        "{} all ({})",
        marker(view.filter == Filter::All),
        ALL_CATEGORIES_LABEL
    ));
    for category in &view.categories {
        let selected = matches!(&view.filter, Filter::Category(c) if c == category);
        lines.push(format!("{} {category}", marker(selected)));
    }
    lines
}

pub fn last_viewed_lines(view: &AppViewModel) -> Vec<String> {
    match &view.last_viewed {
        Some(quote) => quote_lines(quote),
        None => vec!["No quote viewed yet this session.".to_string()],
    }
}
