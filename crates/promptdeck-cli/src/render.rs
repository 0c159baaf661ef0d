//! Terminal rendering for the catalog

use colored::Colorize;

use promptdeck::{
    CatalogView, Category, ClipboardService, Notice, NoticeLevel, Prompt, PromptRepository, COPIED_LABEL,
    MAX_TAGS,
};

/// Print the category buttons, then every visible card or the placeholder
pub fn print_catalog<R, C>(view: &CatalogView<R, C>)
where
    R: PromptRepository + ?Sized,
    C: ClipboardService + ?Sized,
{
    let filter = view.filter();

    println!("{}", category_row(filter.category));
    if !filter.search_term.is_empty() {
        println!("{} {}", "Search:".dimmed(), filter.search_term.cyan());
    }
    println!(
        "{} of {} prompts",
        view.visible().len().to_string().green(),
        view.prompts().len()
    );
    println!();

    if let Some(placeholder) = view.placeholder() {
        println!("  {}", placeholder.yellow());
        return;
    }

    for prompt in view.visible() {
        print_card(prompt, view.is_copied(prompt));
        println!();
    }
}

/// Category buttons with the active one highlighted
pub fn category_row(active: Category) -> String {
    Category::ALL_CATEGORIES
        .iter()
        .map(|category| {
            if *category == active {
                format!("[{}]", category.label()).black().on_cyan().bold().to_string()
            } else {
                format!("[{}]", category.label()).dimmed().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn print_card(prompt: &Prompt, copied: bool) {
    for line in card_lines(prompt, copied) {
        println!("{}", line);
    }
}

fn card_lines(prompt: &Prompt, copied: bool) -> Vec<String> {
    let mut lines = vec![format!(
        "{} {}",
        prompt.title.cyan().bold(),
        format!("#{}", prompt.id).dimmed()
    )];

    lines.push(format!("  {} {}", "Use case:".dimmed(), prompt.use_case));

    if !prompt.tags.is_empty() {
        let badges = prompt
            .tags
            .iter()
            .take(MAX_TAGS)
            .map(|tag| format!("[{}]", tag).magenta().to_string())
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(format!("  {}", badges));
    }

    if copied {
        lines.push(format!("  {}", COPIED_LABEL.green().bold()));
    } else {
        lines.extend(prompt.body.lines().map(|line| format!("  │ {}", line)));
    }

    lines
}

/// One-line label for selection menus
pub fn menu_label(prompt: &Prompt, copied: bool) -> String {
    if copied {
        format!("{} - {}", prompt.title, COPIED_LABEL)
    } else {
        format!("{} - {}", prompt.title, truncate_string(&first_line(&prompt.body), 50))
    }
}

fn first_line(s: &str) -> String {
    s.lines().next().unwrap_or_default().to_string()
}

pub fn print_notice(notice: &Notice) {
    let message = match notice.level {
        NoticeLevel::Info => format!("{} {}", "✓".green(), notice.message),
        NoticeLevel::Warning => format!("{} {}", "!".yellow(), notice.message.yellow()),
        NoticeLevel::Error => format!("{} {}", "✗".red(), notice.message.red()),
    };
    println!("{}", message);
}

/// Truncate string safely for UTF-8 (by char count, not bytes)
pub fn truncate_string(s: &str, max_chars: usize) -> String {
    let chars: Vec<char> = s.chars().take(max_chars).collect();
    if s.chars().count() > max_chars {
        format!("{}...", chars.into_iter().collect::<String>())
    } else {
        s.to_string()
    }
}
