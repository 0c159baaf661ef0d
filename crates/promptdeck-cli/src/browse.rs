//! Interactive flows: the creation form and the browse loop

use anyhow::{bail, Context, Result};
use colored::Colorize;
use dialoguer::{Confirm, Editor, Input, Select};

use promptdeck::{
    CatalogView, Category, ClipboardService, CloseReason, CopyOutcome, DomainError, FormDraft, Prompt,
    PromptRepository, RecordId,
};

use crate::render::{menu_label, print_card, print_catalog, print_notice};

/// Field values supplied up front (flags or file)
#[derive(Debug, Default, Clone)]
pub struct FormInput {
    pub title: Option<String>,
    pub body: Option<String>,
    pub use_case: Option<String>,
    pub tags: Option<String>,
}

/// Show the current notice; blocking notices wait for acknowledgement and
/// transient ones are dismissed once shown.
pub fn show_notice<R, C>(view: &mut CatalogView<R, C>, interactive: bool) -> Result<()>
where
    R: PromptRepository + ?Sized,
    C: ClipboardService + ?Sized,
{
    let Some(notice) = view.notice().cloned() else {
        return Ok(());
    };

    print_notice(&notice);

    if notice.blocking {
        if interactive {
            Confirm::new()
                .with_prompt("OK")
                .default(true)
                .show_default(false)
                .interact()
                .context("Failed to read input")?;
        }
        view.dismiss_notice();
    } else if !notice.persistent {
        view.dismiss_notice();
    }

    Ok(())
}

/// Open the creation form, fill it and submit.
///
/// Returns `Ok(None)` when the user abandons the form. Without a terminal
/// any failure is returned as an error.
pub async fn run_form<R, C>(view: &mut CatalogView<R, C>, input: FormInput, interactive: bool) -> Result<Option<Prompt>>
where
    R: PromptRepository + ?Sized,
    C: ClipboardService + ?Sized,
{
    view.open_form();

    if let Some(draft) = view.form_mut().draft_mut() {
        fill_draft(draft, input, interactive)?;
    }

    loop {
        if interactive {
            let save = Confirm::new()
                .with_prompt("Save this prompt?")
                .default(true)
                .interact_opt()
                .context("Failed to read input")?;

            match save {
                Some(true) => {}
                Some(false) => {
                    view.close_form(CloseReason::Cancel);
                    return Ok(None);
                }
                None => {
                    view.close_form(CloseReason::Escape);
                    return Ok(None);
                }
            }
        }

        let err = match view.submit().await {
            Ok(prompt) => {
                show_notice(view, interactive)?;
                return Ok(Some(prompt));
            }
            Err(e) => e,
        };

        show_notice(view, interactive)?;

        if !interactive {
            view.close_form(CloseReason::Cancel);
            bail!(err);
        }

        match err {
            DomainError::Validation(_) => {
                if let Some(draft) = view.form_mut().draft_mut() {
                    prompt_missing(draft)?;
                }
            }
            _ => {
                let retry = Confirm::new()
                    .with_prompt("Retry?")
                    .default(true)
                    .interact()
                    .context("Failed to read input")?;
                if !retry {
                    view.close_form(CloseReason::Cancel);
                    return Ok(None);
                }
            }
        }
    }
}

fn fill_draft(draft: &mut FormDraft, input: FormInput, interactive: bool) -> Result<()> {
    draft.title = input.title.unwrap_or_default();
    draft.body = input.body.unwrap_or_default();
    draft.use_case = input.use_case.unwrap_or_default();

    let tags_given = input.tags.is_some();
    draft.tags_input = input.tags.unwrap_or_default();

    if !interactive {
        return Ok(());
    }

    prompt_missing(draft)?;

    if !tags_given {
        draft.tags_input = Input::new()
            .with_prompt("Tags (comma-separated, up to 3)")
            .allow_empty(true)
            .interact_text()
            .context("Failed to read input")?;
    }

    Ok(())
}

/// Ask again for every required field that is still empty
fn prompt_missing(draft: &mut FormDraft) -> Result<()> {
    if draft.title.is_empty() {
        draft.title = read_line("Title")?;
    }
    if draft.body.is_empty() {
        draft.body = read_body()?;
    }
    if draft.use_case.is_empty() {
        draft.use_case = read_line("Use case")?;
    }
    Ok(())
}

fn read_line(prompt: &str) -> Result<String> {
    Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .context("Failed to read input")
}

fn read_body() -> Result<String> {
    println!("{}", "Opening editor for the prompt body...".dimmed());
    let body = Editor::new()
        .extension(".md")
        .edit("")
        .context("Failed to open editor")?
        .unwrap_or_default();

    Ok(body.strip_suffix('\n').map(str::to_string).unwrap_or(body))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Search,
    Category,
    Add,
    Copy,
    DismissNotice,
    Quit,
}

impl Action {
    fn label(&self) -> &'static str {
        match self {
            Action::Search => "Search",
            Action::Category => "Category",
            Action::Add => "Add prompt",
            Action::Copy => "Copy prompt",
            Action::DismissNotice => "Dismiss notice",
            Action::Quit => "Quit",
        }
    }
}

/// Interactive catalog loop
pub async fn browse<R, C>(view: &mut CatalogView<R, C>) -> Result<()>
where
    R: PromptRepository + ?Sized,
    C: ClipboardService + ?Sized,
{
    loop {
        println!();
        print_catalog(view);
        show_notice(view, true)?;

        let mut actions = vec![Action::Search, Action::Category, Action::Add, Action::Copy];
        if view.notice().is_some() {
            actions.push(Action::DismissNotice);
        }
        actions.push(Action::Quit);

        let labels: Vec<&str> = actions.iter().map(Action::label).collect();
        let choice = Select::new()
            .with_prompt("What next?")
            .items(&labels)
            .default(0)
            .interact_opt()
            .context("Failed to read selection")?;

        let Some(index) = choice else {
            break;
        };

        match actions[index] {
            Action::Search => {
                let term: String = Input::new()
                    .with_prompt("Search")
                    .with_initial_text(view.filter().search_term.clone())
                    .allow_empty(true)
                    .interact_text()
                    .context("Failed to read input")?;
                view.set_search(term);
            }
            Action::Category => {
                let labels: Vec<&str> = Category::ALL_CATEGORIES.iter().map(Category::label).collect();
                let current = Category::ALL_CATEGORIES
                    .iter()
                    .position(|c| *c == view.filter().category)
                    .unwrap_or(0);

                if let Some(i) = Select::new()
                    .with_prompt("Category")
                    .items(&labels)
                    .default(current)
                    .interact_opt()
                    .context("Failed to read selection")?
                {
                    view.set_category(Category::ALL_CATEGORIES[i]);
                }
            }
            Action::Add => {
                if let Some(prompt) = run_form(view, FormInput::default(), true).await? {
                    print_card(&prompt, view.is_copied(&prompt));
                }
            }
            Action::Copy => {
                if let Some(id) = pick_prompt(view)? {
                    copy_prompt(view, &id).await;
                }
            }
            Action::DismissNotice => {
                view.dismiss_notice();
            }
            Action::Quit => break,
        }
    }

    Ok(())
}

fn pick_prompt<R, C>(view: &CatalogView<R, C>) -> Result<Option<RecordId>>
where
    R: PromptRepository + ?Sized,
    C: ClipboardService + ?Sized,
{
    if view.visible().is_empty() {
        println!("{}", view.placeholder().unwrap_or_default().yellow());
        return Ok(None);
    }

    let items: Vec<String> = view
        .visible()
        .iter()
        .map(|p| menu_label(p, view.is_copied(p)))
        .collect();

    let choice = Select::new()
        .with_prompt("Copy which prompt?")
        .items(&items)
        .default(0)
        .interact_opt()
        .context("Failed to read selection")?;

    Ok(choice.map(|i| view.visible()[i].id))
}

/// Copy and report; failures surface through the view's notice
pub async fn copy_prompt<R, C>(view: &mut CatalogView<R, C>, id: &RecordId) -> Option<CopyOutcome>
where
    R: PromptRepository + ?Sized,
    C: ClipboardService + ?Sized,
{
    match view.copy_body(id).await {
        Ok(CopyOutcome::Skipped) => {
            println!("{}", "Nothing to copy: this prompt has no body".dimmed());
            Some(CopyOutcome::Skipped)
        }
        Ok(CopyOutcome::Copied) => Some(CopyOutcome::Copied),
        Err(DomainError::NotFound { .. }) => {
            println!("{} No prompt with id {}", "✗".red(), id);
            None
        }
        Err(e) => {
            tracing::debug!("Copy failed: {}", e);
            None
        }
    }
}
