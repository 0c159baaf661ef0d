//! Catalog View - Application service behind the prompt catalog screen
//!
//! Owns the catalog state, the creation form and the copy feedback, and
//! talks to the prompt store and the clipboard through their ports.

use std::sync::Arc;
use std::time::Duration;

use crate::application::{
    CatalogAction, CatalogState, CloseReason, CopyFeedback, CreationForm, Notice, COPIED_LABEL,
    FEEDBACK_DURATION,
};
use crate::domain::{Category, DomainError, Prompt, PromptFilter, RecordId};
use crate::ports::{ClipboardService, PromptRepository};

/// Catalog view settings
#[derive(Debug, Clone)]
pub struct ViewConfig {
    /// How long "Copied!" replaces a prompt body
    pub feedback_duration: Duration,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            feedback_duration: FEEDBACK_DURATION,
        }
    }
}

/// Result of a copy request that did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    /// Nothing to copy (empty body)
    Skipped,
}

/// The prompt catalog view
pub struct CatalogView<R: PromptRepository + ?Sized, C: ClipboardService + ?Sized> {
    repo: Arc<R>,
    clipboard: Arc<C>,
    clipboard_available: bool,
    state: CatalogState,
    form: CreationForm,
    feedback: CopyFeedback,
    notice: Option<Notice>,
}

impl<R: PromptRepository + ?Sized, C: ClipboardService + ?Sized> CatalogView<R, C> {
    /// Fetch the full prompt set and build the view.
    ///
    /// A failed fetch yields no view at all.
    pub async fn load(repo: Arc<R>, clipboard: Arc<C>, config: ViewConfig) -> Result<Self, DomainError> {
        let prompts = repo.list_recent().await.map_err(|e| {
            tracing::warn!("Failed to load prompts: {}", e);
            DomainError::Load(e.to_string())
        })?;

        let clipboard_available = clipboard.is_available();
        if !clipboard_available {
            tracing::warn!("Clipboard not available - copy disabled");
        }

        tracing::info!("Loaded {} prompts", prompts.len());

        Ok(Self {
            repo,
            clipboard,
            clipboard_available,
            state: CatalogState::new(prompts),
            form: CreationForm::Closed,
            feedback: CopyFeedback::new(config.feedback_duration),
            notice: None,
        })
    }

    // ============================================
    // Query
    // ============================================

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.state.reduce(CatalogAction::SearchChanged(term.into()));
    }

    pub fn set_category(&mut self, category: Category) {
        self.state.reduce(CatalogAction::CategoryChanged(category));
    }

    pub fn filter(&self) -> &PromptFilter {
        self.state.filter()
    }

    /// Every loaded or created prompt, newest first
    pub fn prompts(&self) -> &[Prompt] {
        self.state.full_set()
    }

    /// Prompts matching the current search and category
    pub fn visible(&self) -> &[Prompt] {
        self.state.filtered_view()
    }

    pub fn placeholder(&self) -> Option<&'static str> {
        self.state.placeholder()
    }

    pub fn find(&self, id: &RecordId) -> Option<&Prompt> {
        self.state.full_set().iter().find(|p| &p.id == id)
    }

    /// Whether the prompt's card is showing "Copied!"
    pub fn is_copied(&self, prompt: &Prompt) -> bool {
        self.feedback.is_showing(&prompt.id)
    }

    /// Text shown in a prompt's card body slot
    pub fn card_body<'a>(&self, prompt: &'a Prompt) -> &'a str {
        if self.is_copied(prompt) {
            COPIED_LABEL
        } else {
            &prompt.body
        }
    }

    // ============================================
    // Creation
    // ============================================

    pub fn open_form(&mut self) {
        self.form.open();
    }

    pub fn close_form(&mut self, reason: CloseReason) {
        self.form.close(reason);
    }

    pub fn form(&self) -> &CreationForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut CreationForm {
        &mut self.form
    }

    /// Validate and persist the open draft.
    ///
    /// The prompt is added to the catalog only after the store confirms the
    /// insert. On any failure the form stays open with its fields intact.
    pub async fn submit(&mut self) -> Result<Prompt, DomainError> {
        let draft = self
            .form
            .draft()
            .ok_or_else(|| DomainError::InvalidState("creation form is not open".to_string()))?;

        let new = match draft.to_new_prompt() {
            Ok(new) => new,
            Err(e) => {
                self.notice = Some(Notice::warning(e.to_string()));
                return Err(e);
            }
        };

        let persisted = match self.repo.create(&new).await {
            Ok(persisted) => persisted,
            Err(e) => {
                tracing::warn!("Failed to save prompt '{}': {}", new.title, e);
                self.notice = Some(Notice::error(format!("Could not save prompt: {}", e)));
                return Err(e);
            }
        };

        let prompt = match persisted {
            Some(prompt) => prompt,
            None => {
                tracing::warn!("Store did not return the saved prompt - keeping a pending copy");
                Prompt::pending(new)
            }
        };

        self.state.reduce(CatalogAction::Prepended(prompt.clone()));
        self.form.close(CloseReason::Saved);
        self.notice = Some(Notice::info(format!("Saved \"{}\"", prompt.title)));

        tracing::info!("Created prompt: {} ({})", prompt.title, prompt.id);

        Ok(prompt)
    }

    // ============================================
    // Clipboard
    // ============================================

    pub fn clipboard_available(&self) -> bool {
        self.clipboard_available
    }

    /// Copy a prompt's body and show "Copied!" on its card
    pub async fn copy_body(&mut self, id: &RecordId) -> Result<CopyOutcome, DomainError> {
        if !self.clipboard_available {
            self.notice = Some(
                Notice::error("Copy is not supported here: no clipboard is available").blocking(),
            );
            return Err(DomainError::ClipboardUnavailable);
        }

        let body = self
            .find(id)
            .map(|p| p.body.clone())
            .ok_or_else(|| DomainError::not_found("Prompt", id))?;

        if body.is_empty() {
            return Ok(CopyOutcome::Skipped);
        }

        self.feedback.clear();

        match self.clipboard.write_text(&body).await {
            Ok(()) => {
                self.feedback.show(*id);
                tracing::debug!(%id, "Copied prompt body");
                Ok(CopyOutcome::Copied)
            }
            Err(e) => {
                tracing::warn!("Failed to copy prompt {}: {}", id, e);
                self.notice = Some(Notice::error(format!("Failed to copy: {}", e)).persistent());
                Err(e)
            }
        }
    }

    /// Record currently showing "Copied!"
    pub fn feedback_id(&self) -> Option<RecordId> {
        self.feedback.current()
    }

    // ============================================
    // Notices
    // ============================================

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{NoticeLevel, NO_MATCHES_MESSAGE};
    use crate::domain::NewPrompt;
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Clone, Copy)]
    enum CreateMode {
        Echo,
        Silent,
        Fail,
    }

    struct FakeRepo {
        prompts: Vec<Prompt>,
        fail_list: bool,
        mode: CreateMode,
        creates: AtomicUsize,
        next_id: AtomicUsize,
    }

    impl FakeRepo {
        fn new(prompts: Vec<Prompt>) -> Self {
            Self {
                prompts,
                fail_list: false,
                mode: CreateMode::Echo,
                creates: AtomicUsize::new(0),
                next_id: AtomicUsize::new(100),
            }
        }

        fn with_mode(mut self, mode: CreateMode) -> Self {
            self.mode = mode;
            self
        }
    }

    #[async_trait]
    impl PromptRepository for FakeRepo {
        async fn list_recent(&self) -> Result<Vec<Prompt>, DomainError> {
            if self.fail_list {
                return Err(DomainError::Repository("connection refused".to_string()));
            }
            Ok(self.prompts.clone())
        }

        async fn create(&self, new: &NewPrompt) -> Result<Option<Prompt>, DomainError> {
            self.creates.fetch_add(1, Ordering::SeqCst);
            match self.mode {
                CreateMode::Echo => {
                    let id = self.next_id.fetch_add(1, Ordering::SeqCst) as i64;
                    Ok(Some(Prompt {
                        id: RecordId::Confirmed(id),
                        title: new.title.clone(),
                        body: new.body.clone(),
                        use_case: new.use_case.clone(),
                        tags: new.tags.clone(),
                        // Older than everything loaded; must still land first
                        updated_at: Utc.with_ymd_and_hms(1999, 1, 1, 0, 0, 0).unwrap(),
                    }))
                }
                CreateMode::Silent => Ok(None),
                CreateMode::Fail => Err(DomainError::Repository("insert failed".to_string())),
            }
        }
    }

    struct FakeClipboard {
        available: bool,
        fail: AtomicBool,
        written: Mutex<Vec<String>>,
    }

    impl FakeClipboard {
        fn new(available: bool) -> Self {
            Self {
                available,
                fail: AtomicBool::new(false),
                written: Mutex::new(Vec::new()),
            }
        }

        fn writes(&self) -> Vec<String> {
            self.written.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ClipboardService for FakeClipboard {
        fn is_available(&self) -> bool {
            self.available
        }

        async fn write_text(&self, text: &str) -> Result<(), DomainError> {
            if self.fail.load(Ordering::SeqCst) {
                return Err(DomainError::Clipboard("write rejected".to_string()));
            }
            self.written.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    fn prompt(id: i64, title: &str, body: &str, tags: &[&str]) -> Prompt {
        Prompt {
            id: RecordId::Confirmed(id),
            title: title.to_string(),
            body: body.to_string(),
            use_case: "Z".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            updated_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    async fn view_with(
        repo: FakeRepo,
        clipboard: FakeClipboard,
    ) -> (CatalogView<FakeRepo, FakeClipboard>, Arc<FakeRepo>, Arc<FakeClipboard>) {
        let repo = Arc::new(repo);
        let clipboard = Arc::new(clipboard);
        let view = CatalogView::load(repo.clone(), clipboard.clone(), ViewConfig::default())
            .await
            .unwrap();
        (view, repo, clipboard)
    }

    fn fill(view: &mut CatalogView<FakeRepo, FakeClipboard>, title: &str, tags: &str) {
        view.open_form();
        let draft = view.form_mut().draft_mut().unwrap();
        draft.title = title.to_string();
        draft.body = "B".to_string();
        draft.use_case = "U".to_string();
        draft.tags_input = tags.to_string();
    }

    #[tokio::test]
    async fn test_load_failure_is_fatal() {
        let mut repo = FakeRepo::new(vec![prompt(1, "X", "Y", &[])]);
        repo.fail_list = true;
        let result = CatalogView::load(
            Arc::new(repo),
            Arc::new(FakeClipboard::new(true)),
            ViewConfig::default(),
        )
        .await;

        assert!(matches!(result, Err(DomainError::Load(_))));
    }

    #[tokio::test]
    async fn test_category_scenario() {
        let repo = FakeRepo::new(vec![prompt(1, "X", "Y", &["admin"])]);
        let (mut view, _, _) = view_with(repo, FakeClipboard::new(true)).await;

        view.set_category(Category::Admin);
        assert_eq!(view.visible().len(), 1);
        assert_eq!(view.placeholder(), None);

        view.set_category(Category::Copywriting);
        assert!(view.visible().is_empty());
        assert_eq!(view.placeholder(), Some(NO_MATCHES_MESSAGE));
    }

    #[tokio::test]
    async fn test_search_narrows_view() {
        let repo = FakeRepo::new(vec![prompt(1, "Alpha", "one", &[]), prompt(2, "Beta", "two", &[])]);
        let (mut view, _, _) = view_with(repo, FakeClipboard::new(true)).await;

        view.set_search("TWO");
        assert_eq!(view.visible().len(), 1);
        assert_eq!(view.visible()[0].title, "Beta");
        assert_eq!(view.prompts().len(), 2);
    }

    #[tokio::test]
    async fn test_submit_caps_tags_and_prepends() {
        let repo = FakeRepo::new(vec![prompt(1, "X", "Y", &[])]);
        let (mut view, repo, _) = view_with(repo, FakeClipboard::new(true)).await;

        fill(&mut view, "T", "a, b, c, d");
        let created = view.submit().await.unwrap();

        assert_eq!(created.tags, vec!["a", "b", "c"]);
        assert_eq!(view.prompts()[0].id, created.id);
        assert_eq!(view.prompts().len(), 2);
        assert_eq!(view.visible()[0].id, created.id);
        assert!(!view.form().is_open());
        assert_eq!(repo.creates.load(Ordering::SeqCst), 1);
        assert_eq!(view.notice().map(|n| n.level), Some(NoticeLevel::Info));
    }

    #[tokio::test]
    async fn test_submit_rejects_empty_title_before_persist() {
        let repo = FakeRepo::new(vec![prompt(1, "X", "Y", &[])]);
        let (mut view, repo, _) = view_with(repo, FakeClipboard::new(true)).await;

        fill(&mut view, "", "a");
        let result = view.submit().await;

        assert!(matches!(result, Err(DomainError::Validation(_))));
        assert_eq!(repo.creates.load(Ordering::SeqCst), 0);
        assert_eq!(view.prompts().len(), 1);
        assert!(view.form().is_open());
        assert_eq!(view.form().draft().unwrap().body, "B");
        assert_eq!(view.notice().map(|n| n.level), Some(NoticeLevel::Warning));
    }

    #[tokio::test]
    async fn test_submit_failure_keeps_form_for_retry() {
        let repo = FakeRepo::new(vec![]).with_mode(CreateMode::Fail);
        let (mut view, _, _) = view_with(repo, FakeClipboard::new(true)).await;

        fill(&mut view, "T", "x, y");
        let result = view.submit().await;

        assert!(matches!(result, Err(DomainError::Repository(_))));
        assert!(view.prompts().is_empty());
        let draft = view.form().draft().unwrap();
        assert_eq!(draft.title, "T");
        assert_eq!(draft.tags_input, "x, y");
        let notice = view.notice().unwrap();
        assert_eq!(notice.level, NoticeLevel::Error);
        assert!(!notice.blocking);
    }

    #[tokio::test]
    async fn test_submit_without_echo_adds_pending_record() {
        let repo = FakeRepo::new(vec![prompt(1, "X", "Y", &[])]).with_mode(CreateMode::Silent);
        let (mut view, _, _) = view_with(repo, FakeClipboard::new(true)).await;

        fill(&mut view, "T", "a");
        let created = view.submit().await.unwrap();

        assert!(created.id.is_pending());
        assert_eq!(view.prompts()[0], created);
        assert_eq!(created.title, "T");
        assert!(!view.form().is_open());
    }

    #[tokio::test]
    async fn test_submit_requires_open_form() {
        let (mut view, repo, _) = view_with(FakeRepo::new(vec![]), FakeClipboard::new(true)).await;
        assert!(matches!(view.submit().await, Err(DomainError::InvalidState(_))));
        assert_eq!(repo.creates.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_cancel_discards_draft() {
        let (mut view, _, _) = view_with(FakeRepo::new(vec![]), FakeClipboard::new(true)).await;
        fill(&mut view, "T", "");
        view.close_form(CloseReason::Escape);
        view.open_form();
        assert_eq!(view.form().draft().unwrap().title, "");
    }

    #[tokio::test(start_paused = true)]
    async fn test_copy_then_copy_other_only_latest_shows() {
        let repo = FakeRepo::new(vec![prompt(1, "A", "body a", &[]), prompt(2, "B", "body b", &[])]);
        let (mut view, _, clipboard) = view_with(repo, FakeClipboard::new(true)).await;
        let a = RecordId::Confirmed(1);
        let b = RecordId::Confirmed(2);

        assert_eq!(view.copy_body(&a).await.unwrap(), CopyOutcome::Copied);
        assert_eq!(view.copy_body(&b).await.unwrap(), CopyOutcome::Copied);

        assert_eq!(view.feedback_id(), Some(b));
        let card_a = view.find(&a).unwrap().clone();
        let card_b = view.find(&b).unwrap().clone();
        assert_eq!(view.card_body(&card_a), "body a");
        assert_eq!(view.card_body(&card_b), COPIED_LABEL);
        assert_eq!(clipboard.writes(), vec!["body a", "body b"]);

        tokio::time::sleep(FEEDBACK_DURATION + Duration::from_millis(10)).await;
        assert_eq!(view.feedback_id(), None);
        assert_eq!(view.card_body(&card_b), "body b");
    }

    #[tokio::test]
    async fn test_copy_without_capability_leaves_feedback_alone() {
        let repo = FakeRepo::new(vec![prompt(1, "A", "body a", &[])]);
        let (mut view, _, clipboard) = view_with(repo, FakeClipboard::new(false)).await;

        let result = view.copy_body(&RecordId::Confirmed(1)).await;

        assert!(matches!(result, Err(DomainError::ClipboardUnavailable)));
        assert_eq!(view.feedback_id(), None);
        assert!(clipboard.writes().is_empty());
        assert!(view.notice().unwrap().blocking);
        assert!(!view.clipboard_available());
    }

    #[tokio::test]
    async fn test_copy_empty_body_is_noop() {
        let repo = FakeRepo::new(vec![prompt(1, "A", "", &[])]);
        let (mut view, _, clipboard) = view_with(repo, FakeClipboard::new(true)).await;

        let outcome = view.copy_body(&RecordId::Confirmed(1)).await.unwrap();

        assert_eq!(outcome, CopyOutcome::Skipped);
        assert!(clipboard.writes().is_empty());
        assert!(view.notice().is_none());
    }

    #[tokio::test]
    async fn test_copy_failure_is_persistent_notice() {
        let repo = FakeRepo::new(vec![prompt(1, "A", "body a", &[])]);
        let clipboard = FakeClipboard::new(true);
        clipboard.fail.store(true, Ordering::SeqCst);
        let (mut view, _, _) = view_with(repo, clipboard).await;

        let result = view.copy_body(&RecordId::Confirmed(1)).await;

        assert!(matches!(result, Err(DomainError::Clipboard(_))));
        assert_eq!(view.feedback_id(), None);
        let notice = view.dismiss_notice().unwrap();
        assert!(notice.persistent);
        assert!(view.notice().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_copy_clears_earlier_feedback() {
        let repo = FakeRepo::new(vec![prompt(1, "A", "body a", &[]), prompt(2, "B", "body b", &[])]);
        let (mut view, _, clipboard) = view_with(repo, FakeClipboard::new(true)).await;
        let a = RecordId::Confirmed(1);

        view.copy_body(&a).await.unwrap();
        assert_eq!(view.feedback_id(), Some(a));

        clipboard.fail.store(true, Ordering::SeqCst);
        let result = view.copy_body(&RecordId::Confirmed(2)).await;

        assert!(matches!(result, Err(DomainError::Clipboard(_))));
        assert_eq!(view.feedback_id(), None);
        let card_a = view.find(&a).unwrap().clone();
        assert_eq!(view.card_body(&card_a), "body a");
        assert!(view.notice().unwrap().persistent);
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_body_copy_keeps_earlier_feedback() {
        let repo = FakeRepo::new(vec![prompt(1, "A", "body a", &[]), prompt(2, "Empty", "", &[])]);
        let (mut view, _, clipboard) = view_with(repo, FakeClipboard::new(true)).await;
        let a = RecordId::Confirmed(1);

        view.copy_body(&a).await.unwrap();
        let outcome = view.copy_body(&RecordId::Confirmed(2)).await.unwrap();

        assert_eq!(outcome, CopyOutcome::Skipped);
        assert_eq!(view.feedback_id(), Some(a));
        assert_eq!(clipboard.writes(), vec!["body a"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_is_copied_tracks_feedback_not_body_text() {
        let repo = FakeRepo::new(vec![prompt(1, "A", COPIED_LABEL, &[]), prompt(2, "B", "body b", &[])]);
        let (mut view, _, _) = view_with(repo, FakeClipboard::new(true)).await;
        let literal = view.find(&RecordId::Confirmed(1)).unwrap().clone();
        let other = view.find(&RecordId::Confirmed(2)).unwrap().clone();

        assert!(!view.is_copied(&literal));

        view.copy_body(&other.id).await.unwrap();
        assert!(view.is_copied(&other));
        assert!(!view.is_copied(&literal));
    }

    #[tokio::test]
    async fn test_copy_unknown_id() {
        let (mut view, _, _) = view_with(FakeRepo::new(vec![]), FakeClipboard::new(true)).await;
        let result = view.copy_body(&RecordId::Confirmed(9)).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }
}
