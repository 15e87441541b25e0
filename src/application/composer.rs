//! The post editor/list controller.
//!
//! Holds one draft, one locally cached list seeded from the feed, and
//! an edit cursor. At most one entry is being edited at a time; the
//! draft and the list are owned exclusively by this service.

use std::sync::Arc;

use tracing::debug;

use crate::domain::posts::{Draft, DraftPatch, Post};

use super::report::{ComposerFailure, FailureReporter, SyncOp};
use super::store::{PostFeed, PostStore};

/// Whether submit would append a new entry or overwrite the edited one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposerMode {
    Create,
    Update,
}

pub struct ComposerService {
    feed: Arc<dyn PostFeed>,
    store: Arc<dyn PostStore>,
    reporter: Arc<dyn FailureReporter>,
    draft: Draft,
    posts: Vec<Post>,
    editing: Option<usize>,
}

impl ComposerService {
    pub fn new(
        feed: Arc<dyn PostFeed>,
        store: Arc<dyn PostStore>,
        reporter: Arc<dyn FailureReporter>,
    ) -> Self {
        Self {
            feed,
            store,
            reporter,
            draft: Draft::default(),
            posts: Vec::new(),
            editing: None,
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn editing(&self) -> Option<usize> {
        self.editing
    }

    pub fn mode(&self) -> ComposerMode {
        if self.editing.is_some() {
            ComposerMode::Update
        } else {
            ComposerMode::Create
        }
    }

    /// Replace the cached list with the remote collection, wholesale.
    /// On failure the cache, draft, and cursor are left untouched and
    /// the failure goes to the reporter.
    pub async fn refresh(&mut self) {
        match self.feed.fetch_all().await {
            Ok(posts) => {
                debug!(count = posts.len(), "replaced cached posts");
                self.posts = posts;
            }
            Err(err) => self.reporter.report(&ComposerFailure::Fetch(err)),
        }
    }

    /// Merge one field into the draft. The draft is swapped for the
    /// patched copy; every other field keeps its value.
    pub fn apply(&mut self, patch: DraftPatch) {
        self.draft = self.draft.with(patch);
    }

    /// Flip membership of `tag` in the draft's tag list.
    pub fn toggle_tag(&mut self, tag: &str) {
        let tags = self.draft.toggled_tags(tag);
        self.apply(DraftPatch::Tags(tags));
    }

    /// Commit the draft: append in create mode, overwrite in place in
    /// edit mode. The draft and cursor reset either way. The store is
    /// told afterwards; its failures are reported, never returned, and
    /// the local mutation stands regardless.
    pub async fn submit(&mut self) {
        let post = Post::from(&self.draft);
        match self.editing {
            None => {
                self.posts.push(post.clone());
                if let Err(err) = self.store.create(&post).await {
                    self.reporter.report(&ComposerFailure::Sync {
                        op: SyncOp::Create,
                        source: err,
                    });
                }
            }
            // The cursor can go stale if a refresh shrank the list
            // underneath an open edit.
            Some(index) => match self.posts.get_mut(index) {
                Some(slot) => {
                    *slot = post.clone();
                    if let Err(err) = self.store.update(index, &post).await {
                        self.reporter.report(&ComposerFailure::Sync {
                            op: SyncOp::Update,
                            source: err,
                        });
                    }
                }
                None => self.reporter.report(&ComposerFailure::OutOfRange {
                    op: SyncOp::Update,
                    index,
                }),
            },
        }
        self.draft = Draft::default();
        self.editing = None;
    }

    /// Drop the entry at `index`; later entries shift down by one.
    pub async fn remove(&mut self, index: usize) {
        if index >= self.posts.len() {
            self.reporter.report(&ComposerFailure::OutOfRange {
                op: SyncOp::Delete,
                index,
            });
            return;
        }
        self.posts.remove(index);
        if let Err(err) = self.store.delete(index).await {
            self.reporter.report(&ComposerFailure::Sync {
                op: SyncOp::Delete,
                source: err,
            });
        }
    }

    /// Copy the entry at `index` into the draft, raw, and mark it as
    /// the one being edited. Out-of-range indices leave all state
    /// unchanged.
    pub fn edit(&mut self, index: usize) {
        if let Some(post) = self.posts.get(index) {
            self.draft = Draft::from(post);
            self.editing = Some(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::application::store::RemoteError;
    use crate::domain::posts::Category;

    struct StubFeed {
        posts: Vec<Post>,
        fail: bool,
    }

    impl StubFeed {
        fn with(posts: Vec<Post>) -> Self {
            Self { posts, fail: false }
        }

        fn failing() -> Self {
            Self {
                posts: Vec::new(),
                fail: true,
            }
        }
    }

    #[async_trait]
    impl PostFeed for StubFeed {
        async fn fetch_all(&self) -> Result<Vec<Post>, RemoteError> {
            if self.fail {
                return Err(RemoteError::from_transport("connection refused"));
            }
            Ok(self.posts.clone())
        }
    }

    #[derive(Default)]
    struct RecordingStore {
        ops: Mutex<Vec<String>>,
        fail: bool,
    }

    impl RecordingStore {
        fn failing() -> Self {
            Self {
                ops: Mutex::new(Vec::new()),
                fail: true,
            }
        }

        fn record(&self, op: String) -> Result<(), RemoteError> {
            self.ops.lock().expect("store lock").push(op);
            if self.fail {
                return Err(RemoteError::Status {
                    status: 500,
                    body: "boom".into(),
                });
            }
            Ok(())
        }

        fn ops(&self) -> Vec<String> {
            self.ops.lock().expect("store lock").clone()
        }
    }

    #[async_trait]
    impl PostStore for RecordingStore {
        async fn create(&self, post: &Post) -> Result<(), RemoteError> {
            self.record(format!("create {}", post.title))
        }

        async fn update(&self, index: usize, post: &Post) -> Result<(), RemoteError> {
            self.record(format!("update {index} {}", post.title))
        }

        async fn delete(&self, index: usize) -> Result<(), RemoteError> {
            self.record(format!("delete {index}"))
        }
    }

    #[derive(Default)]
    struct RecordingReporter {
        failures: Mutex<Vec<String>>,
    }

    impl RecordingReporter {
        fn failures(&self) -> Vec<String> {
            self.failures.lock().expect("reporter lock").clone()
        }
    }

    impl FailureReporter for RecordingReporter {
        fn report(&self, failure: &ComposerFailure) {
            self.failures
                .lock()
                .expect("reporter lock")
                .push(failure.to_string());
        }
    }

    fn post(title: &str) -> Post {
        Post {
            title: title.into(),
            content: "content".into(),
            image: None,
            category: Some(Category::News),
            tags: vec!["html".into()],
        }
    }

    fn composer_with(
        feed: StubFeed,
    ) -> (
        ComposerService,
        Arc<RecordingStore>,
        Arc<RecordingReporter>,
    ) {
        let store = Arc::new(RecordingStore::default());
        let reporter = Arc::new(RecordingReporter::default());
        let composer = ComposerService::new(Arc::new(feed), store.clone(), reporter.clone());
        (composer, store, reporter)
    }

    #[test]
    fn apply_is_last_write_wins_per_field() {
        let (mut composer, _, _) = composer_with(StubFeed::with(Vec::new()));

        composer.apply(DraftPatch::Title("first".into()));
        composer.apply(DraftPatch::Content("body".into()));
        composer.apply(DraftPatch::Title("second".into()));
        composer.apply(DraftPatch::Category(Some(Category::Sport)));

        let draft = composer.draft();
        assert_eq!(draft.title, "second");
        assert_eq!(draft.content, "body");
        assert_eq!(draft.category, Some(Category::Sport));
        assert_eq!(draft.image, "");
    }

    #[test]
    fn toggle_tag_twice_restores_membership() {
        let (mut composer, _, _) = composer_with(StubFeed::with(Vec::new()));
        composer.apply(DraftPatch::Tags(vec!["css".into()]));

        composer.toggle_tag("vue");
        assert_eq!(composer.draft().tags, ["css", "vue"]);

        composer.toggle_tag("vue");
        assert_eq!(composer.draft().tags, ["css"]);
    }

    #[tokio::test]
    async fn submit_in_create_mode_appends_and_resets() {
        let (mut composer, store, reporter) = composer_with(StubFeed::with(Vec::new()));

        composer.apply(DraftPatch::Title("Titolo".into()));
        composer.apply(DraftPatch::Content("Contenuto".into()));
        composer.toggle_tag("react");
        let staged = Post::from(composer.draft());

        composer.submit().await;

        assert_eq!(composer.posts().len(), 1);
        assert_eq!(composer.posts()[0], staged);
        assert_eq!(composer.draft(), &Draft::default());
        assert_eq!(composer.editing(), None);
        assert_eq!(store.ops(), ["create Titolo"]);
        assert!(reporter.failures().is_empty());
    }

    #[tokio::test]
    async fn edit_then_submit_overwrites_in_place() {
        let (mut composer, store, _) =
            composer_with(StubFeed::with(vec![post("A"), post("B"), post("C")]));
        composer.refresh().await;

        composer.edit(1);
        assert_eq!(composer.mode(), ComposerMode::Update);
        composer.apply(DraftPatch::Title("B2".into()));
        composer.submit().await;

        let titles: Vec<&str> = composer
            .posts()
            .iter()
            .map(|post| post.title.as_str())
            .collect();
        assert_eq!(titles, ["A", "B2", "C"]);
        assert_eq!(composer.posts().len(), 3);
        assert_eq!(composer.editing(), None);
        assert_eq!(composer.mode(), ComposerMode::Create);
        assert_eq!(store.ops(), ["update 1 B2"]);
    }

    #[tokio::test]
    async fn edit_copies_entry_into_draft_raw() {
        let remote = Post {
            image: Some("https://example.com/a.png".into()),
            ..post("A")
        };
        let (mut composer, _, _) = composer_with(StubFeed::with(vec![remote.clone()]));
        composer.refresh().await;

        composer.edit(0);

        assert_eq!(composer.draft(), &Draft::from(&remote));
        assert_eq!(composer.editing(), Some(0));
    }

    #[tokio::test]
    async fn remove_shifts_later_entries_down() {
        let (mut composer, store, _) =
            composer_with(StubFeed::with(vec![post("A"), post("B"), post("C")]));
        composer.refresh().await;

        composer.remove(1).await;

        let titles: Vec<&str> = composer
            .posts()
            .iter()
            .map(|post| post.title.as_str())
            .collect();
        assert_eq!(titles, ["A", "C"]);
        assert_eq!(store.ops(), ["delete 1"]);
    }

    #[tokio::test]
    async fn retitle_scenario_keeps_neighbors_untouched() {
        let (mut composer, _, _) = composer_with(StubFeed::with(vec![post("A"), post("B")]));
        composer.refresh().await;

        composer.edit(0);
        composer.apply(DraftPatch::Title("A2".into()));
        composer.submit().await;

        assert_eq!(composer.posts()[0].title, "A2");
        assert_eq!(composer.posts()[1], post("B"));
        assert_eq!(composer.editing(), None);
    }

    #[tokio::test]
    async fn refresh_replaces_list_wholesale() {
        let (mut composer, _, _) = composer_with(StubFeed::with(vec![post("X")]));
        composer.apply(DraftPatch::Title("in progress".into()));

        composer.refresh().await;
        composer.refresh().await;

        assert_eq!(composer.posts().len(), 1);
        assert_eq!(composer.posts()[0].title, "X");
        // The in-flight draft and cursor are untouched by a fetch.
        assert_eq!(composer.draft().title, "in progress");
        assert_eq!(composer.editing(), None);
    }

    #[tokio::test]
    async fn refresh_failure_leaves_state_and_reports() {
        let (mut composer, _, reporter) = composer_with(StubFeed::with(vec![post("A")]));
        composer.refresh().await;

        let failing: Arc<dyn PostFeed> = Arc::new(StubFeed::failing());
        composer.feed = failing;
        composer.refresh().await;

        assert_eq!(composer.posts().len(), 1);
        assert_eq!(composer.posts()[0].title, "A");
        let failures = reporter.failures();
        assert_eq!(failures.len(), 1);
        assert!(failures[0].contains("failed to fetch posts"));
    }

    #[tokio::test]
    async fn store_failure_is_reported_and_local_mutation_stands() {
        let store = Arc::new(RecordingStore::failing());
        let reporter = Arc::new(RecordingReporter::default());
        let mut composer = ComposerService::new(
            Arc::new(StubFeed::with(Vec::new())),
            store.clone(),
            reporter.clone(),
        );

        composer.apply(DraftPatch::Title("T".into()));
        composer.submit().await;

        assert_eq!(composer.posts().len(), 1);
        let failures = reporter.failures();
        assert_eq!(failures.len(), 1);
        assert!(failures[0].contains("failed to sync create"));
    }

    #[tokio::test]
    async fn remove_out_of_range_is_a_reported_noop() {
        let (mut composer, store, reporter) = composer_with(StubFeed::with(vec![post("A")]));
        composer.refresh().await;

        composer.remove(5).await;

        assert_eq!(composer.posts().len(), 1);
        assert!(store.ops().is_empty());
        let failures = reporter.failures();
        assert_eq!(failures.len(), 1);
        assert!(failures[0].contains("out-of-range index 5"));
    }

    #[tokio::test]
    async fn stale_edit_cursor_reports_instead_of_growing_the_list() {
        let (mut composer, store, reporter) =
            composer_with(StubFeed::with(vec![post("A"), post("B")]));
        composer.refresh().await;
        composer.edit(1);

        // A second refresh resolving with fewer entries strands the
        // cursor past the end of the list.
        let shrunk: Arc<dyn PostFeed> = Arc::new(StubFeed::with(vec![post("A")]));
        composer.feed = shrunk;
        composer.refresh().await;
        composer.submit().await;

        assert_eq!(composer.posts().len(), 1);
        assert!(store.ops().is_empty());
        assert_eq!(composer.editing(), None);
        let failures = reporter.failures();
        assert_eq!(failures.len(), 1);
        assert!(failures[0].contains("out-of-range index 1"));
    }

    #[test]
    fn out_of_range_edit_changes_nothing() {
        let (mut composer, _, _) = composer_with(StubFeed::with(Vec::new()));
        composer.apply(DraftPatch::Title("kept".into()));

        composer.edit(3);

        assert_eq!(composer.draft().title, "kept");
        assert_eq!(composer.editing(), None);
    }
}
