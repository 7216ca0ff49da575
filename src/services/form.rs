use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::{Genre, GenreMood, Mood, Selection, ViewMode};

/// Notified after every genre or mood mutation
pub trait SelectionObserver: Send + Sync {
    fn selection_changed(&self, previous: GenreMood, current: GenreMood);
}

/// Owns the ephemeral form selection
///
/// Genre and mood are restricted to their option sets by type; search text
/// is unconstrained. Setters never perform I/O themselves.
#[derive(Clone, Default)]
pub struct FormStateController {
    state: Arc<RwLock<Selection>>,
    observers: Vec<Arc<dyn SelectionObserver>>,
}

impl FormStateController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_observer(mut self, observer: Arc<dyn SelectionObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    pub async fn selection(&self) -> Selection {
        self.state.read().await.clone()
    }

    pub async fn set_genre(&self, genre: Option<Genre>) {
        self.update_genre_mood(|selection| selection.genre = genre).await;
    }

    pub async fn set_mood(&self, mood: Option<Mood>) {
        self.update_genre_mood(|selection| selection.mood = mood).await;
    }

    pub async fn set_search_query(&self, query: impl Into<String>) {
        self.state.write().await.search_query = query.into();
    }

    pub async fn clear_search(&self) {
        self.state.write().await.search_query.clear();
    }

    pub async fn set_view_mode(&self, view_mode: ViewMode) {
        self.state.write().await.view_mode = view_mode;
    }

    /// Flips between the recommendations and favorites views, returning the new mode
    pub async fn toggle_view_mode(&self) -> ViewMode {
        let mut selection = self.state.write().await;
        selection.view_mode = selection.view_mode.toggled();
        selection.view_mode
    }

    async fn update_genre_mood<F>(&self, mutate: F)
    where
        F: FnOnce(&mut Selection),
    {
        let (previous, current) = {
            let mut selection = self.state.write().await;
            let previous = selection.genre_mood();
            mutate(&mut selection);
            (previous, selection.genre_mood())
        };

        for observer in &self.observers {
            observer.selection_changed(previous, current);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingObserver {
        seen: Mutex<Vec<(GenreMood, GenreMood)>>,
    }

    impl SelectionObserver for RecordingObserver {
        fn selection_changed(&self, previous: GenreMood, current: GenreMood) {
            self.seen.lock().unwrap().push((previous, current));
        }
    }

    #[tokio::test]
    async fn test_starts_empty() {
        let form = FormStateController::new();
        assert_eq!(form.selection().await, Selection::default());
    }

    #[tokio::test]
    async fn test_genre_and_mood_mutations_are_observed() {
        let observer = Arc::new(RecordingObserver::default());
        let form = FormStateController::new().with_observer(observer.clone());

        form.set_genre(Some(Genre::Comedy)).await;
        form.set_mood(Some(Mood::Happy)).await;

        let seen = observer.seen.lock().unwrap().clone();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].0, GenreMood::default());
        assert_eq!(seen[0].1.genre, Some(Genre::Comedy));
        assert_eq!(seen[1].0, seen[0].1);
        assert_eq!(seen[1].1.mood, Some(Mood::Happy));
    }

    #[tokio::test]
    async fn test_search_and_view_mode_are_not_observed() {
        let observer = Arc::new(RecordingObserver::default());
        let form = FormStateController::new().with_observer(observer.clone());

        form.set_search_query("heat").await;
        form.set_view_mode(ViewMode::Favorites).await;

        assert!(observer.seen.lock().unwrap().is_empty());
        let selection = form.selection().await;
        assert_eq!(selection.search_query, "heat");
        assert_eq!(selection.view_mode, ViewMode::Favorites);
    }

    #[tokio::test]
    async fn test_clear_search() {
        let form = FormStateController::new();
        form.set_search_query("toy").await;
        form.clear_search().await;
        assert_eq!(form.selection().await.search_query, "");
    }

    #[tokio::test]
    async fn test_toggle_view_mode() {
        let form = FormStateController::new();
        assert_eq!(form.toggle_view_mode().await, ViewMode::Favorites);
        assert_eq!(form.toggle_view_mode().await, ViewMode::Recommendations);
    }

    #[tokio::test]
    async fn test_unsetting_genre() {
        let form = FormStateController::new();
        form.set_genre(Some(Genre::Action)).await;
        form.set_genre(None).await;
        assert!(form.selection().await.genre_mood().is_empty());
    }
}
