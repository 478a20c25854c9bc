//! Async resource store driven by the API client

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::api::{Answers, GameSessions, Questions, Quizzes, Resource, ResourceApi};
use crate::error::ApiError;
use crate::http::ApiClient;
use crate::models::{
    Answer, AnswerBulkDto, EntityId, GroupedGameSessions, Question, QuestionBulkDto, Quiz, QuizBulkDto,
};

use super::{ResourceAction, ResourceState};

/// Shared state of one resource plus the operations that update it
///
/// Failures never surface as `Err`: the operation returns an empty value and
/// `state().error` holds a fixed message such as `Failed to fetch quizzes`.
pub struct ResourceStore<R: Resource> {
    client: Arc<ApiClient>,
    state: RwLock<ResourceState<R::Entity>>,
    detached: AtomicBool,
}

impl<R: Resource> ResourceStore<R> {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            state: RwLock::new(ResourceState::default()),
            detached: AtomicBool::new(false),
        }
    }

    /// Snapshot of the current state
    pub async fn state(&self) -> ResourceState<R::Entity> {
        self.state.read().await.clone()
    }

    pub async fn items(&self) -> Vec<R::Entity> {
        self.state.read().await.items.clone()
    }

    /// Stop applying results to the state
    ///
    /// In-flight requests are not cancelled; their outcome is still returned
    /// to the caller but no longer written.
    pub fn detach(&self) {
        self.detached.store(true, Ordering::SeqCst);
    }

    pub fn is_detached(&self) -> bool {
        self.detached.load(Ordering::SeqCst)
    }

    fn api(&self) -> ResourceApi<'_, R> {
        ResourceApi::new(&self.client)
    }

    async fn dispatch(&self, action: ResourceAction<R::Entity>) {
        if self.is_detached() {
            tracing::debug!(resource = R::PATH, "store detached, dropping state update");
            return;
        }
        self.state.write().await.apply(action);
    }

    /// Common request lifecycle: start, call, then success action or error message
    async fn run<T, Fut, A>(&self, call: Fut, on_success: A, message: String) -> Option<T>
    where
        Fut: Future<Output = Result<T, ApiError>>,
        A: FnOnce(&T) -> ResourceAction<R::Entity>,
    {
        self.dispatch(ResourceAction::FetchStart).await;

        match call.await {
            Ok(value) => {
                self.dispatch(on_success(&value)).await;
                Some(value)
            }
            Err(err) => {
                tracing::error!(resource = R::PATH, error = %err, "{}", message);
                self.dispatch(ResourceAction::FetchError(message)).await;
                None
            }
        }
    }

    /// Load every entity; empty on failure
    pub async fn fetch_all(&self) -> Vec<R::Entity> {
        self.run(
            self.api().get_all(),
            |items| ResourceAction::FetchAllSuccess(items.clone()),
            format!("Failed to fetch {}", R::PLURAL),
        )
        .await
        .unwrap_or_default()
    }

    /// Load one entity into `selected`
    pub async fn fetch_one(&self, id: EntityId) -> Option<R::Entity> {
        self.run(
            self.api().get_by_id(id),
            |item| ResourceAction::FetchOneSuccess(item.clone()),
            format!("Failed to fetch {} with ID: {}", R::SINGULAR, id),
        )
        .await
    }

    pub async fn create(&self, dto: &R::Create) -> Option<R::Entity> {
        self.run(
            self.api().create(dto),
            |item| ResourceAction::CreateSuccess(item.clone()),
            format!("Failed to create {}", R::SINGULAR),
        )
        .await
    }

    pub async fn update(&self, id: EntityId, dto: &R::Update) -> Option<R::Entity> {
        self.run(
            self.api().update(id, dto),
            |item| ResourceAction::UpdateSuccess(item.clone()),
            format!("Failed to update {} with ID: {}", R::SINGULAR, id),
        )
        .await
    }

    /// `true` once the server confirmed the deletion
    pub async fn delete(&self, id: EntityId) -> bool {
        self.run(
            self.api().delete(id),
            |_| ResourceAction::DeleteSuccess(id),
            format!("Failed to delete {} with ID: {}", R::SINGULAR, id),
        )
        .await
        .is_some()
    }
}

impl ResourceStore<Quizzes> {
    pub async fn create_bulk(&self, dto: &QuizBulkDto) -> Vec<Quiz> {
        self.run(
            self.api().create_bulk(dto),
            |items| ResourceAction::BulkCreateSuccess(items.clone()),
            format!("Failed to create {}", Quizzes::PLURAL),
        )
        .await
        .unwrap_or_default()
    }
}

impl ResourceStore<Questions> {
    /// Replace the cached list with the questions of one quiz
    pub async fn fetch_per_quiz(&self, quiz_id: EntityId) -> Vec<Question> {
        self.run(
            self.api().get_per_quiz(quiz_id),
            |items| ResourceAction::FetchAllSuccess(items.clone()),
            format!("Failed to fetch questions for quiz with ID: {}", quiz_id),
        )
        .await
        .unwrap_or_default()
    }

    pub async fn create_bulk(&self, dto: &QuestionBulkDto) -> Vec<Question> {
        self.run(
            self.api().create_bulk(dto),
            |items| ResourceAction::BulkCreateSuccess(items.clone()),
            format!("Failed to create {}", Questions::PLURAL),
        )
        .await
        .unwrap_or_default()
    }
}

impl ResourceStore<Answers> {
    /// Replace the cached list with the answers of one question
    pub async fn fetch_per_question(&self, question_id: EntityId) -> Vec<Answer> {
        self.run(
            self.api().get_per_question(question_id),
            |items| ResourceAction::FetchAllSuccess(items.clone()),
            format!("Failed to fetch answers for question with ID: {}", question_id),
        )
        .await
        .unwrap_or_default()
    }

    pub async fn create_bulk(&self, dto: &AnswerBulkDto) -> Vec<Answer> {
        self.run(
            self.api().create_bulk(dto),
            |items| ResourceAction::BulkCreateSuccess(items.clone()),
            format!("Failed to create {}", Answers::PLURAL),
        )
        .await
        .unwrap_or_default()
    }
}

impl ResourceStore<GameSessions> {
    /// Server-side grouping; not cached in `items`
    pub async fn fetch_grouped(&self) -> Vec<GroupedGameSessions> {
        self.run(
            self.api().get_grouped(),
            |_| ResourceAction::Settled,
            format!("Failed to fetch {} grouped", GameSessions::PLURAL),
        )
        .await
        .unwrap_or_default()
    }
}
