//! Concrete resources and their extra endpoints

use crate::error::ApiError;
use crate::models::*;

use super::{Resource, ResourceApi};

pub struct Users;

impl Resource for Users {
    const PATH: &'static str = "users";
    const SINGULAR: &'static str = "user";
    const PLURAL: &'static str = "users";
    type Entity = User;
    type Create = CreateUserDto;
    type Update = UpdateUserDto;
}

pub struct Quizzes;

impl Resource for Quizzes {
    const PATH: &'static str = "quizzes";
    const SINGULAR: &'static str = "quiz";
    const PLURAL: &'static str = "quizzes";
    type Entity = Quiz;
    type Create = CreateQuizDto;
    type Update = UpdateQuizDto;
}

impl ResourceApi<'_, Quizzes> {
    /// `POST /quizzes/bulk`
    pub async fn create_bulk(&self, dto: &QuizBulkDto) -> Result<Vec<Quiz>, ApiError> {
        self.client.post("/quizzes/bulk", dto).await
    }
}

pub struct Categories;

impl Resource for Categories {
    const PATH: &'static str = "categories";
    const SINGULAR: &'static str = "category";
    const PLURAL: &'static str = "categories";
    type Entity = Category;
    type Create = CreateCategoryDto;
    type Update = UpdateCategoryDto;
}

pub struct Questions;

impl Resource for Questions {
    const PATH: &'static str = "questions";
    const SINGULAR: &'static str = "question";
    const PLURAL: &'static str = "questions";
    type Entity = Question;
    type Create = CreateQuestionDto;
    type Update = UpdateQuestionDto;
}

impl ResourceApi<'_, Questions> {
    /// `GET /quizzes/:id/questions`
    pub async fn get_per_quiz(&self, quiz_id: EntityId) -> Result<Vec<Question>, ApiError> {
        self.client.get(&format!("/quizzes/{}/questions", quiz_id)).await
    }

    /// `POST /questions/bulk`
    pub async fn create_bulk(&self, dto: &QuestionBulkDto) -> Result<Vec<Question>, ApiError> {
        self.client.post("/questions/bulk", dto).await
    }
}

pub struct Answers;

impl Resource for Answers {
    const PATH: &'static str = "answers";
    const SINGULAR: &'static str = "answer";
    const PLURAL: &'static str = "answers";
    type Entity = Answer;
    type Create = CreateAnswerDto;
    type Update = UpdateAnswerDto;
}

impl ResourceApi<'_, Answers> {
    /// `GET /questions/:id/answers`
    pub async fn get_per_question(&self, question_id: EntityId) -> Result<Vec<Answer>, ApiError> {
        self.client.get(&format!("/questions/{}/answers", question_id)).await
    }

    /// `POST /answers/bulk`
    pub async fn create_bulk(&self, dto: &AnswerBulkDto) -> Result<Vec<Answer>, ApiError> {
        self.client.post("/answers/bulk", dto).await
    }
}

pub struct GameSessions;

impl Resource for GameSessions {
    const PATH: &'static str = "games";
    const SINGULAR: &'static str = "game session";
    const PLURAL: &'static str = "game sessions";
    type Entity = GameSession;
    type Create = CreateGameDto;
    type Update = UpdateGameDto;
}

impl ResourceApi<'_, GameSessions> {
    /// `GET /games/grouped`
    pub async fn get_grouped(&self) -> Result<Vec<GroupedGameSessions>, ApiError> {
        self.client.get("/games/grouped").await
    }
}
