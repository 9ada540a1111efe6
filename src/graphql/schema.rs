use async_graphql::{
    Context, EmptySubscription, ErrorExtensions, Object, Result as GraphQLResult,
    Schema as GraphQLSchema, ID,
};

use crate::{
    app_state::AppState,
    models::{
        domain::Quiz,
        dto::{
            request::QuizRequest,
            response::{CheckResult, DeleteQuizResponse, PlayView},
        },
    },
};

pub type Schema = GraphQLSchema<QueryRoot, MutationRoot, EmptySubscription>;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn quizzes(&self, ctx: &Context<'_>) -> GraphQLResult<Vec<Quiz>> {
        let state = ctx.data::<AppState>()?;
        state.quiz_service.list_quizzes().await.map_err(|e| e.extend())
    }

    async fn quiz(&self, ctx: &Context<'_>, id: ID) -> GraphQLResult<Quiz> {
        let state = ctx.data::<AppState>()?;
        state.quiz_service.get_edit_view(&id).await.map_err(|e| e.extend())
    }

    async fn play_quiz(
        &self,
        ctx: &Context<'_>,
        id: ID,
        response: Option<String>,
    ) -> GraphQLResult<PlayView> {
        let state = ctx.data::<AppState>()?;
        state.quiz_service.get_play_view(&id, response).await.map_err(|e| e.extend())
    }

    async fn check_answer(
        &self,
        ctx: &Context<'_>,
        id: ID,
        response: String,
    ) -> GraphQLResult<CheckResult> {
        let state = ctx.data::<AppState>()?;
        state.quiz_service.check_answer(&id, &response).await.map_err(|e| e.extend())
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_quiz(&self, ctx: &Context<'_>, input: QuizRequest) -> GraphQLResult<Quiz> {
        let state = ctx.data::<AppState>()?;
        state.quiz_service.create_quiz(input).await.map_err(|e| e.extend())
    }

    async fn update_quiz(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: QuizRequest,
    ) -> GraphQLResult<Quiz> {
        let state = ctx.data::<AppState>()?;
        state.quiz_service.update_quiz(&id, input).await.map_err(|e| e.extend())
    }

    async fn delete_quiz(&self, ctx: &Context<'_>, id: ID) -> GraphQLResult<DeleteQuizResponse> {
        let state = ctx.data::<AppState>()?;
        let id = state
            .quiz_service
            .delete_quiz(&id)
            .await
            .map_err(|e| e.extend())?;
        Ok(DeleteQuizResponse {
            message: format!("Quiz {} deleted", id),
        })
    }
}

pub fn create_schema(app_state: AppState) -> Schema {
    GraphQLSchema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(app_state)
        .finish()
}
